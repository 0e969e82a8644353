use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Items,
    ItemsPerOwner,
    ItemsPerOwnerInner { account_id_hash: Vec<u8> },
    Auctions,
    EscrowBalances,
    SingleUnitOwners,
    MultiUnitBalances,
    MultiUnitSupply,
}
