//! Auction market contract: fixed-price sales and deadline auctions over marketplace-minted items, with bid escrow and NEP-297 events.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod config;
mod events;
mod storage;

mod auction;
mod custody;
mod escrow;
mod item;

mod admin;


pub use auction::{Auction, AuctionSnapshot, AuctionView};
pub use config::{MarketConfig, MarketConfigUpdate};
pub use constants::*;
pub use custody::{Custody, MultiUnitCustody, ProtocolType, SingleUnitCustody, TokenId};
pub use errors::MarketplaceError;
pub use item::{Item, ItemView, PurchaseView};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: MarketConfig,

    pub items: IterableMap<u64, Item>,
    pub(crate) items_per_owner: LookupMap<AccountId, IterableSet<u64>>,
    // Id allocation invariant: monotonically increasing, never reused.
    pub next_item_id: u64,

    pub auctions: LookupMap<u64, Auction>,

    // Escrow invariant: total_escrow == sum of top_bidder_sum over active auctions.
    pub(crate) escrow_balances: LookupMap<AccountId, u128>,
    pub total_escrow: u128,

    pub single_unit: SingleUnitCustody,
    pub multi_unit: MultiUnitCustody,
}
