//! Item domain types.

use crate::*;

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: u64,
    /// Stored verbatim; never interpreted.
    pub metadata_locator: String,
    /// yoctoNEAR. Immutable after creation.
    pub price: u128,
    pub name: String,
    pub owner: AccountId,
    pub protocol_type: ProtocolType,
    pub token_id: TokenId,
    /// Purchasable at `price` through `buy_item`.
    pub is_available: bool,
    /// Under an active or unresolved auction.
    pub is_in_auction: bool,
}

impl Item {
    pub fn to_view(&self) -> ItemView {
        ItemView {
            id: self.id,
            token_id: self.token_id,
            price: U128(self.price),
            name: self.name.clone(),
            metadata_locator: self.metadata_locator.clone(),
            owner: self.owner.clone(),
            protocol_type: self.protocol_type,
            is_available: self.is_available,
            is_in_auction: self.is_in_auction,
        }
    }

    pub(crate) fn check_invariants(&self) -> Result<(), MarketplaceError> {
        if self.is_available && self.is_in_auction {
            return Err(MarketplaceError::InternalError(format!(
                "Item {} is both listed and in auction",
                self.id
            )));
        }
        Ok(())
    }
}

/// Full snapshot of an item (JSON-only, not stored on-chain).
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    pub id: u64,
    pub token_id: TokenId,
    pub price: U128,
    pub name: String,
    pub metadata_locator: String,
    pub owner: AccountId,
    pub protocol_type: ProtocolType,
    pub is_available: bool,
    pub is_in_auction: bool,
}

/// Result of a fixed-price purchase.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseView {
    pub item: ItemView,
    pub previous_owner: AccountId,
    /// Overpayment returned to the buyer. yoctoNEAR.
    pub refunded: U128,
}
