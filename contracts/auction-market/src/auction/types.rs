//! Auction domain types.

use crate::*;

/// Ascending-bid auction state; one record per item, replaced when the item
/// is auctioned again after resolution.
#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub item_id: u64,
    /// None = no bid yet.
    pub top_bidder: Option<AccountId>,
    /// yoctoNEAR held in escrow for `top_bidder`. 0 before any bid.
    pub top_bidder_sum: u128,
    pub bids_num: u32,
    /// Block timestamp (ns) at which bidding closes and resolution opens.
    pub deadline: u64,
    /// Cleared exactly once, by finish or cancel.
    pub is_active: bool,
}

impl Auction {
    pub fn new(item_id: u64, deadline: u64) -> Self {
        Self {
            item_id,
            top_bidder: None,
            top_bidder_sum: 0,
            bids_num: 0,
            deadline,
            is_active: true,
        }
    }

    pub fn is_past_deadline(&self, now: u64) -> bool {
        now >= self.deadline
    }

    pub fn to_view(&self) -> AuctionView {
        AuctionView {
            item_id: self.item_id,
            top_bidder: self.top_bidder.clone(),
            top_bidder_sum: U128(self.top_bidder_sum),
            bids_num: self.bids_num,
            deadline: self.deadline,
            is_active: self.is_active,
        }
    }
}

/// Full snapshot of an auction (JSON-only, not stored on-chain).
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionView {
    pub item_id: u64,
    pub top_bidder: Option<AccountId>,
    pub top_bidder_sum: U128,
    pub bids_num: u32,
    pub deadline: u64,
    pub is_active: bool,
}

/// Post-state of an auction operation that also touches the item.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionSnapshot {
    pub auction: AuctionView,
    pub item: ItemView,
}

impl AuctionSnapshot {
    pub(crate) fn new(auction: &Auction, item: &Item) -> Self {
        Self {
            auction: auction.to_view(),
            item: item.to_view(),
        }
    }
}
