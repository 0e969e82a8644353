//! Typed error handling for the auction market contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` so public methods can be marked
//! `#[handle_result]`. When a method returns `Err(MarketplaceError::Xxx)`, the
//! SDK calls `env::panic_str()` with the Display message, which also rolls
//! back every state change and scheduled transfer of the call.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum MarketplaceError {
    /// Caller is not the item's current owner.
    NotOwner,
    /// Fixed-price purchase of an item that is not listed.
    ItemNotAvailable,
    /// Attached payment below the fixed price.
    InvalidPayment,
    /// Fixed-price listing of an item that is in an auction.
    ItemInAuction,
    /// Auction listing of an item that is already listed or in an auction.
    ItemAlreadyPlaced,
    /// Bid not strictly above the current top bid.
    BidTooLow,
    /// Resolution attempted before the deadline.
    AuctionStillActive,
    /// Auction already resolved, or bidding window closed.
    AuctionFinished,
    /// Finish attempted with fewer than `MIN_BIDS_TO_FINISH` bids.
    TooFewBidders,
    /// Cancel attempted on an auction that has enough bids to finish.
    AuctionAlreadyTookPlace,
    /// Caller lacks an administrative permission.
    Unauthorized(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// Invalid parameters from the caller.
    InvalidInput(String),
    /// Attached deposit does not satisfy a guard.
    InsufficientDeposit(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner => write!(f, "You're not the owner"),
            Self::ItemNotAvailable => write!(f, "Item is not available"),
            Self::InvalidPayment => write!(f, "Invalid payment sum"),
            Self::ItemInAuction => write!(f, "Item is placed in auction"),
            Self::ItemAlreadyPlaced => write!(f, "Item already placed"),
            Self::BidTooLow => write!(f, "Bid is too low"),
            Self::AuctionStillActive => write!(f, "Auction is still active"),
            Self::AuctionFinished => write!(f, "Auction finished"),
            Self::TooFewBidders => write!(f, "Too few bidders"),
            Self::AuctionAlreadyTookPlace => write!(f, "Auction has already taken place"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn item_not_found(item_id: u64) -> Self {
        Self::NotFound(format!("Item {} not found", item_id))
    }
    pub fn auction_not_found(item_id: u64) -> Self {
        Self::NotFound(format!("No auction found for item {}", item_id))
    }
    pub fn token_not_found(token_id: u64) -> Self {
        Self::NotFound(format!("Token {} not found", token_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
