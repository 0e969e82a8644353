mod builder;
mod types;

mod auction;
mod contract;
mod item;

pub use auction::*;
pub use contract::*;
pub use item::*;

pub(crate) const STANDARD: &str = "auction_market";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const ITEM: &str = "ITEM_UPDATE";
pub(crate) const AUCTION: &str = "AUCTION_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
