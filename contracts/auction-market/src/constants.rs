//! Marketplace-wide constants.

use near_sdk::NearToken;

/// Default auction length: 3 days in nanoseconds.
pub const DEFAULT_AUCTION_DURATION_NS: u64 = 3 * 24 * 60 * 60 * 1_000_000_000;

/// Upper bound accepted by `update_config` for the auction length (30 days).
pub const MAX_AUCTION_DURATION_NS: u64 = 30 * 24 * 60 * 60 * 1_000_000_000;

/// An auction needs at least this many accepted bids to be finished; below
/// it the seller may only cancel.
pub const MIN_BIDS_TO_FINISH: u32 = 2;

/// Default and hard cap for item display names (bytes).
pub const DEFAULT_MAX_NAME_LEN: u32 = 256;
pub const MAX_NAME_LEN_CAP: u32 = 1_024;

/// Default and hard cap for metadata locators (bytes).
pub const DEFAULT_MAX_METADATA_LOCATOR_LEN: u32 = 2_048;
pub const MAX_METADATA_LOCATOR_LEN_CAP: u32 = 8_192;

/// Units minted per item by the multi-unit custody.
pub const UNITS_PER_ITEM: u128 = 1;

/// Default / maximum page size for enumeration views.
pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Delimiter for composite storage keys.
/// ":" is not a valid character in NEAR account IDs, preventing key collisions.
pub const DELIMETER: &str = ":";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
