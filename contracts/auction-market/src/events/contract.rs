use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::MarketConfig;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_config_updated(owner_id: &AccountId, old_config: &MarketConfig, new_config: &MarketConfig) {
    EventBuilder::new(CONTRACT, "config_updated", owner_id)
        .field("old_auction_duration_ns", old_config.auction_duration_ns)
        .field("new_auction_duration_ns", new_config.auction_duration_ns)
        .field("old_max_name_len", old_config.max_name_len)
        .field("new_max_name_len", new_config.max_name_len)
        .field("old_max_metadata_locator_len", old_config.max_metadata_locator_len)
        .field("new_max_metadata_locator_len", new_config.max_metadata_locator_len)
        .emit();
}
