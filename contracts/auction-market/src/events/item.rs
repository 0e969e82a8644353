use near_sdk::AccountId;

use super::ITEM;
use super::builder::EventBuilder;
use crate::Item;

pub fn emit_item_created(owner_id: &AccountId, item: &Item) {
    EventBuilder::new(ITEM, "item_created", owner_id)
        .field("item", item)
        .emit();
}

pub fn emit_item_listed(owner_id: &AccountId, item: &Item) {
    EventBuilder::new(ITEM, "item_listed", owner_id)
        .field("item", item)
        .emit();
}

pub fn emit_item_unlisted(owner_id: &AccountId, item: &Item) {
    EventBuilder::new(ITEM, "item_unlisted", owner_id)
        .field("item", item)
        .emit();
}

pub fn emit_item_bought(buyer_id: &AccountId, item: &Item, previous_owner: &AccountId, refunded: u128) {
    EventBuilder::new(ITEM, "item_bought", buyer_id)
        .field("item", item)
        .field("previous_owner", previous_owner)
        .field("refunded", refunded)
        .emit();
}
