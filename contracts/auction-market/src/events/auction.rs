use near_sdk::AccountId;

use super::AUCTION;
use super::builder::EventBuilder;
use crate::{Auction, Item};

pub fn emit_auction_created(seller_id: &AccountId, auction: &Auction, item: &Item) {
    EventBuilder::new(AUCTION, "auction_created", seller_id)
        .field("auction", auction)
        .field("item", item)
        .emit();
}

pub fn emit_bid_made(bidder_id: &AccountId, auction: &Auction, outbid: Option<(&AccountId, u128)>) {
    EventBuilder::new(AUCTION, "bid_made", bidder_id)
        .field("auction", auction)
        .field_opt("refunded_bidder", outbid.map(|(bidder, _)| bidder))
        .field_opt("refunded_amount", outbid.map(|(_, amount)| amount))
        .emit();
}

pub fn emit_auction_finished(
    seller_id: &AccountId,
    auction: &Auction,
    item: &Item,
    previous_owner: &AccountId,
) {
    EventBuilder::new(AUCTION, "auction_finished", seller_id)
        .field("auction", auction)
        .field("item", item)
        .field("previous_owner", previous_owner)
        .emit();
}

pub fn emit_auction_canceled(
    seller_id: &AccountId,
    auction: &Auction,
    item: &Item,
    refund: Option<(&AccountId, u128)>,
) {
    EventBuilder::new(AUCTION, "auction_canceled", seller_id)
        .field("auction", auction)
        .field("item", item)
        .field_opt("refunded_bidder", refund.map(|(bidder, _)| bidder))
        .field_opt("refunded_amount", refund.map(|(_, amount)| amount))
        .emit();
}
