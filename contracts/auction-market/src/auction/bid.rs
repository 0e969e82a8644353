use crate::*;

impl Contract {
    pub(crate) fn internal_make_bid(
        &mut self,
        bidder_id: &AccountId,
        item_id: u64,
        amount: u128,
    ) -> Result<Auction, MarketplaceError> {
        if !self.items.contains_key(&item_id) {
            return Err(MarketplaceError::item_not_found(item_id));
        }
        let mut auction = self.auction_or_err(item_id)?;

        // Bidding closes at the deadline even before the seller resolves.
        if !auction.is_active || auction.is_past_deadline(env::block_timestamp()) {
            return Err(MarketplaceError::AuctionFinished);
        }
        if amount <= auction.top_bidder_sum {
            return Err(MarketplaceError::BidTooLow);
        }
        let bids_num = auction.bids_num.checked_add(1).ok_or_else(|| {
            MarketplaceError::InternalError("Bid counter overflow".into())
        })?;

        // Outbid bidders are made whole in the same call, never at resolution.
        let outbid = auction
            .top_bidder
            .take()
            .map(|prev_bidder| (prev_bidder, auction.top_bidder_sum));
        if let Some((prev_bidder, prev_sum)) = &outbid {
            self.refund_escrow(prev_bidder, *prev_sum)?;
        }
        self.hold_escrow(bidder_id, amount);

        auction.top_bidder = Some(bidder_id.clone());
        auction.top_bidder_sum = amount;
        auction.bids_num = bids_num;
        self.auctions.insert(item_id, auction.clone());

        events::emit_bid_made(
            bidder_id,
            &auction,
            outbid.as_ref().map(|(prev_bidder, prev_sum)| (prev_bidder, *prev_sum)),
        );
        Ok(auction)
    }
}

#[near]
impl Contract {
    /// Places a bid equal to the attached deposit. The bid must exceed the
    /// current top bid; the previous top bidder is refunded immediately.
    #[payable]
    #[handle_result]
    pub fn make_bid(&mut self, item_id: u64) -> Result<AuctionView, MarketplaceError> {
        let bidder_id = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();
        self.internal_make_bid(&bidder_id, item_id, amount)
            .map(|auction| auction.to_view())
    }
}
