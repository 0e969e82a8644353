use crate::guards::check_item_owner;
use crate::*;

impl Contract {
    pub(crate) fn auction_or_err(&self, item_id: u64) -> Result<Auction, MarketplaceError> {
        self.auctions
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::auction_not_found(item_id))
    }

    pub(crate) fn internal_list_item_on_auction(
        &mut self,
        actor_id: &AccountId,
        item_id: u64,
    ) -> Result<(Auction, Item), MarketplaceError> {
        let mut item = self.item_or_err(item_id)?;
        check_item_owner(&item, actor_id)?;
        if item.is_available || item.is_in_auction {
            return Err(MarketplaceError::ItemAlreadyPlaced);
        }
        if self.auctions.get(&item_id).is_some_and(|prev| prev.is_active) {
            return Err(MarketplaceError::InternalError(format!(
                "Item {} has an active auction but is not marked in auction",
                item_id
            )));
        }

        let deadline = env::block_timestamp().saturating_add(self.config.auction_duration_ns);
        let auction = Auction::new(item_id, deadline);

        item.is_in_auction = true;
        item.is_available = false;
        self.save_item(item.clone())?;
        self.auctions.insert(item_id, auction.clone());

        events::emit_auction_created(actor_id, &auction, &item);
        Ok((auction, item))
    }

    pub(crate) fn internal_finish_auction(
        &mut self,
        actor_id: &AccountId,
        item_id: u64,
    ) -> Result<(Auction, Item), MarketplaceError> {
        let mut item = self.item_or_err(item_id)?;
        let mut auction = self.auction_or_err(item_id)?;

        // Checked before ownership: a resolved auction rejects the former seller too.
        if !auction.is_active {
            return Err(MarketplaceError::AuctionFinished);
        }
        check_item_owner(&item, actor_id)?;
        if !auction.is_past_deadline(env::block_timestamp()) {
            return Err(MarketplaceError::AuctionStillActive);
        }
        if auction.bids_num < MIN_BIDS_TO_FINISH {
            return Err(MarketplaceError::TooFewBidders);
        }
        let winner_id = auction.top_bidder.clone().ok_or_else(|| {
            MarketplaceError::InternalError("Auction has bids but no top bidder".into())
        })?;
        self.check_custody(&item)?;

        let seller_id = item.owner.clone();
        let winning_bid = auction.top_bidder_sum;

        self.pay_out_escrow(&winner_id, &seller_id, winning_bid)?;
        self.custody_mut(item.protocol_type)
            .transfer(item.token_id, &seller_id, &winner_id)?;

        item.owner = winner_id.clone();
        item.is_in_auction = false;
        auction.is_active = false;
        self.save_item(item.clone())?;
        self.move_item_owner(item_id, &seller_id, &winner_id);
        self.auctions.insert(item_id, auction.clone());

        events::emit_auction_finished(actor_id, &auction, &item, &seller_id);
        Ok((auction, item))
    }

    pub(crate) fn internal_cancel_auction(
        &mut self,
        actor_id: &AccountId,
        item_id: u64,
    ) -> Result<(Auction, Item), MarketplaceError> {
        let mut item = self.item_or_err(item_id)?;
        let mut auction = self.auction_or_err(item_id)?;

        if !auction.is_active {
            return Err(MarketplaceError::AuctionFinished);
        }
        check_item_owner(&item, actor_id)?;
        if !auction.is_past_deadline(env::block_timestamp()) {
            return Err(MarketplaceError::AuctionStillActive);
        }
        if auction.bids_num >= MIN_BIDS_TO_FINISH {
            return Err(MarketplaceError::AuctionAlreadyTookPlace);
        }

        // Escrow invariant: the single bid (if any) is returned before the auction closes.
        let refund = match (&auction.top_bidder, auction.bids_num) {
            (None, 0) => None,
            (Some(bidder_id), 1) => Some((bidder_id.clone(), auction.top_bidder_sum)),
            _ => {
                return Err(MarketplaceError::InternalError(format!(
                    "Auction for item {} has {} bids but inconsistent top bidder",
                    item_id, auction.bids_num
                )));
            }
        };
        if let Some((bidder_id, amount)) = &refund {
            self.refund_escrow(bidder_id, *amount)?;
        }

        item.is_in_auction = false;
        auction.is_active = false;
        self.save_item(item.clone())?;
        self.auctions.insert(item_id, auction.clone());

        events::emit_auction_canceled(
            actor_id,
            &auction,
            &item,
            refund.as_ref().map(|(bidder_id, amount)| (bidder_id, *amount)),
        );
        Ok((auction, item))
    }
}

#[near]
impl Contract {
    /// Opens a fixed-length auction for an item that is neither listed nor
    /// already in an auction.
    #[handle_result]
    pub fn list_item_on_auction(&mut self, item_id: u64) -> Result<AuctionSnapshot, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        self.internal_list_item_on_auction(&actor_id, item_id)
            .map(|(auction, item)| AuctionSnapshot::new(&auction, &item))
    }

    /// Sells the item to the top bidder once the deadline has passed with at
    /// least two bids; the seller receives the winning bid.
    #[handle_result]
    pub fn finish_auction(&mut self, item_id: u64) -> Result<AuctionSnapshot, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        self.internal_finish_auction(&actor_id, item_id)
            .map(|(auction, item)| AuctionSnapshot::new(&auction, &item))
    }

    /// Closes an auction that ended with fewer than two bids; a single bidder
    /// is refunded and the item stays with the seller.
    #[handle_result]
    pub fn cancel_auction(&mut self, item_id: u64) -> Result<AuctionSnapshot, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        self.internal_cancel_auction(&actor_id, item_id)
            .map(|(auction, item)| AuctionSnapshot::new(&auction, &item))
    }
}
