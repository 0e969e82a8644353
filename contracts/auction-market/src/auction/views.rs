use crate::*;

#[near]
impl Contract {
    pub fn get_auction(&self, item_id: u64) -> Option<AuctionView> {
        self.auctions.get(&item_id).map(Auction::to_view)
    }
}
