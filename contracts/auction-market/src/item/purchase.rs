use crate::escrow::transfer_near;
use crate::*;

impl Contract {
    pub(crate) fn internal_buy_item(
        &mut self,
        buyer_id: &AccountId,
        item_id: u64,
        payment: u128,
    ) -> Result<PurchaseView, MarketplaceError> {
        let mut item = self.item_or_err(item_id)?;
        if !item.is_available {
            return Err(MarketplaceError::ItemNotAvailable);
        }
        if payment < item.price {
            return Err(MarketplaceError::InvalidPayment);
        }
        self.check_custody(&item)?;

        let previous_owner = item.owner.clone();
        let refund = payment - item.price;

        self.custody_mut(item.protocol_type)
            .transfer(item.token_id, &previous_owner, buyer_id)?;
        item.owner = buyer_id.clone();
        item.is_available = false;
        self.save_item(item.clone())?;
        self.move_item_owner(item_id, &previous_owner, buyer_id);

        transfer_near(&previous_owner, item.price);
        transfer_near(buyer_id, refund);

        events::emit_item_bought(buyer_id, &item, &previous_owner, refund);
        Ok(PurchaseView {
            item: item.to_view(),
            previous_owner,
            refunded: U128(refund),
        })
    }
}

#[near]
impl Contract {
    /// Buys a listed item; the attached deposit is the payment. The seller
    /// receives exactly the price and any overpayment is refunded.
    #[payable]
    #[handle_result]
    pub fn buy_item(&mut self, item_id: u64) -> Result<PurchaseView, MarketplaceError> {
        let buyer_id = env::predecessor_account_id();
        let payment = env::attached_deposit().as_yoctonear();
        self.internal_buy_item(&buyer_id, item_id, payment)
    }
}
