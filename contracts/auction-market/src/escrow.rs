//! Bid escrow: attached bid deposits are held per bidder until refunded or paid out.

use crate::*;

/// Schedules a plain NEAR transfer; zero amounts are skipped.
pub(crate) fn transfer_near(receiver_id: &AccountId, amount: u128) {
    if amount > 0 {
        let _ = Promise::new(receiver_id.clone()).transfer(NearToken::from_yoctonear(amount));
    }
}

impl Contract {
    pub(crate) fn escrow_of(&self, bidder_id: &AccountId) -> u128 {
        self.escrow_balances.get(bidder_id).copied().unwrap_or(0)
    }

    pub(crate) fn hold_escrow(&mut self, bidder_id: &AccountId, amount: u128) {
        let balance = self.escrow_of(bidder_id);
        self.escrow_balances.insert(bidder_id.clone(), balance + amount);
        self.total_escrow += amount;
    }

    fn release_escrow(&mut self, bidder_id: &AccountId, amount: u128) -> Result<(), MarketplaceError> {
        let balance = self.escrow_of(bidder_id);
        if balance < amount || self.total_escrow < amount {
            return Err(MarketplaceError::InternalError(format!(
                "Escrow for {} holds {} but {} must be released",
                bidder_id, balance, amount
            )));
        }
        if balance == amount {
            self.escrow_balances.remove(bidder_id);
        } else {
            self.escrow_balances.insert(bidder_id.clone(), balance - amount);
        }
        self.total_escrow -= amount;
        Ok(())
    }

    /// Returns `amount` of the bidder's escrow to the bidder.
    pub(crate) fn refund_escrow(
        &mut self,
        bidder_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        self.release_escrow(bidder_id, amount)?;
        transfer_near(bidder_id, amount);
        Ok(())
    }

    /// Pays `amount` of the bidder's escrow out to `receiver_id`.
    pub(crate) fn pay_out_escrow(
        &mut self,
        bidder_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketplaceError> {
        self.release_escrow(bidder_id, amount)?;
        transfer_near(receiver_id, amount);
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn get_escrow_balance(&self, account_id: AccountId) -> U128 {
        U128(self.escrow_of(&account_id))
    }

    pub fn get_total_escrow(&self) -> U128 {
        U128(self.total_escrow)
    }
}
