//! Token custody: one capability interface over the two supported token standards.
//!
//! The engine only ever mints a backing token at item creation and moves it
//! when ownership changes. Which backend holds an item's token is fixed by the
//! item's `protocol_type`; `Contract::custody_mut` is the only place that maps
//! one to the other.

mod multi_unit;
mod single_unit;

pub use multi_unit::MultiUnitCustody;
pub use single_unit::SingleUnitCustody;

use crate::*;

pub type TokenId = u64;

#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolType {
    /// One owner per token (NEP-171 style).
    SingleUnit,
    /// Unit balances per (token, account) (multi-token style).
    MultiUnit,
}

pub trait Custody {
    /// Creates a new backing token held by `initial_owner`.
    fn mint(&mut self, initial_owner: &AccountId) -> TokenId;

    /// Moves custody of `token_id` from `from` to `to`.
    /// Fails with `NotOwner` when `from` does not hold the token.
    fn transfer(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError>;

    fn holder_of(&self, token_id: TokenId, account_id: &AccountId) -> bool;
}

impl Contract {
    pub(crate) fn custody(&self, protocol_type: ProtocolType) -> &dyn Custody {
        match protocol_type {
            ProtocolType::SingleUnit => &self.single_unit,
            ProtocolType::MultiUnit => &self.multi_unit,
        }
    }

    pub(crate) fn custody_mut(&mut self, protocol_type: ProtocolType) -> &mut dyn Custody {
        match protocol_type {
            ProtocolType::SingleUnit => &mut self.single_unit,
            ProtocolType::MultiUnit => &mut self.multi_unit,
        }
    }
}

#[near]
impl Contract {
    pub fn get_token_holder(&self, token_id: TokenId) -> Option<&AccountId> {
        self.single_unit.owner_of(token_id)
    }

    pub fn get_token_balance(&self, token_id: TokenId, account_id: AccountId) -> U128 {
        U128(self.multi_unit.balance_of(token_id, &account_id))
    }
}
