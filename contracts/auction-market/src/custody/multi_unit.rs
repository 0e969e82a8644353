use crate::*;

/// Semi-fungible custody: balances per (token, account). Each item is backed
/// by `UNITS_PER_ITEM` units; a transfer moves exactly those units.
#[near(serializers = [borsh])]
pub struct MultiUnitCustody {
    /// Key: "{token_id}:{account_id}".
    balances: LookupMap<String, u128>,
    supply: LookupMap<TokenId, u128>,
    next_token_id: TokenId,
}

fn balance_key(token_id: TokenId, account_id: &AccountId) -> String {
    format!("{}{}{}", token_id, DELIMETER, account_id)
}

impl MultiUnitCustody {
    pub fn new() -> Self {
        Self {
            balances: LookupMap::new(StorageKey::MultiUnitBalances),
            supply: LookupMap::new(StorageKey::MultiUnitSupply),
            next_token_id: 0,
        }
    }

    pub fn balance_of(&self, token_id: TokenId, account_id: &AccountId) -> u128 {
        self.balances
            .get(&balance_key(token_id, account_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_supply(&self, token_id: TokenId) -> Option<u128> {
        self.supply.get(&token_id).copied()
    }
}

impl Custody for MultiUnitCustody {
    fn mint(&mut self, initial_owner: &AccountId) -> TokenId {
        let token_id = self.next_token_id;
        self.next_token_id += 1;
        self.supply.insert(token_id, UNITS_PER_ITEM);
        self.balances
            .insert(balance_key(token_id, initial_owner), UNITS_PER_ITEM);
        token_id
    }

    fn transfer(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if !self.supply.contains_key(&token_id) {
            return Err(MarketplaceError::token_not_found(token_id));
        }
        let from_balance = self.balance_of(token_id, from);
        if from_balance < UNITS_PER_ITEM {
            return Err(MarketplaceError::NotOwner);
        }
        if from == to {
            return Ok(());
        }

        let remaining = from_balance - UNITS_PER_ITEM;
        if remaining == 0 {
            self.balances.remove(&balance_key(token_id, from));
        } else {
            self.balances.insert(balance_key(token_id, from), remaining);
        }
        let to_balance = self.balance_of(token_id, to);
        self.balances
            .insert(balance_key(token_id, to), to_balance + UNITS_PER_ITEM);
        Ok(())
    }

    fn holder_of(&self, token_id: TokenId, account_id: &AccountId) -> bool {
        self.balance_of(token_id, account_id) >= UNITS_PER_ITEM
    }
}
