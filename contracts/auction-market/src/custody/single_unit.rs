use crate::*;

/// Non-fungible custody: every token has exactly one holder.
#[near(serializers = [borsh])]
pub struct SingleUnitCustody {
    owner_by_token: LookupMap<TokenId, AccountId>,
    next_token_id: TokenId,
}

impl SingleUnitCustody {
    pub fn new() -> Self {
        Self {
            owner_by_token: LookupMap::new(StorageKey::SingleUnitOwners),
            next_token_id: 0,
        }
    }

    pub fn owner_of(&self, token_id: TokenId) -> Option<&AccountId> {
        self.owner_by_token.get(&token_id)
    }
}

impl Custody for SingleUnitCustody {
    fn mint(&mut self, initial_owner: &AccountId) -> TokenId {
        let token_id = self.next_token_id;
        self.next_token_id += 1;
        self.owner_by_token.insert(token_id, initial_owner.clone());
        token_id
    }

    fn transfer(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), MarketplaceError> {
        let holder = self
            .owner_by_token
            .get(&token_id)
            .ok_or_else(|| MarketplaceError::token_not_found(token_id))?;
        if holder != from {
            return Err(MarketplaceError::NotOwner);
        }
        self.owner_by_token.insert(token_id, to.clone());
        Ok(())
    }

    fn holder_of(&self, token_id: TokenId, account_id: &AccountId) -> bool {
        self.owner_by_token.get(&token_id) == Some(account_id)
    }
}
