use crate::*;

impl Contract {
    pub(crate) fn item_or_err(&self, item_id: u64) -> Result<Item, MarketplaceError> {
        self.items
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::item_not_found(item_id))
    }

    /// Persists `item` after checking the listed/in-auction exclusion.
    pub(crate) fn save_item(&mut self, item: Item) -> Result<(), MarketplaceError> {
        item.check_invariants()?;
        self.items.insert(item.id, item);
        Ok(())
    }

    /// The backing token must sit with the recorded owner before custody moves.
    pub(crate) fn check_custody(&self, item: &Item) -> Result<(), MarketplaceError> {
        if !self
            .custody(item.protocol_type)
            .holder_of(item.token_id, &item.owner)
        {
            return Err(MarketplaceError::InternalError(format!(
                "Token {} of item {} is not held by its owner",
                item.token_id, item.id
            )));
        }
        Ok(())
    }

    pub(crate) fn add_item_to_owner(&mut self, owner_id: &AccountId, item_id: u64) {
        let mut owned = self.items_per_owner.remove(owner_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::ItemsPerOwnerInner {
                account_id_hash: crate::guards::hash_account_id(owner_id),
            })
        });
        owned.insert(item_id);
        self.items_per_owner.insert(owner_id.clone(), owned);
    }

    pub(crate) fn remove_item_from_owner(&mut self, owner_id: &AccountId, item_id: u64) {
        if let Some(mut owned) = self.items_per_owner.remove(owner_id) {
            owned.remove(&item_id);
            if !owned.is_empty() {
                self.items_per_owner.insert(owner_id.clone(), owned);
            }
        }
    }

    pub(crate) fn move_item_owner(&mut self, item_id: u64, from: &AccountId, to: &AccountId) {
        if from == to {
            return;
        }
        self.remove_item_from_owner(from, item_id);
        self.add_item_to_owner(to, item_id);
    }
}
