use crate::validation::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn get_item(&self, item_id: u64) -> Option<ItemView> {
        self.items.get(&item_id).map(Item::to_view)
    }

    pub fn get_supply_items(&self) -> u64 {
        self.items.len() as u64
    }

    pub fn get_next_item_id(&self) -> u64 {
        self.next_item_id
    }

    pub fn get_items(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<ItemView> {
        let (start, limit) = page_bounds(from_index, limit);
        self.items
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, item)| item.to_view())
            .collect()
    }

    pub fn get_supply_for_owner(&self, account_id: AccountId) -> u64 {
        self.items_per_owner
            .get(&account_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_items_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<ItemView> {
        let Some(owned) = self.items_per_owner.get(&account_id) else {
            return vec![];
        };

        let (start, limit) = page_bounds(from_index, limit);
        owned
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|item_id| self.items.get(item_id).map(Item::to_view))
            .collect()
    }
}
