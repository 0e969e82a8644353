//! Item creation and fixed-price listing.

use crate::guards::check_item_owner;
use crate::validation::validate_item_input;
use crate::*;

impl Contract {
    pub(crate) fn internal_create_item(
        &mut self,
        actor_id: &AccountId,
        metadata_locator: String,
        price: u128,
        name: String,
        protocol_type: ProtocolType,
    ) -> Result<Item, MarketplaceError> {
        validate_item_input(&self.config, &metadata_locator, &name)?;

        let token_id = self.custody_mut(protocol_type).mint(actor_id);
        let item_id = self.next_item_id;
        self.next_item_id += 1;

        let item = Item {
            id: item_id,
            metadata_locator,
            price,
            name,
            owner: actor_id.clone(),
            protocol_type,
            token_id,
            is_available: false,
            is_in_auction: false,
        };
        self.save_item(item.clone())?;
        self.add_item_to_owner(actor_id, item_id);

        events::emit_item_created(actor_id, &item);
        Ok(item)
    }

    pub(crate) fn internal_list_item(
        &mut self,
        actor_id: &AccountId,
        item_id: u64,
    ) -> Result<Item, MarketplaceError> {
        let mut item = self.item_or_err(item_id)?;
        check_item_owner(&item, actor_id)?;
        if item.is_in_auction {
            return Err(MarketplaceError::ItemInAuction);
        }

        // Re-listing an already listed item is a no-op success.
        item.is_available = true;
        self.save_item(item.clone())?;

        events::emit_item_listed(actor_id, &item);
        Ok(item)
    }

    pub(crate) fn internal_cancel_listing(
        &mut self,
        actor_id: &AccountId,
        item_id: u64,
    ) -> Result<Item, MarketplaceError> {
        let mut item = self.item_or_err(item_id)?;
        check_item_owner(&item, actor_id)?;

        item.is_available = false;
        self.save_item(item.clone())?;

        events::emit_item_unlisted(actor_id, &item);
        Ok(item)
    }
}

#[near]
impl Contract {
    /// Mints a backing token for the caller and records a new, unlisted item.
    #[handle_result]
    pub fn create_item(
        &mut self,
        metadata_locator: String,
        price: U128,
        name: String,
        protocol_type: ProtocolType,
    ) -> Result<ItemView, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        self.internal_create_item(&actor_id, metadata_locator, price.0, name, protocol_type)
            .map(|item| item.to_view())
    }

    #[handle_result]
    pub fn list_item(&mut self, item_id: u64) -> Result<ItemView, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        self.internal_list_item(&actor_id, item_id)
            .map(|item| item.to_view())
    }

    /// Withdraws the item from fixed-price sale.
    #[handle_result]
    pub fn cancel(&mut self, item_id: u64) -> Result<ItemView, MarketplaceError> {
        let actor_id = env::predecessor_account_id();
        self.internal_cancel_listing(&actor_id, item_id)
            .map(|item| item.to_view())
    }
}
