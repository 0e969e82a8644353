use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<MarketConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(e) = config.validate() {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            items: IterableMap::new(StorageKey::Items),
            items_per_owner: LookupMap::new(StorageKey::ItemsPerOwner),
            next_item_id: 0,
            auctions: LookupMap::new(StorageKey::Auctions),
            escrow_balances: LookupMap::new(StorageKey::EscrowBalances),
            total_escrow: 0,
            single_unit: SingleUnitCustody::new(),
            multi_unit: MultiUnitCustody::new(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Applies a partial config update. Running auctions keep their deadline;
    /// a new duration only affects auctions opened afterwards.
    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: MarketConfigUpdate) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        let old_config = self.config.clone();
        self.config.apply_patch(&update);
        events::emit_config_updated(&self.owner_id, &old_config, &self.config);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_config(&self) -> &MarketConfig {
        &self.config
    }
}
