use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketConfig {
    /// Time from `list_item_on_auction` to the auction deadline, in ns.
    pub auction_duration_ns: u64,
    pub max_name_len: u32,
    pub max_metadata_locator_len: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            auction_duration_ns: DEFAULT_AUCTION_DURATION_NS,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_metadata_locator_len: DEFAULT_MAX_METADATA_LOCATOR_LEN,
        }
    }
}

impl MarketConfig {
    pub fn validate(&self) -> Result<(), MarketplaceError> {
        if !(1..=MAX_AUCTION_DURATION_NS).contains(&self.auction_duration_ns) {
            return Err(MarketplaceError::InvalidInput(format!(
                "auction_duration_ns must be 1..={MAX_AUCTION_DURATION_NS}"
            )));
        }
        if !(1..=MAX_NAME_LEN_CAP).contains(&self.max_name_len) {
            return Err(MarketplaceError::InvalidInput(format!(
                "max_name_len must be 1..={MAX_NAME_LEN_CAP}"
            )));
        }
        if !(1..=MAX_METADATA_LOCATOR_LEN_CAP).contains(&self.max_metadata_locator_len) {
            return Err(MarketplaceError::InvalidInput(format!(
                "max_metadata_locator_len must be 1..={MAX_METADATA_LOCATOR_LEN_CAP}"
            )));
        }
        Ok(())
    }

    pub fn validate_patch(&self, patch: &MarketConfigUpdate) -> Result<(), MarketplaceError> {
        let mut next = self.clone();
        next.apply_patch(patch);
        next.validate()
    }

    pub fn apply_patch(&mut self, patch: &MarketConfigUpdate) {
        if let Some(v) = patch.auction_duration_ns {
            self.auction_duration_ns = v;
        }
        if let Some(v) = patch.max_name_len {
            self.max_name_len = v;
        }
        if let Some(v) = patch.max_metadata_locator_len {
            self.max_metadata_locator_len = v;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct MarketConfigUpdate {
    pub auction_duration_ns: Option<u64>,
    pub max_name_len: Option<u32>,
    pub max_metadata_locator_len: Option<u32>,
}
