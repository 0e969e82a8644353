use crate::*;

pub(crate) fn validate_item_input(
    config: &MarketConfig,
    metadata_locator: &str,
    name: &str,
) -> Result<(), MarketplaceError> {
    if name.is_empty() {
        return Err(MarketplaceError::InvalidInput("Item name must not be empty".into()));
    }
    if name.len() > config.max_name_len as usize {
        return Err(MarketplaceError::InvalidInput(format!(
            "Item name exceeds max length of {} bytes",
            config.max_name_len
        )));
    }
    if metadata_locator.len() > config.max_metadata_locator_len as usize {
        return Err(MarketplaceError::InvalidInput(format!(
            "Metadata locator exceeds max length of {} bytes",
            config.max_metadata_locator_len
        )));
    }
    Ok(())
}

pub(crate) fn page_bounds(from_index: Option<u64>, limit: Option<u64>) -> (usize, usize) {
    let start = from_index.unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
    (start as usize, limit as usize)
}
