use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- init ---

#[test]
fn new_sets_owner_version_and_default_config() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(contract.get_config(), &MarketConfig::default());
    assert_eq!(contract.get_supply_items(), 0);
    assert_eq!(contract.get_total_escrow(), U128(0));
}

#[test]
fn new_accepts_custom_config() {
    testing_env!(context(owner()).build());
    let config = MarketConfig {
        auction_duration_ns: 1_000,
        max_name_len: 8,
        max_metadata_locator_len: 64,
    };
    let contract = Contract::new(owner(), Some(config.clone()));
    assert_eq!(contract.get_config(), &config);
}

#[test]
#[should_panic(expected = "auction_duration_ns must be")]
fn new_rejects_invalid_config() {
    testing_env!(context(owner()).build());
    let config = MarketConfig {
        auction_duration_ns: 0,
        ..MarketConfig::default()
    };
    Contract::new(owner(), Some(config));
}

// --- transfer_ownership ---

#[test]
fn transfer_ownership_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(stranger()).unwrap();

    assert_eq!(contract.get_owner(), &stranger());
    let transferred = events_with_operation("owner_transferred");
    assert_eq!(transferred.len(), 1);
    assert_eq!(transferred[0]["new_owner"], stranger().as_str());
}

#[test]
fn transfer_ownership_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    assert!(matches!(
        contract.transfer_ownership(stranger()).unwrap_err(),
        MarketplaceError::InsufficientDeposit(_)
    ));
}

#[test]
fn transfer_ownership_by_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(stranger(), 1).build());
    assert!(matches!(
        contract.transfer_ownership(stranger()).unwrap_err(),
        MarketplaceError::Unauthorized(_)
    ));
}

#[test]
fn transfer_ownership_to_self_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    assert!(matches!(
        contract.transfer_ownership(owner()).unwrap_err(),
        MarketplaceError::InvalidInput(_)
    ));
}

// --- update_config ---

#[test]
fn update_config_applies_partial_patch() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(MarketConfigUpdate {
            max_name_len: Some(16),
            ..Default::default()
        })
        .unwrap();

    let config = contract.get_config();
    assert_eq!(config.max_name_len, 16);
    assert_eq!(config.auction_duration_ns, DEFAULT_AUCTION_DURATION_NS);
    assert_eq!(events_with_operation("config_updated").len(), 1);
}

#[test]
fn update_config_rejects_out_of_range_values() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    let err = contract
        .update_config(MarketConfigUpdate {
            auction_duration_ns: Some(MAX_AUCTION_DURATION_NS + 1),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));

    let err = contract
        .update_config(MarketConfigUpdate {
            max_metadata_locator_len: Some(0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
    assert_eq!(contract.get_config(), &MarketConfig::default());
}

#[test]
fn update_config_by_non_owner_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());
    assert!(matches!(
        contract.update_config(MarketConfigUpdate::default()).unwrap_err(),
        MarketplaceError::Unauthorized(_)
    ));
}

#[test]
fn duration_change_does_not_move_running_deadline() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract, ProtocolType::SingleUnit);

    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(MarketConfigUpdate {
            auction_duration_ns: Some(1),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        contract.get_auction(item_id).unwrap().deadline,
        START_TS + DEFAULT_AUCTION_DURATION_NS
    );
}
