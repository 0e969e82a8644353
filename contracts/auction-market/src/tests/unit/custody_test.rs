use crate::tests::test_utils::*;
use crate::*;

// --- Single-unit ---

#[test]
fn single_unit_mint_assigns_sequential_tokens() {
    let _ = new_contract();
    let mut custody = SingleUnitCustody::new();

    assert_eq!(custody.mint(&seller()), 0);
    assert_eq!(custody.mint(&bidder_a()), 1);
    assert_eq!(custody.owner_of(0), Some(&seller()));
    assert_eq!(custody.owner_of(1), Some(&bidder_a()));
}

#[test]
fn single_unit_transfer_moves_holder() {
    let _ = new_contract();
    let mut custody = SingleUnitCustody::new();
    let token_id = custody.mint(&seller());

    custody.transfer(token_id, &seller(), &bidder_a()).unwrap();

    assert!(custody.holder_of(token_id, &bidder_a()));
    assert!(!custody.holder_of(token_id, &seller()));
}

#[test]
fn single_unit_transfer_from_non_holder_fails() {
    let _ = new_contract();
    let mut custody = SingleUnitCustody::new();
    let token_id = custody.mint(&seller());

    let err = custody.transfer(token_id, &stranger(), &bidder_a()).unwrap_err();
    assert_eq!(err, MarketplaceError::NotOwner);
    assert!(custody.holder_of(token_id, &seller()));
}

#[test]
fn single_unit_transfer_unknown_token_fails() {
    let _ = new_contract();
    let mut custody = SingleUnitCustody::new();
    assert!(matches!(
        custody.transfer(5, &seller(), &bidder_a()).unwrap_err(),
        MarketplaceError::NotFound(_)
    ));
}

// --- Multi-unit ---

#[test]
fn multi_unit_mint_credits_units() {
    let _ = new_contract();
    let mut custody = MultiUnitCustody::new();
    let token_id = custody.mint(&seller());

    assert_eq!(custody.balance_of(token_id, &seller()), UNITS_PER_ITEM);
    assert_eq!(custody.total_supply(token_id), Some(UNITS_PER_ITEM));
    assert!(custody.holder_of(token_id, &seller()));
}

#[test]
fn multi_unit_transfer_moves_units_and_keeps_supply() {
    let _ = new_contract();
    let mut custody = MultiUnitCustody::new();
    let token_id = custody.mint(&seller());

    custody.transfer(token_id, &seller(), &bidder_a()).unwrap();

    assert_eq!(custody.balance_of(token_id, &seller()), 0);
    assert_eq!(custody.balance_of(token_id, &bidder_a()), UNITS_PER_ITEM);
    assert_eq!(custody.total_supply(token_id), Some(UNITS_PER_ITEM));
}

#[test]
fn multi_unit_transfer_without_balance_fails() {
    let _ = new_contract();
    let mut custody = MultiUnitCustody::new();
    let token_id = custody.mint(&seller());

    assert_eq!(
        custody.transfer(token_id, &bidder_a(), &bidder_b()).unwrap_err(),
        MarketplaceError::NotOwner
    );
}

#[test]
fn multi_unit_self_transfer_is_noop() {
    let _ = new_contract();
    let mut custody = MultiUnitCustody::new();
    let token_id = custody.mint(&seller());

    custody.transfer(token_id, &seller(), &seller()).unwrap();
    assert_eq!(custody.balance_of(token_id, &seller()), UNITS_PER_ITEM);
}

// --- Engine dispatch ---

#[test]
fn each_protocol_keeps_its_own_token_counter() {
    let mut contract = new_contract();
    let a = create_item_as(&mut contract, &seller(), 1, ProtocolType::SingleUnit);
    let b = create_item_as(&mut contract, &seller(), 1, ProtocolType::MultiUnit);
    let c = create_item_as(&mut contract, &seller(), 1, ProtocolType::MultiUnit);

    assert_eq!(contract.get_item(a).unwrap().token_id, 0);
    assert_eq!(contract.get_item(b).unwrap().token_id, 0);
    assert_eq!(contract.get_item(c).unwrap().token_id, 1);
}

#[test]
fn custody_mismatch_surfaces_as_internal_error() {
    let mut contract = new_contract();
    let item_id = create_item_as(&mut contract, &seller(), 100, ProtocolType::SingleUnit);
    near_sdk::testing_env!(context(seller()).build());
    contract.list_item(item_id).unwrap();

    // Move the token behind the engine's back.
    let token_id = contract.get_item(item_id).unwrap().token_id;
    contract
        .single_unit
        .transfer(token_id, &seller(), &stranger())
        .unwrap();

    near_sdk::testing_env!(context_with_deposit(bidder_a(), 100).build());
    assert!(matches!(
        contract.buy_item(item_id).unwrap_err(),
        MarketplaceError::InternalError(_)
    ));
}
