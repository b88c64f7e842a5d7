use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- list ---

#[test]
fn list_happy() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    testing_env!(context_with_deposit(seller(), 1).build());

    contract.list(1, U128(1_000)).unwrap();

    let record = contract.listings.record(1).unwrap();
    assert_eq!(record.seller_id, seller());
    assert_eq!(record.price, U128(1_000));
    assert!(has_operation("list"));
}

#[test]
fn list_requires_one_yocto() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    testing_env!(context(seller()).build());

    let err = contract.list(1, U128(1_000)).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
    assert!(!contract.listings.contains(1));
}

#[test]
fn list_not_owner_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);

    let err = contract.list_token(&buyer(), 1, 1_000).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
    assert_eq!(err.code(), Some(105));
}

#[test]
fn list_unknown_token_is_unauthorized() {
    let mut contract = new_contract();

    let err = contract.list_token(&seller(), 42, 1_000).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn list_zero_price_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);

    let err = contract.list_token(&seller(), 1, 0).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidPrice(_)));
    assert_eq!(err.code(), Some(107));
    assert!(!contract.listings.contains(1));
}

#[test]
fn list_twice_fails_and_keeps_first_price() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();

    let err = contract.list_token(&seller(), 1, 2_000).unwrap_err();
    assert!(matches!(err, MarketplaceError::AlreadyListed(_)));
    assert_eq!(err.code(), Some(102));
    assert_eq!(contract.listings.record(1).unwrap().price, U128(1_000));
}

#[test]
fn ownership_is_checked_before_price() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);

    let err = contract.list_token(&buyer(), 1, 0).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

// --- delist ---

#[test]
fn delist_happy() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();
    testing_env!(context_with_deposit(seller(), 1).build());

    contract.delist(1).unwrap();

    assert!(!contract.listings.contains(1));
    assert_eq!(contract.get_supply_by_seller(seller()), 0);
    assert!(has_operation("delist"));
}

#[test]
fn delist_unlisted_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);

    let err = contract.delist_token(&seller(), 1).unwrap_err();
    assert!(matches!(err, MarketplaceError::NotListed(_)));
    assert_eq!(err.code(), Some(103));
}

#[test]
fn delist_by_stranger_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();

    let err = contract.delist_token(&buyer(), 1).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
    assert!(contract.listings.contains(1));
}

#[test]
fn delist_by_owner_requires_operator_setting() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();

    let err = contract.delist_token(&owner(), 1).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));

    contract.settings.operator_delist = true;
    contract.delist_token(&owner(), 1).unwrap();
    assert!(!contract.listings.contains(1));
}

#[test]
fn relist_after_delist() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();
    contract.delist_token(&seller(), 1).unwrap();

    contract.list_token(&seller(), 1, 3_000).unwrap();
    assert_eq!(contract.listings.record(1).unwrap().price, U128(3_000));
}

// --- update_price ---

#[test]
fn update_price_happy() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();
    let listed_at = contract.listings.record(1).unwrap().listed_at;

    let mut ctx = context_with_deposit(seller(), 1);
    ctx.block_timestamp(1_800_000_000_000_000_000);
    testing_env!(ctx.build());
    contract.update_price(1, U128(5_000)).unwrap();

    let record = contract.listings.record(1).unwrap();
    assert_eq!(record.price, U128(5_000));
    assert_eq!(record.seller_id, seller());
    assert_eq!(record.listed_at, listed_at);
    assert!(has_operation("update_price"));
}

#[test]
fn update_price_not_listed_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);

    let err = contract.update_listing_price(&seller(), 1, 5_000).unwrap_err();
    assert!(matches!(err, MarketplaceError::NotListed(_)));
}

#[test]
fn update_price_by_stranger_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();

    let err = contract.update_listing_price(&buyer(), 1, 5_000).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
    assert_eq!(contract.listings.record(1).unwrap().price, U128(1_000));
}

#[test]
fn update_price_operator_cannot_reprice() {
    let mut contract = new_contract();
    contract.settings.operator_delist = true;
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();

    let err = contract.update_listing_price(&owner(), 1, 5_000).unwrap_err();
    assert!(matches!(err, MarketplaceError::Unauthorized(_)));
}

#[test]
fn update_price_zero_fails() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000).unwrap();

    let err = contract.update_listing_price(&seller(), 1, 0).unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidPrice(_)));
    assert_eq!(contract.listings.record(1).unwrap().price, U128(1_000));
}
