use crate::tests::test_utils::*;
use crate::*;

// --- Helpers ---

fn contract_with_listings() -> Contract {
    let mut contract = new_contract();
    for token_id in 1..=3 {
        mint_plain(&mut contract, &seller(), token_id);
        contract
            .list_token(&seller(), token_id, token_id as u128 * 1_000)
            .unwrap();
    }
    mint_plain(&mut contract, &buyer(), 10);
    contract.list_token(&buyer(), 10, 10_000).unwrap();
    contract
}

// --- get_listing ---

#[test]
fn get_listing_active() {
    let contract = contract_with_listings();

    let view = contract.get_listing(2).unwrap();
    assert_eq!(view.token_id, 2);
    assert_eq!(view.seller, seller());
    assert_eq!(view.price, U128(2_000));
    assert!(view.active);
}

#[test]
fn get_listing_absent() {
    let contract = contract_with_listings();
    assert!(contract.get_listing(4).is_none());
}

// --- enumeration ---

#[test]
fn get_listings_paginates() {
    let contract = contract_with_listings();

    assert_eq!(contract.get_supply_listings(), 4);
    assert_eq!(contract.get_listings(None, None).len(), 4);
    let page = contract.get_listings(Some(1), Some(2));
    let ids: Vec<u64> = page.iter().map(|l| l.token_id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn get_listings_by_seller() {
    let mut contract = contract_with_listings();

    assert_eq!(contract.get_supply_by_seller(seller()), 3);
    assert_eq!(contract.get_supply_by_seller(buyer()), 1);
    assert_eq!(contract.get_supply_by_seller(creator()), 0);

    contract.delist_token(&seller(), 2).unwrap();
    let ids: Vec<u64> = contract
        .get_listings_by_seller(seller(), None, None)
        .iter()
        .map(|l| l.token_id)
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&2));
}

#[test]
fn purchase_removes_from_seller_index() {
    let mut contract = contract_with_listings();
    contract.purchase(&buyer(), 1, 1_000).unwrap();

    assert_eq!(contract.get_supply_by_seller(seller()), 2);
    assert_eq!(contract.get_supply_listings(), 3);
}

// --- get_fee_split ---

#[test]
fn fee_split_preview_matches_sale() {
    let mut contract = new_contract();
    mint_with_royalty(&mut contract, &seller(), 1, &creator(), 500);
    contract.list_token(&seller(), 1, 1_000_000).unwrap();

    let preview = contract.get_fee_split(1).unwrap();
    assert_eq!(preview.price, U128(1_000_000));
    assert_eq!(preview.commission, U128(25_000));
    assert_eq!(preview.royalty, U128(50_000));
    assert_eq!(preview.seller_proceeds, U128(925_000));
}

#[test]
fn fee_split_unlisted_is_none() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    assert!(contract.get_fee_split(1).is_none());
}

#[test]
fn get_listings_far_past_end_is_empty() {
    let contract = contract_with_listings();
    assert!(contract.get_listings(Some(u64::MAX), None).is_empty());
    assert!(
        contract
            .get_listings_by_seller(seller(), Some(u64::MAX), Some(10))
            .is_empty()
    );
}
