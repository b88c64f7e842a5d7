use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- deposit ---

#[test]
fn deposit_credits_caller() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), 5_000).build());

    assert_eq!(contract.deposit().unwrap(), U128(5_000));
    assert_eq!(contract.deposit().unwrap(), U128(10_000));
    assert_eq!(contract.get_balance(buyer()), U128(10_000));
    assert!(has_operation("deposit"));
}

#[test]
fn deposit_zero_fails() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());

    let err = contract.deposit().unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
}

// --- withdraw ---

#[test]
fn withdraw_partial() {
    let mut contract = new_contract();
    contract.deposit_balance(&seller(), 10_000).unwrap();
    testing_env!(context_with_deposit(seller(), 1).build());

    contract.withdraw(Some(U128(4_000))).unwrap();

    assert_eq!(contract.get_balance(seller()), U128(6_000));
    assert!(has_operation("withdraw"));
}

#[test]
fn withdraw_all_by_default() {
    let mut contract = new_contract();
    contract.deposit_balance(&seller(), 10_000).unwrap();

    let paid = contract.withdraw_balance(&seller(), None).unwrap();

    assert_eq!(paid, 10_000);
    assert_eq!(contract.get_balance(seller()), U128(0));
}

#[test]
fn withdraw_more_than_balance_fails() {
    let mut contract = new_contract();
    contract.deposit_balance(&seller(), 10_000).unwrap();

    let err = contract.withdraw_balance(&seller(), Some(10_001)).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientFunds(_)));
    assert_eq!(contract.get_balance(seller()), U128(10_000));
}

#[test]
fn withdraw_empty_balance_fails() {
    let mut contract = new_contract();

    let err = contract.withdraw_balance(&seller(), None).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientFunds(_)));
}

#[test]
fn withdraw_requires_one_yocto() {
    let mut contract = new_contract();
    contract.deposit_balance(&seller(), 10_000).unwrap();
    testing_env!(context(seller()).build());

    assert!(contract.withdraw(None).is_err());
    assert_eq!(contract.get_balance(seller()), U128(10_000));
}

#[test]
fn sale_proceeds_are_withdrawable() {
    let mut contract = new_contract();
    mint_plain(&mut contract, &seller(), 1);
    contract.list_token(&seller(), 1, 1_000_000).unwrap();
    contract.purchase(&buyer(), 1, 1_000_000).unwrap();

    let paid = contract.withdraw_balance(&seller(), None).unwrap();
    assert_eq!(paid, 975_000);
}

// --- BalanceLedger ---

#[test]
fn ledger_debit_underflow_is_rejected() {
    testing_env!(context(owner()).build());
    let mut ledger = BalanceLedger::new();
    ledger.credit(&buyer(), 10);

    assert!(ledger.debit(&buyer(), 11).is_err());
    assert_eq!(ledger.debit(&buyer(), 10).unwrap(), 0);
    assert_eq!(ledger.balance_of(&buyer()), 0);
}

#[test]
fn ledger_transfer_is_all_or_nothing() {
    use listing_engine::ValueTransfer;

    testing_env!(context(owner()).build());
    let mut ledger = BalanceLedger::new();
    ledger.credit(&buyer(), 100);

    assert!(ledger.transfer(101, &buyer(), &seller()).is_err());
    assert_eq!(ledger.balance_of(&buyer()), 100);
    assert_eq!(ledger.balance_of(&seller()), 0);

    ledger.transfer(40, &buyer(), &seller()).unwrap();
    assert_eq!(ledger.balance_of(&buyer()), 60);
    assert_eq!(ledger.balance_of(&seller()), 40);
}
