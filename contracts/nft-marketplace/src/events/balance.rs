use near_sdk::AccountId;

use super::BALANCE;
use super::builder::EventBuilder;

pub fn emit_balance_deposit(account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(BALANCE, "deposit", account_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_balance_withdraw(account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(BALANCE, "withdraw", account_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_excess_refunded(account_id: &AccountId, token_id: u64, amount: u128) {
    EventBuilder::new(BALANCE, "refund", account_id)
        .field("token_id", token_id)
        .field("amount", amount)
        .emit();
}
