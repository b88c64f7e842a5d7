use listing_engine::{LedgerError, ValueTransfer};

use crate::*;

#[near(serializers = [borsh])]
pub struct BalanceLedger {
    balances: LookupMap<AccountId, u128>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self {
            balances: LookupMap::new(StorageKey::Balances),
        }
    }

    pub fn balance_of(&self, account_id: &AccountId) -> u128 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }

    /// Returns the new balance.
    pub(crate) fn credit(&mut self, account_id: &AccountId, amount: u128) -> u128 {
        let balance = self.balance_of(account_id) + amount;
        if balance > 0 {
            self.balances.insert(account_id.clone(), balance);
        }
        balance
    }

    /// Returns the new balance. Zeroed entries are dropped from storage.
    pub(crate) fn debit(&mut self, account_id: &AccountId, amount: u128) -> Result<u128, LedgerError> {
        let available = self.balance_of(account_id);
        let balance = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                available,
                required: amount,
            })?;
        if balance == 0 {
            self.balances.remove(account_id);
        } else {
            self.balances.insert(account_id.clone(), balance);
        }
        Ok(balance)
    }
}

impl ValueTransfer<AccountId> for BalanceLedger {
    fn transfer(&mut self, amount: u128, from: &AccountId, to: &AccountId) -> Result<(), LedgerError> {
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }
}
