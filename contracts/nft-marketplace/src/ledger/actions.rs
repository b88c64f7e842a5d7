use listing_engine::LedgerError;

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Credits the attached deposit to the caller's balance. Returns the new balance.
    #[payable]
    #[handle_result]
    pub fn deposit(&mut self) -> Result<U128, MarketplaceError> {
        let amount = env::attached_deposit().as_yoctonear();
        self.deposit_balance(&env::predecessor_account_id(), amount)
            .map(U128)
    }

    /// Withdraws `amount`, or the whole balance when omitted.
    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self, amount: Option<U128>) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();
        let amount = self.withdraw_balance(&account_id, amount.map(|a| a.0))?;
        Ok(Promise::new(account_id).transfer(NearToken::from_yoctonear(amount)))
    }

    pub fn get_balance(&self, account_id: AccountId) -> U128 {
        U128(self.ledger.balance_of(&account_id))
    }
}

impl Contract {
    pub(crate) fn deposit_balance(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        if amount == 0 {
            return Err(MarketplaceError::InsufficientDeposit(
                "Attach a non-zero deposit".into(),
            ));
        }
        let balance = self.ledger.credit(account_id, amount);
        events::emit_balance_deposit(account_id, amount, balance);
        Ok(balance)
    }

    /// Debits the ledger and returns the amount the caller should be paid.
    pub(crate) fn withdraw_balance(
        &mut self,
        account_id: &AccountId,
        amount: Option<u128>,
    ) -> Result<u128, MarketplaceError> {
        let amount = amount.unwrap_or_else(|| self.ledger.balance_of(account_id));
        if amount == 0 {
            return Err(MarketplaceError::InsufficientFunds(
                "Nothing to withdraw".into(),
            ));
        }
        let balance = self.ledger.debit(account_id, amount).map_err(|e| match e {
            LedgerError::InsufficientBalance { .. } => {
                MarketplaceError::InsufficientFunds(e.to_string())
            }
            other => MarketplaceError::InternalError(other.to_string()),
        })?;
        events::emit_balance_withdraw(account_id, amount, balance);
        Ok(amount)
    }
}
