use crate::constants::GAS_MIGRATE_TGAS;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Redeploys this account with the wasm passed as raw call input, then runs `migrate`.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| MarketplaceError::InvalidInput("Missing contract code".into()))?;

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    /// Reloads the stored state under the new code and stamps the package version.
    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read()
            .unwrap_or_else(|| env::panic_str("No marketplace state to migrate"));
        let old_version = std::mem::replace(
            &mut contract.version,
            env!("CARGO_PKG_VERSION").to_string(),
        );
        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);
        contract
    }
}
