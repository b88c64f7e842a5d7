use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        fee_recipient: Option<AccountId>,
        commission_bps: Option<u16>,
    ) -> Self {
        let commission_bps = commission_bps.unwrap_or(DEFAULT_COMMISSION_BPS);
        near_sdk::require!(
            commission_bps <= MAX_COMMISSION_BPS,
            format!("commission_bps must be <= {}", MAX_COMMISSION_BPS)
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fee_recipient: fee_recipient.unwrap_or_else(|| owner_id.clone()),
            owner_id,
            settings: MarketSettings {
                commission_bps,
                ..MarketSettings::default()
            },
            listings: ListingBook::new(),
            registry: TokenRegistry::new(),
            ledger: BalanceLedger::new(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_fee_recipient(&mut self, fee_recipient: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_recipient = self.fee_recipient.clone();
        self.fee_recipient = fee_recipient;
        events::emit_fee_recipient_changed(&self.owner_id, &old_recipient, &self.fee_recipient);
        Ok(())
    }

    /// Commission changes apply to sales made after this call; existing listings keep their price.
    #[payable]
    #[handle_result]
    pub fn update_market_config(
        &mut self,
        update: MarketSettingsUpdate,
    ) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.settings.validate_patch(&update)?;
        self.settings.apply_patch(&update);
        events::emit_market_config_updated(
            &self.owner_id,
            self.settings.commission_bps,
            self.settings.operator_delist,
        );
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_fee_recipient(&self) -> &AccountId {
        &self.fee_recipient
    }

    pub fn get_market_config(&self) -> MarketSettings {
        self.settings.clone()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
