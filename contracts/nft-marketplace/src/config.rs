use crate::*;
use listing_engine::{DelistPolicy, MarketConfig};

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct MarketSettings {
    pub commission_bps: u16,
    /// When set, the contract owner may delist any listing.
    pub operator_delist: bool,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            commission_bps: DEFAULT_COMMISSION_BPS,
            operator_delist: false,
        }
    }
}

impl MarketSettings {
    pub fn validate_patch(&self, patch: &MarketSettingsUpdate) -> Result<(), MarketplaceError> {
        if patch.commission_bps.is_none() && patch.operator_delist.is_none() {
            return Err(MarketplaceError::InvalidInput("Empty settings update".into()));
        }
        if let Some(bps) = patch.commission_bps {
            if bps > MAX_COMMISSION_BPS {
                return Err(MarketplaceError::InvalidInput(format!(
                    "commission_bps must be <= {MAX_COMMISSION_BPS}"
                )));
            }
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &MarketSettingsUpdate) {
        if let Some(v) = patch.commission_bps {
            self.commission_bps = v;
        }
        if let Some(v) = patch.operator_delist {
            self.operator_delist = v;
        }
    }

    pub(crate) fn market_config(
        &self,
        fee_recipient: &AccountId,
        operator: &AccountId,
    ) -> Result<MarketConfig<AccountId>, MarketplaceError> {
        let config = MarketConfig::new(fee_recipient.clone(), self.commission_bps)?;
        if self.operator_delist {
            return Ok(config.with_delist_policy(DelistPolicy::SellerOrOperator(operator.clone())));
        }
        Ok(config)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct MarketSettingsUpdate {
    pub commission_bps: Option<u16>,
    pub operator_delist: Option<bool>,
}

impl Contract {
    pub(crate) fn market_config(&self) -> Result<MarketConfig<AccountId>, MarketplaceError> {
        self.settings
            .market_config(&self.fee_recipient, &self.owner_id)
    }
}
