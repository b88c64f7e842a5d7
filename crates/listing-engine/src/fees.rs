//! Basis-point arithmetic, market configuration and royalty terms.

use primitive_types::U256;

use crate::error::ConfigError;
use crate::types::DelistPolicy;

/// 10,000 bps = 100%.
pub const BASIS_POINTS: u16 = 10_000;

/// Commission and royalty caps each take half the range, so any pair sums to at most 100%.
pub const MAX_COMMISSION_BPS: u16 = 5_000;
pub const MAX_ROYALTY_BPS: u16 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BasisPoints(u16);

impl BasisPoints {
    pub const ZERO: Self = Self(0);

    pub fn new(bps: u16) -> Result<Self, ConfigError> {
        if bps > BASIS_POINTS {
            return Err(ConfigError::BasisPointsOutOfRange(bps as u32));
        }
        Ok(Self(bps))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// `floor(amount * bps / 10_000)`, widened so no `u128` amount overflows.
    pub fn apply(self, amount: u128) -> u128 {
        let scaled = U256::from(amount) * U256::from(self.0) / U256::from(BASIS_POINTS);
        // Never exceeds `amount`, so it fits.
        scaled.as_u128()
    }
}

/// How a sale price is divided. Parts always sum to the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub commission: u128,
    pub royalty: u128,
    pub seller_proceeds: u128,
}

impl FeeSplit {
    /// Truncating division; the remainder stays with the seller.
    pub fn compute(price: u128, commission: BasisPoints, royalty: BasisPoints) -> Self {
        let commission = commission.apply(price);
        let royalty = royalty.apply(price);
        Self {
            commission,
            royalty,
            seller_proceeds: price - commission - royalty,
        }
    }

    pub fn total(&self) -> u128 {
        self.commission + self.royalty + self.seller_proceeds
    }
}

/// Royalty owed to `recipient` on every resale; fixed when the asset is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoyaltyTerms<P> {
    pub recipient: P,
    pub basis_points: BasisPoints,
}

impl<P> RoyaltyTerms<P> {
    pub fn new(recipient: P, bps: u16) -> Result<Self, ConfigError> {
        if bps > MAX_ROYALTY_BPS {
            return Err(ConfigError::RoyaltyTooHigh {
                bps,
                max: MAX_ROYALTY_BPS,
            });
        }
        Ok(Self {
            recipient,
            basis_points: BasisPoints::new(bps)?,
        })
    }
}

/// Per-market settings consulted by every engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig<P> {
    pub fee_account: P,
    pub commission: BasisPoints,
    pub delist_policy: DelistPolicy<P>,
}

impl<P> MarketConfig<P> {
    pub fn new(fee_account: P, commission_bps: u16) -> Result<Self, ConfigError> {
        validate_commission(commission_bps)?;
        Ok(Self {
            fee_account,
            commission: BasisPoints::new(commission_bps)?,
            delist_policy: DelistPolicy::SellerOnly,
        })
    }

    pub fn with_delist_policy(mut self, policy: DelistPolicy<P>) -> Self {
        self.delist_policy = policy;
        self
    }
}

pub(crate) fn validate_commission(bps: u16) -> Result<(), ConfigError> {
    if bps > MAX_COMMISSION_BPS {
        return Err(ConfigError::CommissionTooHigh {
            bps,
            max: MAX_COMMISSION_BPS,
        });
    }
    Ok(())
}
