use near_sdk::NearToken;

pub use listing_engine::{BASIS_POINTS, MAX_COMMISSION_BPS, MAX_ROYALTY_BPS};

pub const DEFAULT_COMMISSION_BPS: u16 = 250; // 2.5%

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_MIGRATE_TGAS: u64 = 200;
