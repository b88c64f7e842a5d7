use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct ListingRecord {
    pub seller_id: AccountId,
    /// yoctoNEAR.
    pub price: U128,
    /// Block timestamp (ns) of the original listing; kept across price updates.
    pub listed_at: u64,
}

#[near(serializers = [json])]
pub struct ListingView {
    pub token_id: u64,
    pub seller: AccountId,
    pub price: U128,
    pub active: bool,
}

/// Preview of how a purchase at the current price would be divided.
#[near(serializers = [json])]
pub struct FeeSplitView {
    pub price: U128,
    pub commission: U128,
    pub royalty: U128,
    pub seller_proceeds: U128,
}
