//! NFT marketplace: fixed-price listings over a native token registry and an internal balance ledger.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod config;
mod events;
mod ledger;
mod listing;
mod registry;
mod storage;

mod admin;
mod upgrade;

#[cfg(test)]
mod tests;

pub use config::{MarketSettings, MarketSettingsUpdate};
pub use constants::*;
pub use errors::MarketplaceError;
pub use ledger::BalanceLedger;
pub use listing::{FeeSplitView, ListingBook, ListingRecord, ListingView};
pub use registry::{Royalty, Token, TokenRegistry, TokenView};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub fee_recipient: AccountId,
    pub settings: MarketSettings,

    pub(crate) listings: ListingBook,
    pub(crate) registry: TokenRegistry,
    pub(crate) ledger: BalanceLedger,
}
