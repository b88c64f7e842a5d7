mod builder;
mod types;

mod balance;
mod contract;
mod listing;
mod token;

pub use balance::*;
pub use contract::*;
pub use listing::*;
pub use token::*;

pub(crate) const STANDARD: &str = "nft-marketplace";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const BALANCE: &str = "BALANCE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
