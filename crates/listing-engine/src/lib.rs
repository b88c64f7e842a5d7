//! Fixed-price NFT listing engine: list, delist, buy, update price.
//! No NEAR SDK dependency: the host supplies storage, ownership, and value transfer.

mod engine;
mod error;
mod fees;
mod traits;
mod types;

pub use engine::{ListingEngine, listing_view, quote};
pub use error::{ConfigError, LedgerError, ListingError};
pub use fees::{
    BASIS_POINTS, BasisPoints, FeeSplit, MAX_COMMISSION_BPS, MAX_ROYALTY_BPS, MarketConfig,
    RoyaltyTerms,
};
pub use traits::{ListingStore, OwnershipRegistry, ValueTransfer};
pub use types::{DelistPolicy, Listing, ListingView, SaleReceipt};

/// Asset identifier as issued by the ownership registry.
pub type TokenId = u64;
