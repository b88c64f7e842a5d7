//! Fixed-price listings: engine host, seller index, and views.

mod actions;
mod book;
mod types;
mod views;

pub use book::ListingBook;
pub use types::{FeeSplitView, ListingRecord, ListingView};
