//! Native token registry: ownership, per-owner index, and creator royalties.

mod actions;
mod store;
mod types;
mod views;

pub use store::TokenRegistry;
pub use types::{Royalty, Token, TokenView};
