//! Seams to the host ledger: listing storage, ownership registry, value transfer.

use std::collections::BTreeMap;

use crate::TokenId;
use crate::error::LedgerError;
use crate::fees::RoyaltyTerms;
use crate::types::Listing;

/// Keyed listing table owned by the host and lent to the engine per call.
pub trait ListingStore<P> {
    fn listing(&self, token_id: TokenId) -> Option<Listing<P>>;
    fn put_listing(&mut self, token_id: TokenId, listing: Listing<P>);
    fn take_listing(&mut self, token_id: TokenId) -> Option<Listing<P>>;
}

/// System of record for token ownership and per-token royalty terms.
pub trait OwnershipRegistry<P> {
    fn owner_of(&self, token_id: TokenId) -> Option<P>;
    fn royalty_of(&self, token_id: TokenId) -> Option<RoyaltyTerms<P>>;
    fn transfer(&mut self, token_id: TokenId, from: &P, to: &P) -> Result<(), LedgerError>;
}

/// Moves `amount` from one principal to another. All-or-nothing per call.
pub trait ValueTransfer<P> {
    fn transfer(&mut self, amount: u128, from: &P, to: &P) -> Result<(), LedgerError>;
}

impl<P: Clone> ListingStore<P> for BTreeMap<TokenId, Listing<P>> {
    fn listing(&self, token_id: TokenId) -> Option<Listing<P>> {
        self.get(&token_id).cloned()
    }

    fn put_listing(&mut self, token_id: TokenId, listing: Listing<P>) {
        self.insert(token_id, listing);
    }

    fn take_listing(&mut self, token_id: TokenId) -> Option<Listing<P>> {
        self.remove(&token_id)
    }
}

impl<P, S: ListingStore<P> + ?Sized> ListingStore<P> for &mut S {
    fn listing(&self, token_id: TokenId) -> Option<Listing<P>> {
        (**self).listing(token_id)
    }

    fn put_listing(&mut self, token_id: TokenId, listing: Listing<P>) {
        (**self).put_listing(token_id, listing)
    }

    fn take_listing(&mut self, token_id: TokenId) -> Option<Listing<P>> {
        (**self).take_listing(token_id)
    }
}
