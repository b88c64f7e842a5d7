//! Listing state machine: `Unlisted --list--> Listed --{delist|buy}--> Unlisted`.

use crate::TokenId;
use crate::error::ListingError;
use crate::fees::{BasisPoints, FeeSplit, MarketConfig};
use crate::traits::{ListingStore, OwnershipRegistry, ValueTransfer};
use crate::types::{Listing, ListingView, SaleReceipt};

pub struct ListingEngine<P, S> {
    store: S,
    config: MarketConfig<P>,
}

impl<P, S> ListingEngine<P, S>
where
    P: Clone + PartialEq,
    S: ListingStore<P>,
{
    pub fn new(store: S, config: MarketConfig<P>) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MarketConfig<P> {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn list<R>(
        &mut self,
        registry: &R,
        caller: &P,
        token_id: TokenId,
        price: u128,
    ) -> Result<(), ListingError>
    where
        R: OwnershipRegistry<P> + ?Sized,
    {
        if registry.owner_of(token_id).as_ref() != Some(caller) {
            return Err(ListingError::Unauthorized);
        }
        if price == 0 {
            return Err(ListingError::InvalidPrice);
        }
        if self.store.listing(token_id).is_some() {
            return Err(ListingError::AlreadyListed);
        }

        self.store.put_listing(
            token_id,
            Listing {
                seller: caller.clone(),
                price,
            },
        );
        Ok(())
    }

    /// Returns the removed listing.
    pub fn delist(&mut self, caller: &P, token_id: TokenId) -> Result<Listing<P>, ListingError> {
        let listing = self
            .store
            .listing(token_id)
            .ok_or(ListingError::NotListed)?;
        if !self.config.delist_policy.permits(caller, &listing.seller) {
            return Err(ListingError::Unauthorized);
        }
        self.store
            .take_listing(token_id)
            .ok_or(ListingError::NotListed)
    }

    /// Returns the previous price.
    pub fn update_price(
        &mut self,
        caller: &P,
        token_id: TokenId,
        new_price: u128,
    ) -> Result<u128, ListingError> {
        let mut listing = self
            .store
            .listing(token_id)
            .ok_or(ListingError::NotListed)?;
        if caller != &listing.seller {
            return Err(ListingError::Unauthorized);
        }
        if new_price == 0 {
            return Err(ListingError::InvalidPrice);
        }

        let old_price = listing.price;
        listing.price = new_price;
        self.store.put_listing(token_id, listing);
        Ok(old_price)
    }

    /// Pays commission, royalty and seller from `caller`, then hands the token over.
    /// On any failure every applied transfer is reversed and the listing stays as it was.
    /// The seller cannot buy their own listing (`Unauthorized`).
    ///
    /// # Panics
    /// If `funds` refuses to reverse a transfer it accepted earlier in the same call.
    pub fn buy<R, V>(
        &mut self,
        registry: &mut R,
        funds: &mut V,
        caller: &P,
        token_id: TokenId,
        tendered: u128,
    ) -> Result<SaleReceipt<P>, ListingError>
    where
        R: OwnershipRegistry<P> + ?Sized,
        V: ValueTransfer<P> + ?Sized,
    {
        let listing = self
            .store
            .listing(token_id)
            .ok_or(ListingError::NotListed)?;
        if caller == &listing.seller {
            return Err(ListingError::Unauthorized);
        }
        if tendered < listing.price {
            return Err(ListingError::InsufficientFunds);
        }

        let royalty = registry.royalty_of(token_id);
        let royalty_bps = royalty
            .as_ref()
            .map_or(BasisPoints::ZERO, |terms| terms.basis_points);
        let split = FeeSplit::compute(listing.price, self.config.commission, royalty_bps);

        let mut payments: Vec<(&P, u128)> = Vec::with_capacity(3);
        payments.push((&self.config.fee_account, split.commission));
        if let Some(terms) = royalty.as_ref() {
            payments.push((&terms.recipient, split.royalty));
        }
        payments.push((&listing.seller, split.seller_proceeds));

        let mut applied: Vec<(&P, u128)> = Vec::with_capacity(payments.len());
        for (recipient, amount) in payments {
            if amount == 0 {
                continue;
            }
            if funds.transfer(amount, caller, recipient).is_err() {
                reverse_transfers(funds, caller, &applied);
                return Err(ListingError::InsufficientFunds);
            }
            applied.push((recipient, amount));
        }

        if registry
            .transfer(token_id, &listing.seller, caller)
            .is_err()
        {
            reverse_transfers(funds, caller, &applied);
            return Err(ListingError::Unauthorized);
        }

        self.store.take_listing(token_id);

        Ok(SaleReceipt {
            token_id,
            seller: listing.seller,
            buyer: caller.clone(),
            price: listing.price,
            split,
            fee_account: self.config.fee_account.clone(),
            royalty_recipient: royalty.map(|terms| terms.recipient),
        })
    }

    pub fn get_listing(&self, token_id: TokenId) -> Option<ListingView<P>> {
        listing_view(&self.store, token_id)
    }

    pub fn quote<R>(&self, registry: &R, token_id: TokenId) -> Option<FeeSplit>
    where
        R: OwnershipRegistry<P> + ?Sized,
    {
        quote(&self.store, registry, &self.config, token_id)
    }
}

/// Read path usable without lending the store mutably.
pub fn listing_view<P, S>(store: &S, token_id: TokenId) -> Option<ListingView<P>>
where
    P: Clone,
    S: ListingStore<P> + ?Sized,
{
    store
        .listing(token_id)
        .map(|listing| ListingView::from(&listing))
}

/// Split a purchase of `token_id` would produce under `config` right now.
pub fn quote<P, S, R>(
    store: &S,
    registry: &R,
    config: &MarketConfig<P>,
    token_id: TokenId,
) -> Option<FeeSplit>
where
    S: ListingStore<P> + ?Sized,
    R: OwnershipRegistry<P> + ?Sized,
{
    let listing = store.listing(token_id)?;
    let royalty_bps = registry
        .royalty_of(token_id)
        .map_or(BasisPoints::ZERO, |terms| terms.basis_points);
    Some(FeeSplit::compute(
        listing.price,
        config.commission,
        royalty_bps,
    ))
}

/// # Panics
/// When a compensating transfer is refused. Funds would otherwise be left with a
/// recipient of a sale that never happened, so the host transaction must abort.
fn reverse_transfers<P, V>(funds: &mut V, payer: &P, applied: &[(&P, u128)])
where
    V: ValueTransfer<P> + ?Sized,
{
    for (recipient, amount) in applied.iter().rev() {
        if let Err(err) = funds.transfer(*amount, *recipient, payer) {
            panic!("purchase rollback failed returning {amount}: {err}");
        }
    }
}
