use listing_engine::{listing_view, quote};

use super::types::{FeeSplitView, ListingView};
use crate::guards::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, token_id: u64) -> Option<ListingView> {
        listing_view(&self.listings, token_id).map(|view| ListingView {
            token_id,
            seller: view.seller,
            price: U128(view.price),
            active: view.active,
        })
    }

    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<ListingView> {
        let (start, limit) = page_bounds(from_index, limit);
        self.listings.page(start, limit)
    }

    pub fn get_listings_by_seller(
        &self,
        seller_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<ListingView> {
        let (start, limit) = page_bounds(from_index, limit);
        self.listings.page_by_seller(&seller_id, start, limit)
    }

    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len()
    }

    pub fn get_supply_by_seller(&self, seller_id: AccountId) -> u64 {
        self.listings.seller_len(&seller_id)
    }

    /// `None` when the token is not listed.
    pub fn get_fee_split(&self, token_id: u64) -> Option<FeeSplitView> {
        let config = self.market_config().ok()?;
        let price = self.listings.record(token_id)?.price;
        let split = quote(&self.listings, &self.registry, &config, token_id)?;
        Some(FeeSplitView {
            price,
            commission: U128(split.commission),
            royalty: U128(split.royalty),
            seller_proceeds: U128(split.seller_proceeds),
        })
    }
}
