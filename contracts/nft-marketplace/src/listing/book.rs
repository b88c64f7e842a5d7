use listing_engine::{Listing, ListingStore};

use super::types::{ListingRecord, ListingView};
use crate::guards::hash_account_id;
use crate::*;

/// Listing table plus a per-seller index, persisted in contract state.
#[near(serializers = [borsh])]
pub struct ListingBook {
    records: IterableMap<u64, ListingRecord>,
    by_seller: LookupMap<AccountId, IterableSet<u64>>,
}

impl ListingBook {
    pub fn new() -> Self {
        Self {
            records: IterableMap::new(StorageKey::Listings),
            by_seller: LookupMap::new(StorageKey::ListingsBySeller),
        }
    }

    pub fn contains(&self, token_id: u64) -> bool {
        self.records.contains_key(&token_id)
    }

    pub fn record(&self, token_id: u64) -> Option<&ListingRecord> {
        self.records.get(&token_id)
    }

    pub fn len(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn seller_len(&self, seller_id: &AccountId) -> u64 {
        self.by_seller
            .get(seller_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub(crate) fn page(&self, start: usize, limit: usize) -> Vec<ListingView> {
        self.records
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, record)| to_view(*token_id, record))
            .collect()
    }

    pub(crate) fn page_by_seller(
        &self,
        seller_id: &AccountId,
        start: usize,
        limit: usize,
    ) -> Vec<ListingView> {
        let Some(token_ids) = self.by_seller.get(seller_id) else {
            return vec![];
        };
        token_ids
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| {
                self.records
                    .get(token_id)
                    .map(|record| to_view(*token_id, record))
            })
            .collect()
    }

    fn index_add(&mut self, seller_id: &AccountId, token_id: u64) {
        let mut token_ids = self.by_seller.remove(seller_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::ListingsBySellerInner {
                account_id_hash: hash_account_id(seller_id),
            })
        });
        token_ids.insert(token_id);
        self.by_seller.insert(seller_id.clone(), token_ids);
    }

    fn index_remove(&mut self, seller_id: &AccountId, token_id: u64) {
        if let Some(mut token_ids) = self.by_seller.remove(seller_id) {
            token_ids.remove(&token_id);
            if token_ids.is_empty() {
                token_ids.clear();
            } else {
                self.by_seller.insert(seller_id.clone(), token_ids);
            }
        }
    }
}

fn to_view(token_id: u64, record: &ListingRecord) -> ListingView {
    ListingView {
        token_id,
        seller: record.seller_id.clone(),
        price: record.price,
        active: true,
    }
}

impl ListingStore<AccountId> for ListingBook {
    fn listing(&self, token_id: u64) -> Option<Listing<AccountId>> {
        self.records.get(&token_id).map(|record| Listing {
            seller: record.seller_id.clone(),
            price: record.price.0,
        })
    }

    fn put_listing(&mut self, token_id: u64, listing: Listing<AccountId>) {
        let listed_at = self
            .records
            .get(&token_id)
            .map_or_else(env::block_timestamp, |existing| existing.listed_at);
        self.index_add(&listing.seller, token_id);
        self.records.insert(
            token_id,
            ListingRecord {
                seller_id: listing.seller,
                price: U128(listing.price),
                listed_at,
            },
        );
    }

    fn take_listing(&mut self, token_id: u64) -> Option<Listing<AccountId>> {
        let record = self.records.remove(&token_id)?;
        self.index_remove(&record.seller_id, token_id);
        Some(Listing {
            seller: record.seller_id,
            price: record.price.0,
        })
    }
}
