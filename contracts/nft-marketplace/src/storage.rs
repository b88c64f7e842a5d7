use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    ListingsBySeller,
    ListingsBySellerInner { account_id_hash: Vec<u8> },
    Tokens,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
    Balances,
}
