use near_sdk::{AccountId, near};

/// Creator royalty fixed at mint; paid on every sale through this market.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Royalty {
    pub recipient: AccountId,
    pub basis_points: u16,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Token {
    pub owner_id: AccountId,
    pub royalty: Option<Royalty>,
    pub minted_at: u64,
}

#[near(serializers = [json])]
pub struct TokenView {
    pub token_id: u64,
    pub owner_id: AccountId,
    pub royalty: Option<Royalty>,
    pub minted_at: u64,
    pub listed: bool,
}
