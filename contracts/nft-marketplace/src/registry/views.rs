use super::types::TokenView;
use crate::guards::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn nft_token(&self, token_id: u64) -> Option<TokenView> {
        self.registry.token(token_id).map(|token| TokenView {
            token_id,
            owner_id: token.owner_id.clone(),
            royalty: token.royalty.clone(),
            minted_at: token.minted_at,
            listed: self.listings.contains(token_id),
        })
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let (start, limit) = page_bounds(from_index, limit);
        self.registry
            .owner_token_ids(&account_id, start, limit)
            .into_iter()
            .filter_map(|token_id| self.nft_token(token_id))
            .collect()
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> u64 {
        self.registry.owner_supply(&account_id)
    }
}
