use listing_engine::{LedgerError, OwnershipRegistry, RoyaltyTerms};

use super::types::Token;
use crate::guards::hash_account_id;
use crate::*;

#[near(serializers = [borsh])]
pub struct TokenRegistry {
    tokens: IterableMap<u64, Token>,
    tokens_per_owner: LookupMap<AccountId, IterableSet<u64>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self {
            tokens: IterableMap::new(StorageKey::Tokens),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
        }
    }

    pub fn token(&self, token_id: u64) -> Option<&Token> {
        self.tokens.get(&token_id)
    }

    pub fn contains(&self, token_id: u64) -> bool {
        self.tokens.contains_key(&token_id)
    }

    pub fn owner_supply(&self, owner_id: &AccountId) -> u64 {
        self.tokens_per_owner
            .get(owner_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub(crate) fn owner_token_ids(
        &self,
        owner_id: &AccountId,
        start: usize,
        limit: usize,
    ) -> Vec<u64> {
        self.tokens_per_owner
            .get(owner_id)
            .map(|set| set.iter().skip(start).take(limit).copied().collect())
            .unwrap_or_default()
    }

    pub(crate) fn insert(&mut self, token_id: u64, token: Token) {
        self.add_to_owner(&token.owner_id, token_id);
        self.tokens.insert(token_id, token);
    }

    fn add_to_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        let mut token_ids = self.tokens_per_owner.remove(owner_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::TokensPerOwnerInner {
                account_id_hash: hash_account_id(owner_id),
            })
        });
        token_ids.insert(token_id);
        self.tokens_per_owner.insert(owner_id.clone(), token_ids);
    }

    fn remove_from_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if let Some(mut token_ids) = self.tokens_per_owner.remove(owner_id) {
            token_ids.remove(&token_id);
            if token_ids.is_empty() {
                token_ids.clear();
            } else {
                self.tokens_per_owner.insert(owner_id.clone(), token_ids);
            }
        }
    }
}

impl OwnershipRegistry<AccountId> for TokenRegistry {
    fn owner_of(&self, token_id: u64) -> Option<AccountId> {
        self.tokens.get(&token_id).map(|token| token.owner_id.clone())
    }

    fn royalty_of(&self, token_id: u64) -> Option<RoyaltyTerms<AccountId>> {
        let royalty = self.tokens.get(&token_id)?.royalty.as_ref()?;
        RoyaltyTerms::new(royalty.recipient.clone(), royalty.basis_points).ok()
    }

    fn transfer(
        &mut self,
        token_id: u64,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), LedgerError> {
        let mut token = self
            .tokens
            .get(&token_id)
            .cloned()
            .ok_or(LedgerError::NotOwner)?;
        if &token.owner_id != from {
            return Err(LedgerError::NotOwner);
        }
        self.remove_from_owner(from, token_id);
        self.add_to_owner(to, token_id);
        token.owner_id = to.clone();
        self.tokens.insert(token_id, token);
        Ok(())
    }
}
