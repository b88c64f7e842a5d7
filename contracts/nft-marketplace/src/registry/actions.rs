use listing_engine::{OwnershipRegistry, RoyaltyTerms};

use super::types::{Royalty, Token};
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Mints `token_id` to the caller. Royalty terms cannot be changed later.
    #[payable]
    #[handle_result]
    pub fn mint(&mut self, token_id: u64, royalty: Option<Royalty>) -> Result<bool, MarketplaceError> {
        check_one_yocto()?;
        self.mint_token(&env::predecessor_account_id(), token_id, royalty)?;
        Ok(true)
    }

    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: u64,
    ) -> Result<bool, MarketplaceError> {
        check_one_yocto()?;
        self.transfer_token(&env::predecessor_account_id(), &receiver_id, token_id)?;
        Ok(true)
    }
}

impl Contract {
    pub(crate) fn mint_token(
        &mut self,
        owner_id: &AccountId,
        token_id: u64,
        royalty: Option<Royalty>,
    ) -> Result<(), MarketplaceError> {
        if self.registry.contains(token_id) {
            return Err(MarketplaceError::InvalidInput(format!(
                "Token {} already exists",
                token_id
            )));
        }
        if let Some(r) = &royalty {
            RoyaltyTerms::new(r.recipient.clone(), r.basis_points)?;
        }

        let (royalty_recipient, royalty_bps) = royalty
            .as_ref()
            .map_or((None, 0), |r| (Some(r.recipient.clone()), r.basis_points));
        self.registry.insert(
            token_id,
            Token {
                owner_id: owner_id.clone(),
                royalty,
                minted_at: env::block_timestamp(),
            },
        );
        events::emit_token_minted(owner_id, token_id, royalty_recipient.as_ref(), royalty_bps);
        Ok(())
    }

    pub(crate) fn transfer_token(
        &mut self,
        actor_id: &AccountId,
        receiver_id: &AccountId,
        token_id: u64,
    ) -> Result<(), MarketplaceError> {
        let owner_id = self
            .registry
            .owner_of(token_id)
            .ok_or_else(MarketplaceError::token_not_found)?;
        if actor_id != &owner_id {
            return Err(MarketplaceError::only_owner("token owner"));
        }
        if receiver_id == &owner_id {
            return Err(MarketplaceError::InvalidInput(
                "Cannot transfer to self".into(),
            ));
        }
        if self.listings.contains(token_id) {
            return Err(MarketplaceError::AlreadyListed(
                "Delist the token before transferring it".into(),
            ));
        }

        self.registry
            .transfer(token_id, &owner_id, receiver_id)
            .map_err(|e| MarketplaceError::InternalError(e.to_string()))?;
        events::emit_token_transferred(&owner_id, receiver_id, token_id);
        Ok(())
    }
}
