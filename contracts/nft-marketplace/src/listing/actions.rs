use listing_engine::{ListingEngine, SaleReceipt};

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn list(&mut self, token_id: u64, price: U128) -> Result<bool, MarketplaceError> {
        check_one_yocto()?;
        self.list_token(&env::predecessor_account_id(), token_id, price.0)?;
        Ok(true)
    }

    #[payable]
    #[handle_result]
    pub fn delist(&mut self, token_id: u64) -> Result<bool, MarketplaceError> {
        check_one_yocto()?;
        self.delist_token(&env::predecessor_account_id(), token_id)?;
        Ok(true)
    }

    #[payable]
    #[handle_result]
    pub fn update_price(&mut self, token_id: u64, new_price: U128) -> Result<bool, MarketplaceError> {
        check_one_yocto()?;
        self.update_listing_price(&env::predecessor_account_id(), token_id, new_price.0)?;
        Ok(true)
    }

    /// Attached deposit is the tendered amount; anything above the price is refunded.
    #[payable]
    #[handle_result]
    pub fn buy(&mut self, token_id: u64) -> Result<bool, MarketplaceError> {
        let deposit = env::attached_deposit().as_yoctonear();
        self.purchase(&env::predecessor_account_id(), token_id, deposit)?;
        Ok(true)
    }
}

impl Contract {
    pub(crate) fn list_token(
        &mut self,
        seller_id: &AccountId,
        token_id: u64,
        price: u128,
    ) -> Result<(), MarketplaceError> {
        let config = self.market_config()?;
        ListingEngine::new(&mut self.listings, config).list(
            &self.registry,
            seller_id,
            token_id,
            price,
        )?;
        events::emit_listed(seller_id, token_id, price);
        Ok(())
    }

    pub(crate) fn delist_token(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
    ) -> Result<(), MarketplaceError> {
        let config = self.market_config()?;
        let removed = ListingEngine::new(&mut self.listings, config).delist(actor_id, token_id)?;
        events::emit_delisted(actor_id, &removed.seller, token_id);
        Ok(())
    }

    pub(crate) fn update_listing_price(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        new_price: u128,
    ) -> Result<(), MarketplaceError> {
        let config = self.market_config()?;
        let old_price =
            ListingEngine::new(&mut self.listings, config).update_price(actor_id, token_id, new_price)?;
        events::emit_price_updated(actor_id, token_id, old_price, new_price);
        Ok(())
    }

    /// Credits `deposit` to the buyer, lets the engine draw the price from it,
    /// then refunds whatever was not drawn.
    pub(crate) fn purchase(
        &mut self,
        buyer_id: &AccountId,
        token_id: u64,
        deposit: u128,
    ) -> Result<SaleReceipt<AccountId>, MarketplaceError> {
        let config = self.market_config()?;
        self.ledger.credit(buyer_id, deposit);

        let result = ListingEngine::new(&mut self.listings, config).buy(
            &mut self.registry,
            &mut self.ledger,
            buyer_id,
            token_id,
            deposit,
        );
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => {
                self.ledger
                    .debit(buyer_id, deposit)
                    .map_err(|e| MarketplaceError::InternalError(e.to_string()))?;
                return Err(err.into());
            }
        };

        let excess = deposit - receipt.price;
        if excess > 0 {
            self.ledger
                .debit(buyer_id, excess)
                .map_err(|e| MarketplaceError::InternalError(e.to_string()))?;
            let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(excess));
            events::emit_excess_refunded(buyer_id, token_id, excess);
        }

        events::emit_token_transferred(&receipt.seller, &receipt.buyer, token_id);
        events::emit_purchase(&receipt);
        Ok(receipt)
    }
}
