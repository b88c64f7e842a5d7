use listing_engine::SaleReceipt;
use near_sdk::AccountId;

use super::LISTING;
use super::builder::EventBuilder;

pub fn emit_listed(seller_id: &AccountId, token_id: u64, price: u128) {
    EventBuilder::new(LISTING, "list", seller_id)
        .field("seller_id", seller_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub fn emit_delisted(actor_id: &AccountId, seller_id: &AccountId, token_id: u64) {
    EventBuilder::new(LISTING, "delist", actor_id)
        .field("seller_id", seller_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_price_updated(seller_id: &AccountId, token_id: u64, old_price: u128, new_price: u128) {
    EventBuilder::new(LISTING, "update_price", seller_id)
        .field("seller_id", seller_id)
        .field("token_id", token_id)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}

pub fn emit_purchase(receipt: &SaleReceipt<AccountId>) {
    EventBuilder::new(LISTING, "purchase", &receipt.buyer)
        .field("buyer_id", &receipt.buyer)
        .field("seller_id", &receipt.seller)
        .field("token_id", receipt.token_id)
        .field("price", receipt.price)
        .field("commission", receipt.split.commission)
        .field("fee_recipient", &receipt.fee_account)
        .field("royalty", receipt.split.royalty)
        .field_opt("royalty_recipient", receipt.royalty_recipient.as_ref())
        .field("seller_proceeds", receipt.split.seller_proceeds)
        .emit();
}
