use crate::TokenId;
use crate::fees::FeeSplit;

/// An active offer to sell one token at a fixed price. Absent when not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<P> {
    pub seller: P,
    pub price: u128,
}

/// Read-only snapshot returned by `get_listing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView<P> {
    pub seller: P,
    pub price: u128,
    pub active: bool,
}

impl<P: Clone> From<&Listing<P>> for ListingView<P> {
    fn from(listing: &Listing<P>) -> Self {
        Self {
            seller: listing.seller.clone(),
            price: listing.price,
            active: true,
        }
    }
}

/// Who besides the seller may withdraw a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DelistPolicy<P> {
    #[default]
    SellerOnly,
    SellerOrOperator(P),
}

impl<P: PartialEq> DelistPolicy<P> {
    pub(crate) fn permits(&self, caller: &P, seller: &P) -> bool {
        if caller == seller {
            return true;
        }
        match self {
            Self::SellerOnly => false,
            Self::SellerOrOperator(operator) => caller == operator,
        }
    }
}

/// Outcome of a committed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleReceipt<P> {
    pub token_id: TokenId,
    pub seller: P,
    pub buyer: P,
    pub price: u128,
    pub split: FeeSplit,
    pub fee_account: P,
    pub royalty_recipient: Option<P>,
}
