use crate::*;
use listing_engine::{ConfigError, ListingError};

#[test]
fn listing_errors_keep_their_codes() {
    let cases = [
        (ListingError::AlreadyListed, 102),
        (ListingError::NotListed, 103),
        (ListingError::InsufficientFunds, 104),
        (ListingError::Unauthorized, 105),
        (ListingError::InvalidPrice, 107),
    ];
    for (err, code) in cases {
        assert_eq!(MarketplaceError::from(err).code(), Some(code));
    }
}

#[test]
fn contract_level_errors_have_no_code() {
    assert_eq!(MarketplaceError::token_not_found().code(), None);
    assert_eq!(MarketplaceError::InvalidInput("x".into()).code(), None);
    assert_eq!(MarketplaceError::InsufficientDeposit("x".into()).code(), None);
}

#[test]
fn display_includes_code() {
    let err = MarketplaceError::from(ListingError::NotListed);
    assert!(err.to_string().starts_with("Not listed (103):"));
    assert_eq!(
        MarketplaceError::only_owner("contract owner").to_string(),
        "Unauthorized (105): Only contract owner can perform this action"
    );
}

#[test]
fn config_errors_become_invalid_input() {
    let err = MarketplaceError::from(ConfigError::RoyaltyTooHigh {
        bps: 6_000,
        max: MAX_ROYALTY_BPS,
    });
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}
