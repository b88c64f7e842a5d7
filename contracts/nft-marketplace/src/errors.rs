use near_sdk_macros::NearSchema;

use listing_engine::ListingError;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MarketplaceError {
    AlreadyListed(String),
    NotListed(String),
    InsufficientFunds(String),
    Unauthorized(String),
    InvalidPrice(String),
    InvalidInput(String),
    NotFound(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl MarketplaceError {
    /// Stable caller-visible code; `None` for contract-level failures outside the listing table.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::AlreadyListed(_) => Some(102),
            Self::NotListed(_) => Some(103),
            Self::InsufficientFunds(_) => Some(104),
            Self::Unauthorized(_) => Some(105),
            Self::InvalidPrice(_) => Some(107),
            Self::InvalidInput(_)
            | Self::NotFound(_)
            | Self::InsufficientDeposit(_)
            | Self::InternalError(_) => None,
        }
    }

    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }

    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed(msg) => write!(f, "Already listed (102): {}", msg),
            Self::NotListed(msg) => write!(f, "Not listed (103): {}", msg),
            Self::InsufficientFunds(msg) => write!(f, "Insufficient funds (104): {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized (105): {}", msg),
            Self::InvalidPrice(msg) => write!(f, "Invalid price (107): {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<ListingError> for MarketplaceError {
    fn from(err: ListingError) -> Self {
        let msg = err.to_string();
        match err {
            ListingError::AlreadyListed => Self::AlreadyListed(msg),
            ListingError::NotListed => Self::NotListed(msg),
            ListingError::InsufficientFunds => Self::InsufficientFunds(msg),
            ListingError::Unauthorized => Self::Unauthorized(msg),
            ListingError::InvalidPrice => Self::InvalidPrice(msg),
        }
    }
}

impl From<listing_engine::ConfigError> for MarketplaceError {
    fn from(err: listing_engine::ConfigError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
