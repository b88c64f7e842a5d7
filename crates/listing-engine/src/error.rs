/// Caller-visible failure of a listing operation. Every variant leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    AlreadyListed,
    NotListed,
    InsufficientFunds,
    Unauthorized,
    InvalidPrice,
}

impl ListingError {
    /// Stable numeric code returned to callers.
    pub fn code(&self) -> u32 {
        match self {
            Self::AlreadyListed => 102,
            Self::NotListed => 103,
            Self::InsufficientFunds => 104,
            Self::Unauthorized => 105,
            Self::InvalidPrice => 107,
        }
    }
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed => write!(f, "token is already listed"),
            Self::NotListed => write!(f, "token is not listed"),
            Self::InsufficientFunds => write!(f, "insufficient funds"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::InvalidPrice => write!(f, "price must be greater than zero"),
        }
    }
}

impl std::error::Error for ListingError {}

/// Rejected fee or royalty configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BasisPointsOutOfRange(u32),
    CommissionTooHigh { bps: u16, max: u16 },
    RoyaltyTooHigh { bps: u16, max: u16 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BasisPointsOutOfRange(bps) => {
                write!(f, "basis points {bps} outside 0..=10000")
            }
            Self::CommissionTooHigh { bps, max } => {
                write!(f, "commission {bps} bps exceeds maximum {max} bps")
            }
            Self::RoyaltyTooHigh { bps, max } => {
                write!(f, "royalty {bps} bps exceeds maximum {max} bps")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure reported by a host collaborator (registry or value transfer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InsufficientBalance { available: u128, required: u128 },
    NotOwner,
    TokenLocked,
    Rejected(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientBalance {
                available,
                required,
            } => write!(f, "balance {available} below required {required}"),
            Self::NotOwner => write!(f, "sender does not own the token"),
            Self::TokenLocked => write!(f, "token cannot be transferred"),
            Self::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}
