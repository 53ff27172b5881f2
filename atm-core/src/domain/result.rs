//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} should be greater than zero")]
    InvalidAmount(Decimal),

    #[error("there is no authenticated customer")]
    NoActiveSession,

    #[error("customer {0} is already logged in, logout first")]
    AlreadyLoggedIn(String),

    #[error("no customer with login name {0} found")]
    UnknownCustomer(String),

    #[error("you can't transfer money to yourself")]
    SelfTransfer,

    #[error("not enough money: requested {requested}, available {available}")]
    InsufficientFunds { requested: Decimal, available: Decimal },

    #[error("amount {0} is too large")]
    AmountOverflow(Decimal),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an insufficient funds error
    pub fn insufficient(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds { requested, available }
    }

    /// True for ledger and session failures, false for environmental ones
    pub fn is_business(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_) | Self::Json(_))
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_classification() {
        assert!(Error::NoActiveSession.is_business());
        assert!(Error::insufficient(Decimal::TEN, Decimal::ONE).is_business());
        assert!(!Error::Config("bad".to_string()).is_business());
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidAmount(Decimal::ZERO);
        assert_eq!(err.to_string(), "0 should be greater than zero");

        let err = Error::UnknownCustomer("bob".to_string());
        assert!(err.to_string().contains("bob"));

        let err = Error::AmountOverflow(Decimal::MAX);
        assert!(err.is_business());
        assert!(err.to_string().ends_with("is too large"));
    }
}
