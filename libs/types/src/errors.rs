//! Error types for ledger value construction
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Asset construction and parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Unknown asset type: {0}")]
    UnknownType(String),

    #[error("Invalid asset code: {code}")]
    InvalidCode { code: String },

    #[error("Missing issuer for asset code {code}")]
    MissingIssuer { code: String },

    #[error("Native asset cannot carry code or issuer")]
    NativeWithCode,
}

/// Fixed-point amount errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    Invalid(String),

    #[error("Amount has more than 7 decimal places: {0}")]
    TooPrecise(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

/// Price ratio errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price components must be positive: n={n}, d={d}")]
    NonPositive { n: i64, d: i64 },
}
