//! Pricing error taxonomy
//!
//! `SourceError` belongs to whoever supplies offers; `PricingError` is what a
//! pricing call returns. Source failures pass through unchanged inside
//! `PricingError::DataUnavailable`.

use thiserror::Error;
use types::offer::OfferId;

/// Failure to produce an offer sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Offers unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Failure to price consumption of an order book
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Insufficient liquidity: requested {requested}, {remaining} left unfilled")]
    InsufficientLiquidity { requested: i64, remaining: i64 },

    #[error("Arithmetic overflow while pricing")]
    Overflow,

    #[error(transparent)]
    DataUnavailable(#[from] SourceError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    #[error("Invalid offer: {offer_id}")]
    InvalidOffer { offer_id: OfferId },

    #[error("Offer {offer_id} is priced below its predecessor")]
    OutOfOrder { offer_id: OfferId },
}
