//! Order Book Pricing
//!
//! Prices the consumption of a single order book: given an amount of the
//! selling asset to acquire, walk the book's offers cheapest first and total
//! the buying-asset cost under exact 64-bit fixed-point arithmetic.
//!
//! **Key Invariants:**
//! - The taker is never charged less than the exact proportional cost
//! - An offer is never consumed beyond what it can deliver
//! - Overflow is always an error, never wrapped or capped
//! - Offers arrive ascending by effective price (checked when configured)
//!
//! Choosing which books or multi-hop paths to price is left to callers.

pub mod book;
pub mod config;
pub mod convert;
pub mod errors;
pub mod overflow;
pub mod source;

pub use book::{Fill, OrderBook, Quote};
pub use config::BookConfig;
pub use errors::{PricingError, SourceError};
pub use source::{InMemoryOfferSource, OfferSource};
