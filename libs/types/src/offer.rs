//! Standing offers read from the ledger
//!
//! An offer is an immutable snapshot of a seller's commitment to sell up to
//! `amount` of `selling` in exchange for `buying` at `price`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::asset::Asset;
use crate::numeric::{Amount, PriceRatio};

/// Ledger-assigned offer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(i64);

impl OfferId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offer snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "id")]
    pub offer_id: OfferId,
    /// Seller account id
    pub seller: String,
    pub selling: Asset,
    pub buying: Asset,
    /// Remaining selling-asset capacity
    pub amount: Amount,
    /// Buying units per selling unit
    #[serde(rename = "price_r")]
    pub price: PriceRatio,
    pub last_modified_ledger: u32,
}

impl Offer {
    pub fn new(
        offer_id: OfferId,
        seller: impl Into<String>,
        selling: Asset,
        buying: Asset,
        amount: Amount,
        price: PriceRatio,
    ) -> Self {
        Self {
            offer_id,
            seller: seller.into(),
            selling,
            buying,
            amount,
            price,
            last_modified_ledger: 0,
        }
    }

    /// Cursor used when paging through offers
    pub fn paging_token(&self) -> String {
        self.offer_id.to_string()
    }

    /// Whether this offer belongs to the `(selling, buying)` book
    pub fn is_for_pair(&self, selling: &Asset, buying: &Asset) -> bool {
        &self.selling == selling && &self.buying == buying
    }
}
