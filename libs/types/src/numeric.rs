//! Fixed-point amounts and exact price ratios
//!
//! Amounts are signed 64-bit integers with 7 implied decimal places. Prices
//! are exact rationals `n/d`, never floats. Decimal rendering goes through
//! rust_decimal so display is deterministic.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::{AmountError, PriceError};

/// Number of implied decimal places in an [`Amount`]
pub const AMOUNT_SCALE: u32 = 7;

/// Fixed-point amount in raw ledger units
///
/// `Amount::from_raw(10_000_000)` is one whole unit and displays as
/// `"1.0000000"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const ONE: Amount = Amount(10_000_000);
    pub const MAX: Amount = Amount(i64::MAX);

    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Exact decimal value (scale 7)
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, AMOUNT_SCALE)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed).map_err(|_| AmountError::Invalid(s.to_string()))?;
        // Decimal rounds past 28 fractional digits, so count them on the text
        if significant_fraction_digits(trimmed) > AMOUNT_SCALE as usize {
            return Err(AmountError::TooPrecise(s.to_string()));
        }

        value
            .checked_mul(Decimal::from(Amount::ONE.0))
            .and_then(|raw| raw.to_i64())
            .map(Amount)
            .ok_or_else(|| AmountError::OutOfRange(s.to_string()))
    }
}

/// Fractional digits left after dropping trailing zeros
fn significant_fraction_digits(s: &str) -> usize {
    s.split_once('.')
        .map(|(_, fraction)| fraction.trim_end_matches('0').len())
        .unwrap_or(0)
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

/// Exact price: `n` units of the buying asset per `d` units of the selling
/// asset. Both components are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "PriceRepr")]
pub struct PriceRatio {
    n: i64,
    d: i64,
}

impl PriceRatio {
    pub fn new(n: i64, d: i64) -> Result<Self, PriceError> {
        if n <= 0 || d <= 0 {
            return Err(PriceError::NonPositive { n, d });
        }
        Ok(Self { n, d })
    }

    /// Numerator (buying units)
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Denominator (selling units)
    pub fn d(&self) -> i64 {
        self.d
    }

    /// Compare effective prices `n/d` exactly.
    ///
    /// Equal ratios with different representations (1/2 vs 2/4) compare equal.
    pub fn cmp_effective(&self, other: &PriceRatio) -> Ordering {
        let lhs = self.n as i128 * other.d as i128;
        let rhs = other.n as i128 * self.d as i128;
        lhs.cmp(&rhs)
    }

    /// Price rounded half away from zero to 7 decimal places
    pub fn to_decimal(&self) -> Decimal {
        let mut value = (Decimal::from(self.n) / Decimal::from(self.d))
            .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(AMOUNT_SCALE);
        value
    }
}

impl fmt::Display for PriceRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[derive(Serialize, Deserialize)]
struct PriceRepr {
    n: i64,
    d: i64,
}

impl TryFrom<PriceRepr> for PriceRatio {
    type Error = PriceError;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        PriceRatio::new(repr.n, repr.d)
    }
}

impl From<PriceRatio> for PriceRepr {
    fn from(price: PriceRatio) -> Self {
        Self {
            n: price.n,
            d: price.d,
        }
    }
}
