//! Selling-to-buying unit conversion for a single offer
//!
//! Rounding always favours the seller: the taker pays the ceiling of the
//! exact proportional cost. When the price is at most 1, the offer's usable
//! capacity is first reduced to what it can deliver without the seller
//! receiving less than its own floor-rounded proceeds:
//!
//! ```text
//! bound    = n > d ? capacity : ceil(floor(capacity * n / d) * d / n)
//! consumed = min(bound, needed)
//! cost     = ceil(consumed * n / d)
//! ```
//!
//! Intermediate products are computed in 128 bits; only a final value that
//! does not fit in `i64` is an error.

use crate::errors::PricingError;

/// Outcome of converting against one offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Cost in buying-asset units
    pub buying_units: i64,
    /// Selling-asset units taken from the offer
    pub selling_units: i64,
}

impl Conversion {
    pub const NONE: Conversion = Conversion {
        buying_units: 0,
        selling_units: 0,
    };
}

/// `floor(x * n / d)`
pub fn mul_fraction_round_down(x: i64, n: i64, d: i64) -> Result<i64, PricingError> {
    let value = (x as i128 * n as i128) / d as i128;
    i64::try_from(value).map_err(|_| PricingError::Overflow)
}

/// `ceil(x * n / d)` for non-negative `x` and positive `n`, `d`
pub fn mul_fraction_round_up(x: i64, n: i64, d: i64) -> Result<i64, PricingError> {
    let product = x as i128 * n as i128;
    let d = d as i128;
    let value = (product + d - 1) / d;
    i64::try_from(value).map_err(|_| PricingError::Overflow)
}

/// Largest part of an offer that can be sold without short-changing the seller
pub fn offer_selling_bound(capacity: i64, n: i64, d: i64) -> Result<i64, PricingError> {
    if n > d {
        return Ok(capacity);
    }
    let buying = mul_fraction_round_down(capacity, n, d)?;
    mul_fraction_round_up(buying, d, n)
}

/// Convert up to `needed` selling units from an offer holding `capacity`
/// selling units at price `n/d`.
pub fn convert_to_buying_units(
    capacity: i64,
    needed: i64,
    n: i64,
    d: i64,
) -> Result<Conversion, PricingError> {
    debug_assert!(capacity >= 0 && needed >= 0);
    debug_assert!(n > 0 && d > 0);

    if needed == 0 {
        return Ok(Conversion::NONE);
    }

    let selling_units = offer_selling_bound(capacity, n, d)?.min(needed);
    let buying_units = mul_fraction_round_up(selling_units, n, d)?;

    Ok(Conversion {
        buying_units,
        selling_units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(capacity: i64, needed: i64, n: i64, d: i64) -> (i64, i64) {
        let c = convert_to_buying_units(capacity, needed, n, d).unwrap();
        (c.buying_units, c.selling_units)
    }

    #[test]
    fn test_partial_take_rounds_cost_up() {
        assert_eq!(convert(7, 2, 3, 7), (1, 2));
        assert_eq!(convert(i64::MAX, 2, 3, 7), (1, 2));
    }

    #[test]
    fn test_exact_price() {
        assert_eq!(convert(20, 20, 1, 4), (5, 20));
    }

    #[test]
    fn test_clamped_to_capacity() {
        assert_eq!(convert(20, 100, 1, 4), (5, 20));
        assert_eq!(convert(20, 100, 11, 7), (32, 20));
    }

    #[test]
    fn test_price_below_one_shrinks_bound() {
        // floor(20 * 7/11) = 12 buying units; 12 buys back ceil(12 * 11/7) = 19
        assert_eq!(convert(20, 20, 7, 11), (13, 19));
        assert_eq!(convert(20, 100, 7, 11), (13, 19));
    }

    #[test]
    fn test_price_above_one_uses_full_capacity() {
        assert_eq!(convert(20, 20, 11, 7), (32, 20));
    }

    #[test]
    fn test_nothing_needed() {
        assert_eq!(convert(1, 0, 3, 7), (0, 0));
        assert_eq!(convert(1, 0, 7, 3), (0, 0));
        assert_eq!(convert(i64::MAX, 0, 3, 7), (0, 0));
    }

    #[test]
    fn test_dust_offer_yields_nothing() {
        // 1 unit at 3/7 is worth less than one buying unit
        assert_eq!(convert(1, 5, 3, 7), (0, 0));
    }

    #[test]
    fn test_unrepresentable_cost_is_overflow() {
        assert_eq!(
            convert_to_buying_units(i64::MAX, i64::MAX, 2, 1),
            Err(PricingError::Overflow)
        );
    }

    #[test]
    fn test_wide_intermediate_does_not_overflow() {
        // i64::MAX * 3 does not fit in 64 bits, the result does
        let c = convert_to_buying_units(i64::MAX, i64::MAX, 3, 4).unwrap();
        assert!(c.selling_units <= i64::MAX);
        assert_eq!(
            c.buying_units,
            mul_fraction_round_up(c.selling_units, 3, 4).unwrap()
        );
    }

    #[test]
    fn test_round_helpers() {
        assert_eq!(mul_fraction_round_down(7, 1, 2).unwrap(), 3);
        assert_eq!(mul_fraction_round_up(7, 1, 2).unwrap(), 4);
        assert_eq!(mul_fraction_round_up(8, 1, 2).unwrap(), 4);
        assert_eq!(mul_fraction_round_up(0, 5, 3).unwrap(), 0);
        assert_eq!(
            mul_fraction_round_down(i64::MAX, 2, 1),
            Err(PricingError::Overflow)
        );
    }
}
