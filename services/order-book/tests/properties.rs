//! Property-based tests for the pricing core using `proptest`.

use order_book::convert::{convert_to_buying_units, mul_fraction_round_up};
use order_book::overflow::would_add_overflow;
use order_book::{BookConfig, InMemoryOfferSource, OrderBook, PricingError};
use proptest::prelude::*;
use types::asset::Asset;
use types::numeric::{Amount, PriceRatio};
use types::offer::{Offer, OfferId};

const ISSUER: &str = "GDSBCQO34HWPGUGQSP3QBFEXVTSR2PW46UIGTHVWGWJGQKH3AFNHXHXN";

fn book_from(levels: &[(i64, i64, i64)]) -> OrderBook<InMemoryOfferSource> {
    let eur = Asset::credit("EUR", ISSUER).unwrap();
    let usd = Asset::credit("USD", ISSUER).unwrap();
    // Offers must reach the walker cheapest first
    let mut levels = levels.to_vec();
    levels.sort_by(|a, b| (a.1 as i128 * b.2 as i128).cmp(&(b.1 as i128 * a.2 as i128)));
    let offers = levels
        .iter()
        .enumerate()
        .map(|(i, &(amount, n, d))| {
            Offer::new(
                OfferId::new(i as i64 + 1),
                "GSELLER",
                eur.clone(),
                usd.clone(),
                Amount::from_raw(amount),
                PriceRatio::new(n, d).unwrap(),
            )
        })
        .collect();
    OrderBook::with_config(
        eur,
        usd,
        InMemoryOfferSource::new(offers),
        BookConfig {
            verify_ordering: true,
        },
    )
}

fn levels() -> impl Strategy<Value = Vec<(i64, i64, i64)>> {
    prop::collection::vec((0i64..1_000_000_000_000, 1i64..1_000, 1i64..1_000), 0..8)
}

proptest! {
    #[test]
    fn prop_overflow_guard_matches_wide_add(a in 0i64..=i64::MAX, b in 0i64..=i64::MAX) {
        let expected = (a as i128 + b as i128) > i64::MAX as i128;
        prop_assert_eq!(would_add_overflow(a, b), expected);
    }

    #[test]
    fn prop_nothing_needed_costs_nothing(
        capacity in 0i64..=i64::MAX,
        n in 1i64..=i64::MAX,
        d in 1i64..=i64::MAX,
    ) {
        let c = convert_to_buying_units(capacity, 0, n, d).unwrap();
        prop_assert_eq!((c.buying_units, c.selling_units), (0, 0));
    }

    #[test]
    fn prop_conversion_is_bounded_and_rounded_up(
        capacity in 0i64..1_000_000_000_000,
        needed in 0i64..1_000_000_000_000,
        n in 1i64..100_000,
        d in 1i64..100_000,
    ) {
        let c = convert_to_buying_units(capacity, needed, n, d).unwrap();
        prop_assert!(c.selling_units >= 0);
        prop_assert!(c.selling_units <= capacity.min(needed));

        // buying * d >= selling * n, and one unit less would fall short
        let paid = c.buying_units as i128 * d as i128;
        let owed = c.selling_units as i128 * n as i128;
        prop_assert!(paid >= owed);
        prop_assert!(paid - (d as i128) < owed || c.buying_units == 0);
        prop_assert_eq!(c.buying_units, mul_fraction_round_up(c.selling_units, n, d).unwrap());
    }

    #[test]
    fn prop_cost_is_monotonic(levels in levels(), x in 0i64..10_000_000_000_000, y in 0i64..10_000_000_000_000) {
        let book = book_from(&levels);
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };

        let cost_lo = book.cost_to_consume_liquidity(Amount::from_raw(lo));
        let cost_hi = book.cost_to_consume_liquidity(Amount::from_raw(hi));
        if let (Ok(cost_lo), Ok(cost_hi)) = (cost_lo, cost_hi) {
            prop_assert!(cost_lo <= cost_hi);
        }
    }

    #[test]
    fn prop_exhaustion_boundary(levels in levels()) {
        let book = book_from(&levels);
        let available = book.available_liquidity().unwrap();

        prop_assert!(book.cost_to_consume_liquidity(available).is_ok());
        let one_more = Amount::from_raw(available.raw() + 1);
        let over = book.cost_to_consume_liquidity(one_more);
        prop_assert!(
            matches!(over, Err(PricingError::InsufficientLiquidity { remaining: 1, .. })),
            "expected insufficient liquidity, got {:?}",
            over
        );
    }

    #[test]
    fn prop_full_capacity_when_price_divides(
        units in prop::collection::vec((1i64..1_000_000, 1i64..1_000, 1i64..1_000), 1..6),
    ) {
        // amount = k * d delivers exactly its capacity at any price n/d
        let levels: Vec<_> = units.iter().map(|&(k, n, d)| (k * d, n, d)).collect();
        let book = book_from(&levels);
        let total: i64 = levels.iter().map(|l| l.0).sum();
        prop_assert_eq!(book.available_liquidity().unwrap(), Amount::from_raw(total));
    }
}
