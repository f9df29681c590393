//! Order book liquidity pricing
//!
//! Answers "what does it cost, in the buying asset, to take N units of the
//! selling asset out of this book". The walk is a single pass over the
//! source's offers, cheapest first:
//!
//! 1. convert the still-needed amount against the offer (see [`crate::convert`])
//! 2. add the offer's cost to the total, failing on overflow
//! 3. stop once nothing is needed; running out of offers first is a failure
//!
//! Offers are never mutated and no state outlives a call, so one book may be
//! priced from any number of threads at once.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, trace};
use types::asset::Asset;
use types::numeric::{Amount, PriceRatio};
use types::offer::{Offer, OfferId};

use crate::config::BookConfig;
use crate::convert::{convert_to_buying_units, offer_selling_bound};
use crate::errors::PricingError;
use crate::overflow::would_add_overflow;
use crate::source::OfferSource;

/// Portion of one offer consumed by a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fill {
    pub offer_id: OfferId,
    /// Selling-asset units taken from the offer
    pub selling_consumed: Amount,
    /// Buying-asset units paid for them
    pub buying_cost: Amount,
}

/// Priced consumption of an order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Requested selling-asset amount
    pub selling_amount: Amount,
    /// Total buying-asset cost
    pub cost: Amount,
    /// Per-offer breakdown in consumption order
    pub fills: Vec<Fill>,
}

/// The `(selling, buying)` order book backed by an offer source
#[derive(Debug, Clone)]
pub struct OrderBook<S> {
    selling: Asset,
    buying: Asset,
    source: S,
    config: BookConfig,
}

impl<S: OfferSource> OrderBook<S> {
    /// Create a book with default configuration
    pub fn new(selling: Asset, buying: Asset, source: S) -> Self {
        Self::with_config(selling, buying, source, BookConfig::default())
    }

    pub fn with_config(selling: Asset, buying: Asset, source: S, config: BookConfig) -> Self {
        Self {
            selling,
            buying,
            source,
            config,
        }
    }

    pub fn selling(&self) -> &Asset {
        &self.selling
    }

    pub fn buying(&self) -> &Asset {
        &self.buying
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Buying-asset units needed to consume `selling_amount` of the selling
    /// asset from this book.
    pub fn cost_to_consume_liquidity(&self, selling_amount: Amount) -> Result<Amount, PricingError> {
        self.walk(selling_amount, None).map(Amount::from_raw)
    }

    /// Price `selling_amount` and report which offers supply it.
    pub fn quote(&self, selling_amount: Amount) -> Result<Quote, PricingError> {
        let mut fills = Vec::new();
        let cost = self.walk(selling_amount, Some(&mut fills))?;
        Ok(Quote {
            selling_amount,
            cost: Amount::from_raw(cost),
            fills,
        })
    }

    /// Single pass over the offers; records fills only when asked to.
    fn walk(&self, selling_amount: Amount, mut fills: Option<&mut Vec<Fill>>) -> Result<i64, PricingError> {
        let requested = selling_amount.raw();
        if requested < 0 {
            return Err(PricingError::InvalidAmount(requested));
        }
        if requested == 0 {
            return Ok(0);
        }

        debug!(
            selling = %self.selling,
            buying = %self.buying,
            requested,
            "Pricing order book consumption"
        );

        let offers = self.source.offers_for(&self.selling, &self.buying)?;

        let mut remaining = requested;
        let mut total_cost: i64 = 0;
        let mut consumed_offers = 0usize;
        let mut previous_price: Option<PriceRatio> = None;

        for offer in &offers {
            self.check_offer(offer, previous_price.as_ref())?;
            previous_price = Some(offer.price);

            let conversion = convert_to_buying_units(
                offer.amount.raw(),
                remaining,
                offer.price.n(),
                offer.price.d(),
            )?;

            if would_add_overflow(total_cost, conversion.buying_units) {
                debug!(
                    offer_id = %offer.offer_id,
                    total_cost,
                    offer_cost = conversion.buying_units,
                    "Cost accumulation overflow"
                );
                return Err(PricingError::Overflow);
            }
            total_cost += conversion.buying_units;
            remaining -= conversion.selling_units;

            if conversion.selling_units > 0 {
                consumed_offers += 1;
                trace!(
                    offer_id = %offer.offer_id,
                    selling_consumed = conversion.selling_units,
                    buying_cost = conversion.buying_units,
                    remaining,
                    "Consumed offer"
                );
                if let Some(fills) = fills.as_deref_mut() {
                    fills.push(Fill {
                        offer_id: offer.offer_id,
                        selling_consumed: Amount::from_raw(conversion.selling_units),
                        buying_cost: Amount::from_raw(conversion.buying_units),
                    });
                }
            }

            if remaining == 0 {
                break;
            }
        }

        if remaining > 0 {
            debug!(
                requested,
                remaining,
                offer_count = offers.len(),
                "Order book exhausted"
            );
            return Err(PricingError::InsufficientLiquidity {
                requested,
                remaining,
            });
        }

        debug!(requested, cost = total_cost, consumed_offers, "Priced consumption");
        Ok(total_cost)
    }

    /// Total selling-asset units this book can deliver after rounding.
    ///
    /// Pricing exactly this amount succeeds; one unit more fails with
    /// `InsufficientLiquidity`.
    pub fn available_liquidity(&self) -> Result<Amount, PricingError> {
        let offers = self.source.offers_for(&self.selling, &self.buying)?;

        let mut total: i64 = 0;
        let mut previous_price: Option<PriceRatio> = None;
        for offer in &offers {
            self.check_offer(offer, previous_price.as_ref())?;
            previous_price = Some(offer.price);

            let bound = offer_selling_bound(offer.amount.raw(), offer.price.n(), offer.price.d())?;
            if would_add_overflow(total, bound) {
                return Err(PricingError::Overflow);
            }
            total += bound;
        }
        Ok(Amount::from_raw(total))
    }

    fn check_offer(&self, offer: &Offer, previous: Option<&PriceRatio>) -> Result<(), PricingError> {
        if offer.amount.is_negative() || !offer.is_for_pair(&self.selling, &self.buying) {
            return Err(PricingError::InvalidOffer {
                offer_id: offer.offer_id,
            });
        }
        if self.config.verify_ordering {
            if let Some(previous) = previous {
                if offer.price.cmp_effective(previous) == Ordering::Less {
                    return Err(PricingError::OutOfOrder {
                        offer_id: offer.offer_id,
                    });
                }
            }
        }
        Ok(())
    }
}
