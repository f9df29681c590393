//! Offer sources
//!
//! The walker depends only on [`OfferSource`]. A source must hand back the
//! offers of one `(selling, buying)` pair sorted ascending by effective price;
//! the production source is the ledger store, [`InMemoryOfferSource`] serves
//! fixed snapshots.

use std::sync::Arc;

use tracing::debug;
use types::asset::Asset;
use types::offer::Offer;

use crate::errors::SourceError;

/// Supplies price-ordered offers for an asset pair
pub trait OfferSource {
    /// Offers selling `selling` for `buying`, cheapest first.
    fn offers_for(&self, selling: &Asset, buying: &Asset) -> Result<Vec<Offer>, SourceError>;
}

impl<S: OfferSource + ?Sized> OfferSource for &S {
    fn offers_for(&self, selling: &Asset, buying: &Asset) -> Result<Vec<Offer>, SourceError> {
        (**self).offers_for(selling, buying)
    }
}

impl<S: OfferSource + ?Sized> OfferSource for Arc<S> {
    fn offers_for(&self, selling: &Asset, buying: &Asset) -> Result<Vec<Offer>, SourceError> {
        (**self).offers_for(selling, buying)
    }
}

impl<S: OfferSource + ?Sized> OfferSource for Box<S> {
    fn offers_for(&self, selling: &Asset, buying: &Asset) -> Result<Vec<Offer>, SourceError> {
        (**self).offers_for(selling, buying)
    }
}

/// Snapshot of offers held in memory
///
/// Offers for every pair may be mixed together; lookups filter by pair and
/// sort by effective price, breaking ties by offer id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferSource {
    offers: Vec<Offer>,
    unavailable: Option<String>,
}

impl InMemoryOfferSource {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self {
            offers,
            unavailable: None,
        }
    }

    pub fn insert(&mut self, offer: Offer) {
        self.offers.push(offer);
    }

    /// Make every subsequent lookup fail with `reason`
    pub fn mark_unavailable(&mut self, reason: impl Into<String>) {
        self.unavailable = Some(reason.into());
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl OfferSource for InMemoryOfferSource {
    fn offers_for(&self, selling: &Asset, buying: &Asset) -> Result<Vec<Offer>, SourceError> {
        if let Some(reason) = &self.unavailable {
            return Err(SourceError::Unavailable {
                reason: reason.clone(),
            });
        }

        let mut offers: Vec<Offer> = self
            .offers
            .iter()
            .filter(|offer| offer.is_for_pair(selling, buying))
            .cloned()
            .collect();
        offers.sort_by(|a, b| {
            a.price
                .cmp_effective(&b.price)
                .then_with(|| a.offer_id.cmp(&b.offer_id))
        });

        debug!(
            selling = %selling,
            buying = %buying,
            offer_count = offers.len(),
            "Loaded offers from snapshot"
        );
        Ok(offers)
    }
}
