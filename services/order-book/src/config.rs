//! Order book walker configuration

use serde::{Deserialize, Serialize};

/// Configuration for an [`OrderBook`](crate::book::OrderBook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Reject offer sequences that are not ascending by effective price.
    pub verify_ordering: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            verify_ordering: cfg!(debug_assertions),
        }
    }
}
