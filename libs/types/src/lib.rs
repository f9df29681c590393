//! Types library for the ledger indexing services
//!
//! Value types shared by every service that reads ledger state. All types
//! are immutable snapshots with exact (integer or rational) arithmetic.
//!
//! # Modules
//! - `asset`: Asset identifiers (native and issued credits)
//! - `numeric`: Fixed-point amounts (7 decimals) and exact price ratios
//! - `offer`: Standing offer snapshots
//! - `errors`: Error taxonomy

// Public modules
pub mod asset;
pub mod numeric;
pub mod offer;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::asset::*;
    pub use crate::numeric::*;
    pub use crate::offer::*;
    pub use crate::errors::*;
}
