//! # Viewer Gini
//!
//! Inequality metric for viewer counts across live streams.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure functions, no I/O
//!   - `gini`: Rank-weighted Gini coefficient over a non-decreasing sequence
//!   - `ascending_from_descending`: Index reversal of a descending fetch order
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Input to `gini` MUST be non-decreasing. A violation is
//!   reported as `GiniError::NotNonDecreasing`, never a silently wrong value.
//! - **INVARIANT-2**: `Σ i·y_i` and `Σ y_i` are accumulated as integers; the only
//!   floating point operation is the final division.
//! - **INVARIANT-3**: Empty and all-zero inputs are named errors, never NaN.
//!
//! ## Usage Example
//!
//! ```
//! use viewer_gini::{ascending_from_descending, gini};
//!
//! // Platform order: most watched first
//! let fetched = [4, 3, 2, 1];
//! let ordered = ascending_from_descending(&fetched);
//!
//! let g = gini(&ordered).unwrap();
//! assert!((g.value() - 0.25).abs() < 1e-12);
//! assert_eq!(g.to_string(), "0.250");
//! ```

pub mod domain;
pub mod error;

pub use domain::{ascending_from_descending, gini, is_non_decreasing, GiniCoefficient};
pub use error::GiniError;
