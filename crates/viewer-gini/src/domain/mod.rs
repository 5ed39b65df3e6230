//! Domain Layer - Pure business logic
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod gini;
pub mod ordering;

pub use gini::{gini, is_non_decreasing, GiniCoefficient};
pub use ordering::ascending_from_descending;
