//! Gini coefficient, rank-weighted form
//!
//! ```text
//! G = 2·Σ(i·y_i) / (n·Σy_i) - (n + 1) / n        i = 1..n, y_1 <= ... <= y_n
//! ```
//!
//! 0 means every stream has the same audience; values approach `(n-1)/n`
//! as a single stream takes all viewers.

use std::fmt;

use crate::error::GiniError;

/// Result of [`gini`]
///
/// `Display` renders three decimal places, the form written to census records.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GiniCoefficient(f64);

impl GiniCoefficient {
    /// Raw coefficient
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for GiniCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Check the ordering precondition of [`gini`] without computing anything.
pub fn is_non_decreasing(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Compute the Gini coefficient of a non-decreasing sequence.
///
/// # Errors
///
/// - [`GiniError::EmptyInput`] for `[]`
/// - [`GiniError::NotNonDecreasing`] at the first out-of-order element
/// - [`GiniError::ZeroTotal`] when every value is zero
pub fn gini(values: &[u64]) -> Result<GiniCoefficient, GiniError> {
    if values.is_empty() {
        return Err(GiniError::EmptyInput);
    }

    let mut previous = 0u64;
    let mut rank_weighted: u128 = 0;
    let mut total: u128 = 0;

    for (index, &value) in values.iter().enumerate() {
        if value < previous {
            return Err(GiniError::NotNonDecreasing {
                index,
                previous,
                value,
            });
        }
        previous = value;

        let rank = (index + 1) as u128;
        rank_weighted += rank * u128::from(value);
        total += u128::from(value);
    }

    if total == 0 {
        return Err(GiniError::ZeroTotal { len: values.len() });
    }

    let n = values.len() as f64;
    let g = (2.0 * rank_weighted as f64) / (n * total as f64) - (n + 1.0) / n;

    Ok(GiniCoefficient(g))
}
