//! Fetch order to calculator order
//!
//! The streams endpoint lists the most watched stream first. [`crate::gini`]
//! needs the opposite order, so the fetched counts are reversed by index.
//! If the upstream ordering ever changes, this is the step that has to follow.

/// Reverse a descending sequence into non-decreasing order.
///
/// The value at position `i` lands at position `n - 1 - i`. No sorting and no
/// validation happens here; out-of-order input stays out of order and is
/// rejected later by [`crate::gini`].
pub fn ascending_from_descending(values: &[u64]) -> Vec<u64> {
    let n = values.len();
    let mut ordered = vec![0; n];
    for (i, &value) in values.iter().enumerate() {
        ordered[n - 1 - i] = value;
    }
    ordered
}
