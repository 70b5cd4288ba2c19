//! Sorting utilities for input series.
//!
//! ## Purpose
//!
//! This module provides the helpers used on the engine's order-dependent
//! paths: producing an owned ascending copy of a series, and checking whether
//! a caller-supplied series is already sorted.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so equal values keep their relative
//!   order.
//! * **Robustness**: Non-finite values (NaN, Inf) are moved to the end of the
//!   sequence in their original relative order.
//! * **Non-mutating**: The caller's slice is never modified; sorting works on
//!   an owned copy.
//!
//! ## Invariants
//!
//! * Finite values in the output are non-decreasing.
//! * The output is a permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not validate data; non-finite values are tolerated here
//!   and rejected by the engine validator.
//!
//! ## Visibility
//!
//! Internal to the engine, public for direct kernel users who need the same
//! sort order.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Return an owned copy of the series sorted ascending.
///
/// Finite values are ordered ascending; non-finite values are moved to the
/// end while preserving their relative order.
pub fn sort_ascending<T: Float>(series: &[T]) -> Vec<T> {
    let mut values = series.to_vec();

    values.sort_by(|a, b| match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });

    values
}

/// Return the index of the first element that breaks ascending order, or
/// `None` if the series is sorted.
pub fn first_disorder<T: Float>(series: &[T]) -> Option<usize> {
    series
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_ascending_leaves_input_untouched() {
        let series = [3.0, 1.0, 2.0];
        let sorted = sort_ascending(&series);
        assert_eq!(sorted, [1.0, 2.0, 3.0]);
        assert_eq!(series, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn sort_ascending_moves_non_finite_to_end() {
        let series = [2.0, f64::NAN, 1.0];
        let sorted = sort_ascending(&series);
        assert_eq!(sorted[0], 1.0);
        assert_eq!(sorted[1], 2.0);
        assert!(sorted[2].is_nan());
    }

    #[test]
    fn first_disorder_reports_offending_index() {
        assert_eq!(first_disorder(&[1.0, 3.0, 2.0, 4.0]), Some(2));
        assert_eq!(first_disorder(&[1.0, 2.0, 2.0, 4.0]), None);
        assert_eq!(first_disorder(&[5.0f64]), None);
        assert_eq!(first_disorder::<f64>(&[]), None);
    }
}
