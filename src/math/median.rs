//! Median of a sorted series.
//!
//! ## Purpose
//!
//! This module computes the median of an already-sorted series in constant
//! time.
//!
//! ## Design notes
//!
//! * Sortedness is a caller contract, not enforced here; the engine either
//!   sorts an owned copy or verifies the caller's claim before reaching this
//!   kernel.
//! * Odd and even lengths branch explicitly; there is no interpolation beyond
//!   averaging the two central elements.
//!
//! ## Non-goals
//!
//! * This module does not sort, and does not provide general quantiles.

use num_traits::Float;

// ============================================================================
// Median
// ============================================================================

/// Compute the median of a series sorted ascending.
///
/// Odd length returns the middle element; even length returns the average of
/// the two central elements.
///
/// # Contract
///
/// The series must be non-empty and sorted ascending.
pub fn median<T: Float>(sorted: &[T]) -> T {
    let n = sorted.len();

    if n % 2 == 1 {
        return sorted[n / 2];
    }

    let upper = sorted[n / 2]; // right of the midpoint
    let lower = sorted[n / 2 - 1]; // left of the midpoint
    (lower + upper) / T::from(2.0).unwrap()
}

// ============================================================================
// Tests
// ============================================================================
