//! Mean and standard deviation of a numeric series.
//!
//! ## Purpose
//!
//! This module provides the two moment-based measures of the crate: the
//! arithmetic mean and the population standard deviation.
//!
//! ## Design notes
//!
//! * Both functions are single-pass folds over the slice.
//! * `standard_deviation` takes the precomputed mean as a parameter rather
//!   than recomputing it, avoiding a redundant traversal and keeping the
//!   function composable and independently testable.
//! * Neither function depends on element order, so unsorted input is fine.
//! * All functions are generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Population standard deviation
//!
//! The deviation formula divides by N (not N−1): the series is described as
//! the whole population, not a sample of a larger one.
//!
//! ```text
//! stddev = sqrt(Σ(x_i − mean)² / N)
//! ```
//!
//! ## Invariants
//!
//! * `standard_deviation` >= 0 for any in-contract input, and equals 0 iff
//!   all elements are equal.
//!
//! ## Non-goals
//!
//! * This module does not validate input; a non-empty series is a caller
//!   contract (the engine validator enforces it at the API boundary).
//! * This module does not provide compensated summation; the intended scale
//!   is small interactive series.

use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Compute the arithmetic mean of a series.
///
/// # Contract
///
/// The series must be non-empty; an empty series divides by zero and yields
/// NaN rather than a defined statistic.
pub fn mean<T: Float>(series: &[T]) -> T {
    let sum = series.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / T::from(series.len()).unwrap()
}

/// Compute the population standard deviation of a series around `mean`.
///
/// # Contract
///
/// `mean` must be the arithmetic mean of `series`, and the series must be
/// non-empty.
pub fn standard_deviation<T: Float>(series: &[T], mean: T) -> T {
    let sum_sq = series.iter().fold(T::zero(), |acc, &x| {
        let deviation = x - mean;
        acc + deviation * deviation
    });

    (sum_sq / T::from(series.len()).unwrap()).sqrt()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTBOOK: [f64; 8] = [27.9, 32.4, 39.7, 41.0, 44.87, 49.98, 56.5, 59.23];

    #[test]
    fn mean_of_textbook_series() {
        let m = mean(&TEXTBOOK);
        assert!((m - 43.9475).abs() < 1e-9, "got {m}");
    }

    #[test]
    fn mean_is_order_independent() {
        let shuffled = [56.5, 27.9, 32.4, 59.23, 44.87, 41.0, 39.7, 49.98];
        assert!((mean(&TEXTBOOK) - mean(&shuffled)).abs() < 1e-12);
    }

    #[test]
    fn mean_of_single_element() {
        assert_eq!(mean(&[7.0f64]), 7.0);
    }

    #[test]
    fn standard_deviation_of_constant_series_is_zero() {
        let series = [4.2f64; 5];
        let m = mean(&series);
        assert_eq!(standard_deviation(&series, m), 0.0);
    }

    #[test]
    fn standard_deviation_matches_known_value() {
        // Population stddev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let series = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&series);
        assert!((standard_deviation(&series, m) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn standard_deviation_is_non_negative() {
        let series = [-3.0, -1.0, 0.5, 2.0];
        let m = mean(&series);
        assert!(standard_deviation(&series, m) >= 0.0);
    }
}
