//! Execution engine for descriptive statistics.
//!
//! ## Purpose
//!
//! This module orchestrates one description pass: validate the series,
//! establish sorted order, run the math kernels in sequence, and package the
//! outputs into a [`Summary`].
//!
//! ## Design notes
//!
//! * The caller's slice is never mutated: unless `assume_sorted` is set, the
//!   engine sorts an owned copy.
//! * On the `assume_sorted` path the claim is verified up front, so the
//!   order-dependent kernels can never observe unsorted data.
//! * Mean and standard deviation are order-independent but run on the sorted
//!   view anyway; the result is identical and the data is already at hand.
//! * The modal set is collected only when configured, after its repeat count
//!   is known from the info pass.
//!
//! ## Key concepts
//!
//! ### Computation order
//!
//! mean → standard deviation (reusing the mean) → median → single mode →
//! modal-set info → modal set. Each step consumes the sorted view and the
//! outputs of earlier steps only.
//!
//! ## Invariants
//!
//! * A returned `Summary` is internally consistent: its modal fields all come
//!   from the same sorted view of the same series.
//!
//! ## Non-goals
//!
//! * This module does not read input or render output; see the shell.
//!
//! ## Visibility
//!
//! [`SummaryExecutor`] is public for direct use, but the builder in the API
//! layer is the primary interface.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::engine::output::Summary;
use crate::engine::validator::Validator;
use crate::math::{median, mode, moments};
use crate::primitives::errors::StatsError;
use crate::primitives::sorting::sort_ascending;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one description pass.
#[derive(Debug, Clone, Copy)]
pub struct SummaryConfig {
    /// Treat the input as already sorted ascending (verified, not trusted).
    pub assume_sorted: bool,

    /// Collect the modal value list into the result.
    pub include_modes: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            assume_sorted: false,
            include_modes: true,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified execution engine for descriptive statistics.
pub struct SummaryExecutor;

impl SummaryExecutor {
    /// Describe a series under the given configuration.
    pub fn run_with_config<T: Float>(
        series: &[T],
        config: SummaryConfig,
    ) -> Result<Summary<T>, StatsError> {
        Validator::validate_series(series)?;

        // Establish sorted order without mutating the caller's slice.
        let owned: Vec<T>;
        let sorted: &[T] = if config.assume_sorted {
            Validator::validate_sorted(series)?;
            series
        } else {
            owned = sort_ascending(series);
            &owned
        };

        let mean = moments::mean(sorted);
        let std_dev = moments::standard_deviation(sorted, mean);
        let median = median::median(sorted);
        let mode = mode::mode_single(sorted);
        let (mode_count, mode_repeat_count) = mode::mode_set_info(sorted);

        let modes = if config.include_modes {
            Some(mode::mode_set(sorted, mode_repeat_count))
        } else {
            None
        };

        Ok(Summary {
            len: series.len(),
            mean,
            std_dev,
            median,
            mode,
            mode_count,
            mode_repeat_count,
            modes,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_unsorted_input_by_sorting_a_copy() {
        let series = [56.5, 27.9, 32.4, 59.23, 44.87, 41.0, 39.7, 49.98];
        let summary = SummaryExecutor::run_with_config(&series, SummaryConfig::default()).unwrap();

        assert_eq!(summary.len, 8);
        assert!((summary.mean - 43.9475).abs() < 1e-9);
        assert!((summary.median - 42.935).abs() < 1e-12);
        assert_eq!(summary.mode_count, 8);
        assert_eq!(summary.mode_repeat_count, 1);
        assert!(!summary.has_repeats());
        // Input order is untouched.
        assert_eq!(series[0], 56.5);
    }

    #[test]
    fn assume_sorted_verifies_the_claim() {
        let unsorted = [3.0, 1.0, 2.0];
        let config = SummaryConfig {
            assume_sorted: true,
            ..SummaryConfig::default()
        };
        assert_eq!(
            SummaryExecutor::run_with_config(&unsorted, config),
            Err(StatsError::UnsortedInput { index: 1 })
        );
    }

    #[test]
    fn assume_sorted_accepts_sorted_input() {
        let sorted = [1.0, 1.0, 2.0, 3.0, 3.0, 5.0];
        let config = SummaryConfig {
            assume_sorted: true,
            ..SummaryConfig::default()
        };
        let summary = SummaryExecutor::run_with_config(&sorted, config).unwrap();
        assert_eq!(summary.mode, 1.0);
        assert_eq!(summary.mode_count, 2);
        assert_eq!(summary.mode_repeat_count, 2);
        assert_eq!(summary.modes.as_deref(), Some([1.0, 3.0].as_slice()));
    }

    #[test]
    fn modal_set_collection_can_be_skipped() {
        let config = SummaryConfig {
            include_modes: false,
            ..SummaryConfig::default()
        };
        let summary = SummaryExecutor::run_with_config(&[1.0, 1.0, 2.0], config).unwrap();
        assert_eq!(summary.modes, None);
        assert_eq!(summary.mode_repeat_count, 2);
    }

    #[test]
    fn empty_series_fails_fast() {
        assert_eq!(
            SummaryExecutor::run_with_config::<f64>(&[], SummaryConfig::default()),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn single_element_series() {
        let summary =
            SummaryExecutor::run_with_config(&[7.0], SummaryConfig::default()).unwrap();
        assert_eq!(summary.mean, 7.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!((summary.mode_count, summary.mode_repeat_count), (1, 1));
    }
}
