//! Input validation for descriptive-statistics operations.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied at the API boundary.
//! It ensures that a series meets the preconditions of the math kernels
//! before any computation begins, with clear error payloads when validation
//! fails.
//!
//! ## Design notes
//!
//! * All validation is performed upfront before computation begins.
//! * Validation is fail-fast: returns on first error encountered.
//! * Error payloads include specific values and positions for debugging.
//! * Validation is generic over `Float` types to support f32 and f64.
//! * Checks are ordered from cheap to expensive.
//!
//! ## Validated preconditions
//!
//! * **Series**: Non-empty, all values finite
//! * **Sortedness**: Ascending order on `assume_sorted` paths
//! * **Mode query**: Supplied repeat count matches the series
//! * **Builder**: No parameter configured twice
//!
//! ## Key concepts
//!
//! ### Fail-Fast Validation
//!
//! Validation stops at the first violation, returning immediately with a
//! descriptive [`StatsError`]. Precondition violations are not recoverable
//! runtime states; they must never propagate corrupted results silently.
//!
//! ### Finite Value Checks
//!
//! All values must be finite (not NaN or infinity). Comparisons against NaN
//! are order-less, so a single NaN would make sortedness checks and run
//! scanning meaningless.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A series accepted by `validate_series` + `validate_sorted` satisfies
//!   every math-kernel contract except the mode-query pairing.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or repair input data.
//! * This module does not perform the statistics computation itself.
//!
//! ## Visibility
//!
//! This module is an internal implementation detail used by the engine and
//! the checked API entries. It is not part of the public API and may change
//! without notice.

#[cfg(not(feature = "std"))]
use alloc::format;

use num_traits::Float;

use crate::math::mode::mode_set_info;
use crate::primitives::errors::StatsError;
use crate::primitives::sorting::first_disorder;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for input series and queries.
///
/// Provides static methods returning `Result<(), StatsError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a series for any statistic: non-empty, all values finite.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), StatsError> {
        // Check 1: Non-empty series
        if series.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &value) in series.iter().enumerate() {
            if !value.is_finite() {
                return Err(StatsError::InvalidNumericValue(format!(
                    "series[{}]={}",
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that a series claimed sorted really is ascending.
    pub fn validate_sorted<T: Float>(series: &[T]) -> Result<(), StatsError> {
        match first_disorder(series) {
            Some(index) => Err(StatsError::UnsortedInput { index }),
            None => Ok(()),
        }
    }

    /// Validate that a mode-set query's repeat count was produced by
    /// `mode_set_info` on the same series.
    pub fn validate_mode_query<T: Float>(
        sorted: &[T],
        repeat_count: usize,
    ) -> Result<(), StatsError> {
        let (_, expected) = mode_set_info(sorted);
        if repeat_count != expected {
            return Err(StatsError::MismatchedModeQuery {
                got: repeat_count,
                expected,
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), StatsError> {
        if let Some(parameter) = duplicate_param {
            return Err(StatsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
