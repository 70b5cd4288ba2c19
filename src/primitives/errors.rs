//! Shared error types for descriptive-statistics operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`StatsError`] enum returned by every
//! fallible entry point of the crate. Each variant corresponds to one
//! precondition of the statistics kernels, so a violation is reported at the
//! API boundary instead of propagating a corrupted result silently.
//!
//! ## Design notes
//!
//! * Variants carry the offending values (index, count, formatted value) so
//!   error messages are actionable without a debugger.
//! * `Display` is implemented manually to stay usable in `no_std` builds.
//! * `std::error::Error` is implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself; see the engine validator.
//!
//! ## Visibility
//!
//! [`StatsError`] is part of the public API and re-exported from the crate
//! root.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Unified error type for descriptive-statistics operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The input series contained no values.
    EmptyInput,

    /// A sorted-input path received an unsorted series; `index` is the first
    /// element that breaks ascending order.
    UnsortedInput {
        /// Index of the first out-of-order element.
        index: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input series.
    /// The message carries the position and the value.
    InvalidNumericValue(String),

    /// A mode-set query was made with a repeat count that was not produced by
    /// `mode_set_info` on the same series.
    MismatchedModeQuery {
        /// The repeat count supplied by the caller.
        got: usize,
        /// The repeat count the series actually yields.
        expected: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input series is empty"),
            Self::UnsortedInput { index } => {
                write!(f, "input series is not sorted ascending at index {index}")
            }
            Self::InvalidNumericValue(value) => {
                write!(f, "input series contains a non-finite value: {value}")
            }
            Self::MismatchedModeQuery { got, expected } => write!(
                f,
                "mode-set query used repeat count {got}, but the series yields {expected}"
            ),
            Self::DuplicateParameter { parameter } => {
                write!(f, "parameter `{parameter}` was set more than once")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}
