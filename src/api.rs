//! High-level API for describing a numeric series.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a description pass, a one-call convenience
//! function with defaults, and the checked mode-set query.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated during `build()`, data during
//!   `describe()`; both fail fast with a [`StatsError`].
//! * **Type-Safe**: Description is generic over `Float` for flexible
//!   precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DescriptiveBuilder`] via `Descriptive::builder()`.
//! 2. Chain configuration methods (`.assume_sorted()`, `.skip_modes()`).
//! 3. Call `.build()` to obtain a validated [`Descriptive`] processor.
//! 4. Call `.describe(&series)` as often as needed; the processor is
//!    stateless between calls.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::result;
use num_traits::Float;

use crate::engine::summary::{SummaryConfig, SummaryExecutor};
use crate::engine::validator::Validator;
use crate::math::mode;

// Publicly re-exported types
pub use crate::engine::output::Summary;
pub use crate::primitives::errors::StatsError;

/// Result type alias for descriptive-statistics operations.
pub type Result<T> = result::Result<T, StatsError>;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a description pass.
#[derive(Debug, Clone, Default)]
pub struct DescriptiveBuilder {
    /// Treat input as already sorted ascending.
    pub assume_sorted: bool,

    /// Leave the modal value list out of the result.
    pub skip_modes: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl DescriptiveBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat the input series as already sorted ascending. The claim is
    /// verified at `describe()` time and rejected if false.
    pub fn assume_sorted(mut self) -> Self {
        if self.assume_sorted {
            self.duplicate_param = Some("assume_sorted");
        }
        self.assume_sorted = true;
        self
    }

    /// Skip collecting the modal value list; only the modal-set metadata is
    /// reported.
    pub fn skip_modes(mut self) -> Self {
        if self.skip_modes {
            self.duplicate_param = Some("skip_modes");
        }
        self.skip_modes = true;
        self
    }

    /// Build the processor.
    pub fn build(self) -> Result<Descriptive> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Descriptive {
            config: SummaryConfig {
                assume_sorted: self.assume_sorted,
                include_modes: !self.skip_modes,
            },
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured descriptive-statistics processor.
#[derive(Debug)]
pub struct Descriptive {
    config: SummaryConfig,
}

impl Descriptive {
    /// Start configuring a description pass.
    pub fn builder() -> DescriptiveBuilder {
        DescriptiveBuilder::new()
    }

    /// Describe a series, returning its [`Summary`].
    pub fn describe<T: Float>(&self, series: &[T]) -> Result<Summary<T>> {
        SummaryExecutor::run_with_config(series, self.config)
    }
}

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// Describe a series with default configuration.
///
/// # Examples
///
/// ```
/// let summary = descriptive::describe(&[1.0, 1.0, 2.0, 3.0, 3.0, 5.0]).unwrap();
/// assert_eq!(summary.mode, 1.0);
/// assert_eq!(summary.mode_count, 2);
/// assert_eq!(summary.mode_repeat_count, 2);
/// ```
pub fn describe<T: Float>(series: &[T]) -> Result<Summary<T>> {
    DescriptiveBuilder::new().build()?.describe(series)
}

/// Checked mode-set query over a sorted series.
///
/// Verifies the series and the pairing between it and `repeat_count` before
/// collecting, so a mismatched count surfaces as
/// [`StatsError::MismatchedModeQuery`] instead of a silently wrong result.
pub fn checked_mode_set<T: Float>(sorted: &[T], repeat_count: usize) -> Result<Vec<T>> {
    Validator::validate_series(sorted)?;
    Validator::validate_sorted(sorted)?;
    Validator::validate_mode_query(sorted, repeat_count)?;

    Ok(mode::mode_set(sorted, repeat_count))
}

// ============================================================================
// Tests
// ============================================================================
