//! Output types for descriptive-statistics operations.
//!
//! ## Purpose
//!
//! This module defines the [`Summary`] struct which encapsulates all outputs
//! of one description pass: the four measures, the modal-set metadata, and
//! optionally the modal set itself.
//!
//! ## Design notes
//!
//! * The modal value list uses `Option<Vec<T>>` so callers who only need the
//!   scalars pay no allocation.
//! * Results are generic over `Float` types to support f32 and f64.
//! * Provides convenience methods for the degenerate no-repeats case.
//! * Implements `Display` for human-readable labeled output.
//!
//! ## Available outputs
//!
//! * **Measures**: mean, population standard deviation, median, single mode
//! * **Modal metadata**: modal-set size, maximum repeat count
//! * **Modal set**: every value tied at the maximum repeat count, ascending
//!
//! ## Key concepts
//!
//! ### Degenerate modes
//!
//! When `mode_count` equals the series length every value occurs exactly
//! once; the single mode is then the first element and carries no
//! information. `Display` prints a "no repeated values" line instead of the
//! mode rows in that case.
//!
//! ## Invariants
//!
//! * `mode_count >= 1` and `mode_repeat_count >= 1` for any in-contract
//!   series.
//! * When populated, `modes` holds exactly `mode_count` ascending values.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//!
//! ## Visibility
//!
//! [`Summary`] is part of the public API and is the primary result type
//! returned by the engine and the builder.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Descriptive statistics of one numeric series.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    /// Number of values in the series.
    pub len: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Population standard deviation.
    pub std_dev: T,

    /// Median of the sorted series.
    pub median: T,

    /// Single mode; first-encountered (smallest) value on ties. Meaningless
    /// when [`Summary::has_repeats`] is false.
    pub mode: T,

    /// Number of values tied at the maximum repeat count.
    pub mode_count: usize,

    /// The maximum repeat count itself.
    pub mode_repeat_count: usize,

    /// The modal set, ascending. `None` when the engine was configured to
    /// skip collecting it.
    pub modes: Option<Vec<T>>,
}

impl<T: Float> Summary<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check whether any value occurs more than once.
    ///
    /// When false, every value is distinct and the mode fields are the
    /// degenerate whole-series case.
    pub fn has_repeats(&self) -> bool {
        self.mode_count != self.len
    }

    /// Check whether several values share the maximum repeat count.
    pub fn is_multimodal(&self) -> bool {
        self.has_repeats() && self.mode_count > 1
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + core::fmt::Display> core::fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len)?;
        writeln!(f, "  Mean: {:.4}", self.mean)?;
        writeln!(f, "  Standard deviation: {:.4}", self.std_dev)?;
        writeln!(f, "  Median: {:.4}", self.median)?;

        if !self.has_repeats() {
            writeln!(f, "  Every value occurs exactly once")?;
            return Ok(());
        }

        writeln!(f, "  Mode: {}", self.mode)?;

        if let Some(modes) = &self.modes {
            write!(
                f,
                "  Modes ({} values, {} repeats):",
                self.mode_count, self.mode_repeat_count
            )?;
            for value in modes {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary<f64> {
        Summary {
            len: 6,
            mean: 2.5,
            std_dev: 1.3844,
            median: 2.5,
            mode: 1.0,
            mode_count: 2,
            mode_repeat_count: 2,
            modes: Some(vec![1.0, 3.0]),
        }
    }

    #[test]
    fn repeats_and_multimodality_queries() {
        let summary = sample();
        assert!(summary.has_repeats());
        assert!(summary.is_multimodal());

        let unique = Summary {
            len: 3,
            mode_count: 3,
            mode_repeat_count: 1,
            ..sample()
        };
        assert!(!unique.has_repeats());
        assert!(!unique.is_multimodal());
    }

    #[test]
    fn display_lists_modes_for_multimodal_series() {
        let rendered = sample().to_string();
        assert!(rendered.contains("Mean: 2.5000"));
        assert!(rendered.contains("Mode: 1"));
        assert!(rendered.contains("Modes (2 values, 2 repeats): 1 3"));
    }

    #[test]
    fn display_reports_all_unique_series() {
        let unique = Summary {
            len: 6,
            mode_count: 6,
            mode_repeat_count: 1,
            ..sample()
        };
        let rendered = unique.to_string();
        assert!(rendered.contains("Every value occurs exactly once"));
        assert!(!rendered.contains("Modes ("));
    }
}
