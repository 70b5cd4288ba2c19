//! Mode detection over a sorted series.
//!
//! ## Purpose
//!
//! This module finds the most frequently occurring value(s) of a sorted
//! series: the single mode, the size and frequency of the modal set, and the
//! modal set itself.
//!
//! ## Design notes
//!
//! * All three mode operations are folds over the shared [`Runs`] iterator,
//!   which advances in run-sized strides: an O(n) single pass, not O(n²),
//!   since each run is visited exactly once.
//! * [`run_length`] is the public index-based building block for callers who
//!   scan runs by hand.
//! * Sortedness is a caller contract, not enforced here.
//!
//! ## Key concepts
//!
//! ### Tie handling
//!
//! `mode_single` keeps the first-encountered run on ties: only a strictly
//! greater repeat count replaces the current best, so among equally frequent
//! values the smallest one wins. This rule is deliberate and must not be
//! changed to last-value-wins.
//!
//! ### Degenerate modes
//!
//! When every run has length 1 the modal set equals the distinct-value set
//! and `mode_set_info` reports `mode_count` equal to the series length.
//! Callers use that signal to report "no repeated values" instead of a
//! meaningless mode.
//!
//! ## Invariants
//!
//! * `mode_set_info` followed by `mode_set` returns exactly `mode_count`
//!   values, each occurring exactly `mode_repeat_count` times in the series.
//! * `mode_set` output is ascending (series order).
//!
//! ## Non-goals
//!
//! * This module does not validate the pairing between a series and a repeat
//!   count; the checked API entry performs that.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::Float;

use crate::primitives::runs::Runs;

// ============================================================================
// Run Counting
// ============================================================================

/// Count consecutive equal elements starting at `start_index`, scanning
/// forward while values match.
///
/// # Contract
///
/// `start_index` must be in bounds.
pub fn run_length<T: Float>(sorted: &[T], start_index: usize) -> usize {
    let value = sorted[start_index];
    sorted[start_index..]
        .iter()
        .take_while(|&&x| x == value)
        .count()
}

// ============================================================================
// Mode Detection
// ============================================================================

/// Find the single mode of a series sorted ascending.
///
/// On ties the first-encountered (smallest) value wins. For an all-unique
/// series the result degenerates to the first element; callers should treat
/// it as meaningless when `mode_set_info` reports no repeats. An empty series
/// yields zero (out of contract).
pub fn mode_single<T: Float>(sorted: &[T]) -> T {
    let mut mode = T::zero();
    let mut mode_repeat_count = 0;

    for run in Runs::new(sorted) {
        // Ties keep the earlier value: only strict `>` replaces.
        if run.len > mode_repeat_count {
            mode = run.value;
            mode_repeat_count = run.len;
        }
    }

    mode
}

/// Report the size of the modal set and the maximum repeat count.
///
/// Returns `(mode_count, mode_repeat_count)`: how many runs are tied at the
/// maximum length, and that maximum length itself. For an all-unique series
/// `mode_count` equals the series length, the caller's signal that no value
/// repeats.
pub fn mode_set_info<T: Float>(sorted: &[T]) -> (usize, usize) {
    let mut mode_count = 0;
    let mut mode_repeat_count = 0;

    for run in Runs::new(sorted) {
        if run.len == mode_repeat_count {
            mode_count += 1;
        }

        if run.len > mode_repeat_count {
            mode_count = 1;
            mode_repeat_count = run.len;
        }
    }

    (mode_count, mode_repeat_count)
}

/// Collect the value of every run whose length equals `mode_repeat_count`,
/// in ascending order.
///
/// # Contract
///
/// `mode_repeat_count` must come from [`mode_set_info`] on the same series;
/// a mismatched count yields an empty or inconsistent result. The checked
/// API entry validates the pairing.
pub fn mode_set<T: Float>(sorted: &[T], mode_repeat_count: usize) -> Vec<T> {
    Runs::new(sorted)
        .filter(|run| run.len == mode_repeat_count)
        .map(|run| run.value)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
