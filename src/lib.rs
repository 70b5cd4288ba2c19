//! Elementary descriptive statistics for numeric series.
//!
//! ## Purpose
//!
//! This crate computes the elementary descriptive measures of a numeric
//! series: arithmetic mean, population standard deviation, median, single
//! mode, and the multi-modal set. The interesting part is mode detection
//! over a sorted series — run counting, tie handling, and the degenerate
//! all-unique case.
//!
//! ## Design notes
//!
//! * All statistics are pure, stateless functions over an immutable slice,
//!   generic over `num_traits::Float` to support f32 and f64.
//! * The raw kernels in the math layer trust their documented contracts; the
//!   engine and API layers validate those contracts and fail fast with a
//!   [`StatsError`] instead of propagating corrupted results.
//! * Supports both `std` and `no_std` (with `alloc`) environments. The
//!   interactive console shell lives behind the `cli` feature.
//!
//! ## Key concepts
//!
//! ### Runs
//!
//! A run is a maximal block of consecutive equal values in a sorted series.
//! Runs partition the series exactly, and every mode operation is a fold
//! over the lazy [`Runs`] iterator.
//!
//! ### Tie handling
//!
//! Among equally frequent values the single mode is the first-encountered
//! (smallest) one; only a strictly greater repeat count replaces it.
//!
//! ## Quick start
//!
//! ```
//! let summary = descriptive::describe(&[1.0, 1.0, 2.0, 3.0, 3.0, 5.0]).unwrap();
//!
//! assert_eq!(summary.median, 2.5);
//! assert_eq!(summary.mode, 1.0);
//! assert_eq!(summary.modes.as_deref(), Some([1.0, 3.0].as_slice()));
//! ```
//!
//! The raw kernels are available directly when the caller upholds the
//! contracts itself:
//!
//! ```
//! use descriptive::{mean, median, mode_set_info, standard_deviation};
//!
//! let sorted = [27.9, 32.4, 39.7, 41.0, 44.87, 49.98, 56.5, 59.23];
//! let m = mean(&sorted);
//!
//! assert!(standard_deviation(&sorted, m) > 0.0);
//! assert_eq!(median(&sorted), (41.0 + 44.87) / 2.0);
//! assert_eq!(mode_set_info(&sorted), (8, 1)); // all values distinct
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod api;
pub mod engine;
pub mod math;
pub mod primitives;

#[cfg(feature = "cli")]
pub mod shell;

// Primary public surface, re-exported at the root.
pub use api::{checked_mode_set, describe, Descriptive, DescriptiveBuilder, Result};
pub use engine::output::Summary;
pub use engine::summary::{SummaryConfig, SummaryExecutor};
pub use math::median::median;
pub use math::mode::{mode_set, mode_set_info, mode_single, run_length};
pub use math::moments::{mean, standard_deviation};
pub use primitives::errors::StatsError;
pub use primitives::runs::{Run, Runs};
