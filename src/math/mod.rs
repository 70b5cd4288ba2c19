//! Layer 2: Math
//!
//! The statistics kernels.
//!
//! This layer contains the pure computational core of the crate: moments,
//! median, and mode detection. Every function is a single-pass (or
//! constant-time) pure computation over an immutable slice, generic over
//! `Float`, with no validation inside — preconditions are caller contracts,
//! enforced one layer up by the engine validator.
//!
//! # Module Organization
//!
//! - **moments**: Arithmetic mean and population standard deviation
//! - **median**: Median of a sorted series
//! - **mode**: Run counting and mode detection over a sorted series
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Shell (feature "cli")
//!   ↓
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, validator, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, runs, sorting)
//! ```

/// Moment-based measures.
///
/// Provides:
/// - Arithmetic mean
/// - Population standard deviation around a precomputed mean
pub mod moments;

/// Median computation.
///
/// Provides:
/// - Constant-time median over a sorted slice
pub mod median;

/// Mode detection.
///
/// Provides:
/// - Forward run counting (`run_length`)
/// - Single mode with first-wins tie handling
/// - Modal-set size/frequency and the modal set itself
pub mod mode;
