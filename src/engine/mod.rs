//! Layer 3: Engine
//!
//! Core execution logic for describing a series.
//!
//! This layer orchestrates one description pass by coordinating between
//! primitives (errors, sorting) and the math kernels. It owns validation and
//! the packaging of results.
//!
//! # Module Organization
//!
//! - **summary**: Unified execution engine for one description pass
//! - **validator**: Input and configuration validation rules
//! - **output**: Structured results (`Summary` and its `Display`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Shell (feature "cli")
//!   ↓
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (moments, median, mode)
//!   ↓
//! Layer 1: Primitives (errors, runs, sorting)
//! ```

/// Unified execution engine.
///
/// Provides:
/// - High-level orchestration of one description pass
/// - Sort-or-verify handling of input order
pub mod summary;

/// Validation utilities.
///
/// Provides:
/// - Checks for data consistency (emptiness, NaNs, order)
/// - Mode-query pairing validation
/// - Builder duplicate-parameter validation
pub mod validator;

/// Output types.
///
/// Provides:
/// - The `Summary` container struct
/// - Human-readable labeled rendering
pub mod output;
