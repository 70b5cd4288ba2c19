//! Data sources for the interactive shell.
//!
//! ## Purpose
//!
//! This module defines where a series comes from: the fixed textbook dataset,
//! values entered by hand, or pseudo-random generation.
//!
//! ## Design notes
//!
//! * The random source draws from an injected `Rng` rather than seeding a
//!   global generator, so runs are reproducible under a fixed seed.
//! * Random values are uniform in [0, 100] and rounded to the nearest
//!   integer.
//!
//! ## Visibility
//!
//! Public within the `cli` feature; the shell and the binary both consume it.

use clap::ValueEnum;
use rand::Rng;

// ============================================================================
// Data Sources
// ============================================================================

/// The numeric series given in the textbook.
pub const TEXTBOOK_SERIES: [f64; 8] = [56.5, 27.9, 32.4, 59.23, 44.87, 41.0, 39.7, 49.98];

/// Where the series to describe comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataSource {
    /// The fixed textbook dataset.
    Predefined,

    /// Values entered by hand.
    Manual,

    /// Pseudo-randomly generated values.
    Random,
}

impl DataSource {
    /// Map a menu choice (1-based) to a data source.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Predefined),
            2 => Some(Self::Manual),
            3 => Some(Self::Random),
            _ => None,
        }
    }
}

/// Generate `length` pseudo-random values, uniform in [0, 100] and rounded
/// to the nearest integer.
pub fn random_series<G: Rng>(rng: &mut G, length: usize) -> Vec<f64> {
    (0..length)
        .map(|_| rng.gen_range(0.0..=100.0f64).round())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
