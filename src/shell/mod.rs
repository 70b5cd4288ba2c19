//! Layer 5: Shell
//!
//! Interactive console front-end (feature `cli`).
//!
//! This layer wraps the core in the original program's console flow: greet,
//! choose a data source, acquire the series, print it, describe it, say
//! goodbye. It contains no statistics logic of its own.
//!
//! # Module Organization
//!
//! - **source**: Data-source selection, textbook dataset, random generation
//!
//! # Design notes
//!
//! * The shell runs over injected `BufRead`/`Write` ports and an injected
//!   `Rng`, so it is unit-testable with in-memory buffers and a fixed seed.
//! * A series the user just typed is not echoed back.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Shell ← You are here
//!   ↓
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, validator, output)
//!   ↓
//! Layer 2: Math (moments, median, mode)
//!   ↓
//! Layer 1: Primitives (errors, runs, sorting)
//! ```

/// Data sources.
///
/// Provides:
/// - The three-way source choice
/// - The textbook dataset
/// - Seedable random generation
pub mod source;

use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::api;
use crate::primitives::errors::StatsError;
use source::{random_series, DataSource, TEXTBOOK_SERIES};

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading from or writing to a console port failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A typed token could not be parsed as a number.
    #[error("`{0}` is not a number")]
    Parse(String),

    /// The menu answer was not one of the offered choices.
    #[error("`{0}` is not a valid menu choice")]
    InvalidChoice(String),

    /// The input stream ended before the series was complete.
    #[error("input ended before the series was complete")]
    UnexpectedEof,

    /// The core rejected the acquired series.
    #[error(transparent)]
    Stats(#[from] StatsError),
}

// ============================================================================
// Shell
// ============================================================================

/// Interactive console shell over injected I/O ports and random source.
pub struct Shell<R, W, G> {
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    /// Create a shell over the given ports.
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self { input, output, rng }
    }

    /// Run the full interactive flow: menu, acquisition, description.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.print_greeting()?;
        let source = self.read_source_choice()?;
        self.run_from(source, None)
    }

    /// Run with a preselected source (and optionally length), skipping the
    /// menu. Used by the non-interactive command-line flags.
    pub fn run_with_source(
        &mut self,
        source: DataSource,
        length: Option<usize>,
    ) -> Result<(), ShellError> {
        self.print_greeting()?;
        self.run_from(source, length)
    }

    fn run_from(&mut self, source: DataSource, length: Option<usize>) -> Result<(), ShellError> {
        let series = self.acquire_series(source, length)?;
        debug!("acquired {} values from {:?}", series.len(), source);

        // A series the user just typed needs no echo.
        if source != DataSource::Manual {
            writeln!(self.output)?;
            writeln!(self.output, "Given {} numbers:", series.len())?;
            self.print_series(&series)?;
        }

        let summary = api::describe(&series)?;
        writeln!(self.output)?;
        write!(self.output, "{summary}")?;

        self.print_goodbye()?;
        Ok(())
    }

    // ========================================================================
    // Data Acquisition
    // ========================================================================

    fn acquire_series(
        &mut self,
        source: DataSource,
        length: Option<usize>,
    ) -> Result<Vec<f64>, ShellError> {
        match source {
            DataSource::Predefined => Ok(TEXTBOOK_SERIES.to_vec()),
            DataSource::Manual => {
                let length = match length {
                    Some(n) => n,
                    None => self.read_length()?,
                };
                writeln!(self.output, "Values:")?;
                self.read_values(length)
            }
            DataSource::Random => {
                let length = match length {
                    Some(n) => n,
                    None => self.read_length()?,
                };
                Ok(random_series(&mut self.rng, length))
            }
        }
    }

    fn read_source_choice(&mut self) -> Result<DataSource, ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Use the textbook dataset")?;
        writeln!(self.output, "2. Enter the values by hand")?;
        writeln!(self.output, "3. Generate random values")?;
        write!(self.output, "Selected option: ")?;
        self.output.flush()?;

        let line = self.read_line()?;
        let token = line.trim();
        token
            .parse::<u32>()
            .ok()
            .and_then(DataSource::from_menu_choice)
            .ok_or_else(|| ShellError::InvalidChoice(token.to_string()))
    }

    fn read_length(&mut self) -> Result<usize, ShellError> {
        writeln!(self.output)?;
        write!(self.output, "Series length: ")?;
        self.output.flush()?;

        let line = self.read_line()?;
        let token = line.trim();
        token
            .parse()
            .map_err(|_| ShellError::Parse(token.to_string()))
    }

    /// Read whitespace-separated numbers, across as many lines as needed,
    /// until `count` values are collected.
    fn read_values(&mut self, count: usize) -> Result<Vec<f64>, ShellError> {
        let mut values = Vec::with_capacity(count);

        while values.len() < count {
            let line = self.read_line()?;
            for token in line.split_whitespace() {
                if values.len() == count {
                    break;
                }
                let value: f64 = token
                    .parse()
                    .map_err(|_| ShellError::Parse(token.to_string()))?;
                values.push(value);
            }
        }

        Ok(values)
    }

    fn read_line(&mut self) -> Result<String, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::UnexpectedEof);
        }
        Ok(line)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn print_series(&mut self, series: &[f64]) -> Result<(), ShellError> {
        for value in series {
            write!(self.output, "{value} ")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_greeting(&mut self) -> Result<(), ShellError> {
        writeln!(
            self.output,
            "Elementary descriptive statistics for numeric series"
        )?;
        Ok(())
    }

    fn print_goodbye(&mut self) -> Result<(), ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn run_shell(input: &str) -> Result<String, ShellError> {
        let mut output = Vec::new();
        let mut shell = Shell::new(
            Cursor::new(input.as_bytes()),
            &mut output,
            StdRng::seed_from_u64(1),
        );
        let result = shell.run();
        drop(shell);
        result.map(|()| String::from_utf8(output).unwrap())
    }

    #[test]
    fn textbook_run_prints_summary() {
        let output = run_shell("1\n").unwrap();
        assert!(output.contains("Given 8 numbers:"));
        assert!(output.contains("Mean: 43.9475"));
        assert!(output.contains("Median: 42.9350"));
        assert!(output.contains("Every value occurs exactly once"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn manual_run_is_not_echoed_and_reports_modes() {
        let output = run_shell("2\n6\n1 1 2 3\n3 5\n").unwrap();
        assert!(!output.contains("Given 6 numbers:"));
        assert!(output.contains("Mode: 1"));
        assert!(output.contains("Modes (2 values, 2 repeats): 1 3"));
    }

    #[test]
    fn random_run_describes_generated_series() {
        let output = run_shell("3\n12\n").unwrap();
        assert!(output.contains("Given 12 numbers:"));
        assert!(output.contains("Data points: 12"));
    }

    #[test]
    fn invalid_menu_choice_is_an_error() {
        match run_shell("9\n") {
            Err(ShellError::InvalidChoice(token)) => assert_eq!(token, "9"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        match run_shell("2\n3\n1 two 3\n") {
            Err(ShellError::Parse(token)) => assert_eq!(token, "two"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn truncated_input_is_an_error() {
        match run_shell("2\n5\n1 2\n") {
            Err(ShellError::UnexpectedEof) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn zero_length_surfaces_the_core_error() {
        match run_shell("3\n0\n") {
            Err(ShellError::Stats(StatsError::EmptyInput)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
