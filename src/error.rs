//! Error types for the numlab toolkit.
//!
//! This module provides a unified error type [`NumlabError`] that covers
//! lookup-table loading, precondition violations of the numerical engines,
//! and numerical breakdown during simulation.

use thiserror::Error;

/// Upper bound on the samples a single solver run or sweep may record.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Result type alias using [`NumlabError`].
pub type Result<T> = std::result::Result<T, NumlabError>;

/// Unified error type for all numlab operations.
#[derive(Error, Debug)]
pub enum NumlabError {
    // ============ I/O Errors ============
    /// Malformed line in a lookup table
    #[error("Malformed table '{source_name}' at line {line}: {message}")]
    TableParse {
        source_name: String,
        line: usize,
        message: String,
    },

    /// Error reading a table file
    #[error("Failed to read table file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing result tables
    #[error("Output error: {message}")]
    Output { message: String },

    // ============ Precondition Violations ============
    /// Integration step is not a positive finite number
    #[error("Invalid step {step}: must be positive and finite")]
    InvalidStep { step: f64 },

    /// Integration range produces no samples
    #[error("Empty range: [{from}, {to}) with step {step} yields no samples")]
    EmptyRange { from: f64, to: f64, step: f64 },

    /// Picard order must be at least one
    #[error("Invalid Picard order {order}: must be at least 1")]
    InvalidOrder { order: usize },

    /// Table holds no samples
    #[error("Table '{name}' is empty")]
    EmptyTable { name: String },

    /// Interpolation order needs more points than the table has
    #[error("Table '{name}' has {len} points, order {order} needs {}", .order + 1)]
    TableTooShort {
        name: String,
        len: usize,
        order: usize,
    },

    /// Table abscissae are not strictly increasing
    #[error("Table '{name}' is not strictly increasing at index {index}")]
    UnsortedTable { name: String, index: usize },

    /// Element-wise operation on tables of different length
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Simpson's rule needs an even number of intervals
    #[error("Simpson's rule needs an even step count >= 2, got {steps}")]
    OddStepCount { steps: usize },

    /// Range would produce more samples than a run may record
    #[error("Range [{from}, {to}] with step {step} needs {count:.3e} samples, limit is {max}")]
    TooManySamples {
        from: f64,
        to: f64,
        step: f64,
        count: f64,
        max: usize,
    },

    /// Invalid physical or simulation parameter
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    // ============ Numerical Errors ============
    /// Tube resistance could not be evaluated
    #[error("Tube resistance is not finite at amperage {amperage:.4e} (integral: {integral:.4e})")]
    NonFiniteResistance { amperage: f64, integral: f64 },

    /// State diverged during simulation
    #[error("Numerical overflow at t = {time:.4e} (i = {current:.4e}, u = {voltage:.4e})")]
    NumericalOverflow {
        time: f64,
        current: f64,
        voltage: f64,
    },
}

impl NumlabError {
    /// Create a table parse error
    pub fn table_parse(source_name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::TableParse {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Check that an integration step is usable
    pub fn check_step(step: f64) -> Result<()> {
        if step > 0.0 && step.is_finite() {
            Ok(())
        } else {
            Err(Self::InvalidStep { step })
        }
    }

    /// Convert a rounded sample count of `[from, to]` at `step` to `usize`.
    ///
    /// Fails with `EmptyRange` below one sample or for non-finite input,
    /// and with `TooManySamples` above [`MAX_SAMPLES`].
    pub fn check_sample_count(count: f64, from: f64, to: f64, step: f64) -> Result<usize> {
        if !from.is_finite() || !to.is_finite() || !count.is_finite() || count < 1.0 {
            return Err(Self::EmptyRange { from, to, step });
        }
        if count > MAX_SAMPLES as f64 {
            return Err(Self::TooManySamples {
                from,
                to,
                step,
                count,
                max: MAX_SAMPLES,
            });
        }
        Ok(count as usize)
    }
}
