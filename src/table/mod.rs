//! Tabulated functions and the lookup-table text format.
//!
//! A [`TabulatedFunction`] is a pair of equal-length sequences `xs` and `ys`
//! with `xs` non-decreasing. Solvers grow them one sample at a time; the
//! interpolators read them from two-column text files:
//!
//! ```text
//! # temperature   conductivity
//! 4000            0.031
//! 5000            0.27
//! ```

mod loader;

pub use loader::{parse, parse_file};

use std::fmt;

use crate::error::{NumlabError, Result};

/// Ordered `(x, y)` samples of a scalar function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabulatedFunction {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TabulatedFunction {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample. The caller keeps `x` non-decreasing.
    pub fn add_value_pair(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterate over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Sample at or just above `x`.
    ///
    /// Binary search for the smallest index whose abscissa is `>= x`. Queries
    /// past the last abscissa return the last sample. No interpolation is
    /// performed; this is meant for plotting and coarse sampling.
    pub fn get_y(&self, x: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let index = self.xs.partition_point(|&value| value < x);
        Some(self.ys[index.min(self.len() - 1)])
    }

    /// Element-wise product of the `ys`, keeping `self`'s abscissae.
    pub fn multiply_by(&self, other: &TabulatedFunction) -> Result<TabulatedFunction> {
        if self.len() != other.len() {
            return Err(NumlabError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(TabulatedFunction {
            xs: self.xs.clone(),
            ys: self.ys.iter().zip(&other.ys).map(|(a, b)| a * b).collect(),
        })
    }

    /// Check that abscissae are strictly increasing.
    ///
    /// Returns the first offending index on failure.
    pub(crate) fn first_unsorted_index(&self) -> Option<usize> {
        self.xs.windows(2).position(|w| w[1] <= w[0]).map(|i| i + 1)
    }
}

impl FromIterator<(f64, f64)> for TabulatedFunction {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut table = TabulatedFunction::new();
        for (x, y) in iter {
            table.add_value_pair(x, y);
        }
        table
    }
}

impl fmt::Display for TabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, y) in self.iter() {
            writeln!(f, "| {:>11.6} | {:>11.6} |", x, y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn squares() -> TabulatedFunction {
        (0..5).map(|i| (i as f64, (i * i) as f64)).collect()
    }

    #[test]
    fn test_add_keeps_lengths_equal() {
        let mut table = TabulatedFunction::new();
        assert!(table.is_empty());
        table.add_value_pair(0.0, 1.0);
        table.add_value_pair(0.5, 2.0);
        assert_eq!(table.xs().len(), table.ys().len());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_y_lower_bound() {
        let table = squares();
        // Exact hit
        assert_eq!(table.get_y(2.0), Some(4.0));
        // Between samples: next sample above
        assert_eq!(table.get_y(2.1), Some(9.0));
        // Before the first sample
        assert_eq!(table.get_y(-3.0), Some(0.0));
        // Past the end clamps to the last sample
        assert_eq!(table.get_y(10.0), Some(16.0));
        assert_eq!(TabulatedFunction::new().get_y(1.0), None);
    }

    #[test]
    fn test_multiply_by() {
        let table = squares();
        let product = table.multiply_by(&table).unwrap();
        assert_eq!(product.xs(), table.xs());
        assert_relative_eq!(product.ys()[3], 81.0);
    }

    #[test]
    fn test_multiply_by_length_mismatch() {
        let short: TabulatedFunction = [(0.0, 1.0)].into_iter().collect();
        let err = squares().multiply_by(&short).unwrap_err();
        assert!(matches!(err, NumlabError::LengthMismatch { left: 5, right: 1 }));
    }

    #[test]
    fn test_first_unsorted_index() {
        assert_eq!(squares().first_unsorted_index(), None);
        let table: TabulatedFunction = [(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)].into_iter().collect();
        assert_eq!(table.first_unsorted_index(), Some(2));
    }
}
