//! Newton divided-difference interpolation with a sliding window.
//!
//! For a window `x_0 .. x_n` the interpolant is
//!
//! ```text
//! P(x) = f[x_0] + f[x_0,x_1](x - x_0) + ... + f[x_0..x_n](x - x_0)...(x - x_{n-1})
//! ```
//!
//! Queries outside the table domain extrapolate the edge window. Accuracy
//! degrades quickly there; callers that care should stay inside the table.

use std::ops::Range;

use crate::error::{NumlabError, Result};
use crate::table::TabulatedFunction;

/// Newton interpolator over a fixed source table.
#[derive(Debug, Clone)]
pub struct NewtonInterpolator {
    name: String,
    table: TabulatedFunction,
    order: usize,
}

impl NewtonInterpolator {
    /// Create an interpolator of the given polynomial degree.
    ///
    /// The table must be non-empty, strictly increasing in `x`, and hold at
    /// least `order + 1` points.
    pub fn new(name: impl Into<String>, table: TabulatedFunction, order: usize) -> Result<Self> {
        let name = name.into();

        if table.is_empty() {
            return Err(NumlabError::EmptyTable { name });
        }
        if order + 1 > table.len() {
            return Err(NumlabError::TableTooShort {
                name,
                len: table.len(),
                order,
            });
        }
        if let Some(index) = table.first_unsorted_index() {
            return Err(NumlabError::UnsortedTable { name, index });
        }

        Ok(Self { name, table, order })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degree of the local fit.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The source table.
    pub fn table(&self) -> &TabulatedFunction {
        &self.table
    }

    /// Whether `x` lies within the table's abscissa range.
    pub fn contains(&self, x: f64) -> bool {
        let xs = self.table.xs();
        x >= xs[0] && x <= xs[xs.len() - 1]
    }

    /// Interpolated value at `x`.
    pub fn interpolate(&self, x: f64) -> f64 {
        if !self.contains(x) {
            log::trace!("{}: extrapolating at {:.6e}", self.name, x);
        }

        let window = self.window(self.nearest_index(x));
        let xs = &self.table.xs()[window.clone()];
        let ys = &self.table.ys()[window];
        let coeffs = divided_differences(xs, ys);

        // Nested form: c0 + (x - x0)(c1 + (x - x1)(c2 + ...)).
        coeffs
            .iter()
            .zip(xs)
            .rev()
            .fold(0.0, |acc, (c, xk)| acc * (x - xk) + c)
    }

    /// Index of the abscissa closest to `x` (first one on ties).
    fn nearest_index(&self, x: f64) -> usize {
        let mut best = 0;
        let mut best_delta = f64::INFINITY;

        for (index, value) in self.table.xs().iter().enumerate() {
            let delta = (x - value).abs();
            if delta < best_delta {
                best_delta = delta;
                best = index;
            }
        }

        best
    }

    /// `order + 1` consecutive indices centered on `nearest`, clamped to the table.
    fn window(&self, nearest: usize) -> Range<usize> {
        let points = self.order + 1;
        let last_start = self.table.len() - points;
        let start = nearest.saturating_sub(points / 2).min(last_start);
        start..start + points
    }
}

/// Leading diagonal of the divided-difference table.
///
/// Returns `c` with `c[k] = f[x_0, ..., x_k]`. The table is built in one
/// buffer, one column per pass: pass `d` turns the order `d - 1` entries
/// into `f[x_{k-d}, ..., x_k]` for `k >= d`, walking `k` downward so each
/// update still reads the previous column at `k - 1`. Entries below `d`
/// are already final.
fn divided_differences(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let mut diagonal = ys.to_vec();

    for depth in 1..xs.len() {
        for k in (depth..xs.len()).rev() {
            let span = xs[k] - xs[k - depth];
            diagonal[k] = (diagonal[k] - diagonal[k - 1]) / span;
        }
    }

    diagonal
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn cubic_table() -> TabulatedFunction {
        // y = x³ - 2x
        (0..10)
            .map(|i| {
                let x = i as f64 * 0.5;
                (x, x * x * x - 2.0 * x)
            })
            .collect()
    }

    #[test]
    fn test_reproduces_control_points() {
        let table = cubic_table();
        for order in 0..table.len() {
            let inter = NewtonInterpolator::new("cubic", table.clone(), order).unwrap();
            for (x, y) in table.iter() {
                assert_abs_diff_eq!(inter.interpolate(x), y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_exact_for_low_degree_polynomials() {
        let inter = NewtonInterpolator::new("cubic", cubic_table(), 3).unwrap();
        for &x in &[0.1, 1.3, 2.75, 4.4] {
            assert_relative_eq!(inter.interpolate(x), x * x * x - 2.0 * x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_order_zero_is_nearest_neighbour() {
        let inter = NewtonInterpolator::new("cubic", cubic_table(), 0).unwrap();
        // nearest to 1.1 is 1.0
        assert_relative_eq!(inter.interpolate(1.1), -1.0);
    }

    #[test]
    fn test_window_stays_in_bounds() {
        let inter = NewtonInterpolator::new("cubic", cubic_table(), 4).unwrap();
        for nearest in 0..inter.table().len() {
            let window = inter.window(nearest);
            assert_eq!(window.len(), 5);
            assert!(window.end <= inter.table().len());
            assert!(window.contains(&nearest));
        }
    }

    #[test]
    fn test_divided_differences() {
        // f = x² through 0, 1, 2: f[x0]=0, f[x0,x1]=1, f[x0,x1,x2]=1
        let c = divided_differences(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]);
        assert_relative_eq!(c[0], 0.0);
        assert_relative_eq!(c[1], 1.0);
        assert_relative_eq!(c[2], 1.0);
    }

    #[test]
    fn test_divided_differences_uneven_grid() {
        // f = x³ on 1, 2, 4, 5; the top difference is the leading coefficient.
        let c = divided_differences(&[1.0, 2.0, 4.0, 5.0], &[1.0, 8.0, 64.0, 125.0]);
        assert_relative_eq!(c[0], 1.0);
        assert_relative_eq!(c[1], 7.0);
        assert_relative_eq!(c[2], 7.0);
        assert_relative_eq!(c[3], 1.0);
    }

    #[test]
    fn test_rejects_bad_tables() {
        let empty = NewtonInterpolator::new("e", TabulatedFunction::new(), 0);
        assert!(matches!(empty, Err(NumlabError::EmptyTable { .. })));

        let short = NewtonInterpolator::new("s", cubic_table(), 10);
        assert!(matches!(short, Err(NumlabError::TableTooShort { len: 10, order: 10, .. })));

        let dup: TabulatedFunction = [(0.0, 1.0), (0.0, 2.0)].into_iter().collect();
        let unsorted = NewtonInterpolator::new("d", dup, 1);
        assert!(matches!(unsorted, Err(NumlabError::UnsortedTable { index: 1, .. })));
    }
}
