//! Second-order predictor-corrector.
//!
//! An explicit Euler pass produces a predictor sequence `e_n`. The corrected
//! sequence then evaluates the slope at the interval midpoint:
//!
//! ```text
//! e_n = e_{n-1} + h · f(x_{n-1}, e_{n-1})
//! y_n = y_{n-1} + h · f(x_{n-1} + h/2, y_{n-1} + e_n/2)
//! ```
//!
//! Note the corrector shifts `y` by half the predictor value itself, not by
//! half a predicted increment.

use super::sample_count;
use crate::error::Result;
use crate::table::TabulatedFunction;

/// Midpoint predictor-corrector driven by an Euler predictor pass.
pub fn runge_kutta2<F>(f: F, x0: f64, y0: f64, to: f64, step: f64) -> Result<TabulatedFunction>
where
    F: Fn(f64, f64) -> f64,
{
    let count = sample_count(x0, to, step)?;

    let mut predictor = Vec::with_capacity(count);
    predictor.push(y0);
    for n in 1..count {
        let x_prev = x0 + (n - 1) as f64 * step;
        let e_prev = predictor[n - 1];
        predictor.push(e_prev + step * f(x_prev, e_prev));
    }

    let mut values = TabulatedFunction::with_capacity(count);
    let mut y = y0;
    values.add_value_pair(x0, y);

    for (n, e) in predictor.iter().enumerate().skip(1) {
        let x_prev = x0 + (n - 1) as f64 * step;
        y += step * f(x_prev + step / 2.0, y + e / 2.0);
        values.add_value_pair(x0 + n as f64 * step, y);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_x_only_slope_is_midpoint_rule() {
        // f independent of y: the corrector is the midpoint quadrature of x².
        let values = runge_kutta2(|x, _| x * x, 0.0, 0.0, 1.0, 0.01).unwrap();
        let (x, y) = values.iter().last().unwrap();
        assert_relative_eq!(y, x.powi(3) / 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_grid() {
        let values = runge_kutta2(|_, _| 0.0, 0.0, 3.0, 1.0, 0.25).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values.xs(), &[0.0, 0.25, 0.5, 0.75]);
        assert!(values.ys().iter().all(|&y| y == 3.0));
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(runge_kutta2(|_, _| 0.0, 0.0, 0.0, 1.0, 0.0).is_err());
    }
}
