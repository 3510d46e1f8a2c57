//! Explicit (forward) Euler.

use super::sample_count;
use crate::error::Result;
use crate::table::TabulatedFunction;

/// Forward Euler: `y_n = y_{n-1} + step · f(x_{n-1}, y_{n-1})`.
pub fn forward_euler<F>(f: F, x0: f64, y0: f64, to: f64, step: f64) -> Result<TabulatedFunction>
where
    F: Fn(f64, f64) -> f64,
{
    let count = sample_count(x0, to, step)?;
    let mut values = TabulatedFunction::with_capacity(count);

    let mut x = x0;
    let mut y = y0;
    values.add_value_pair(x, y);

    for n in 1..count {
        y += step * f(x, y);
        x = x0 + n as f64 * step;
        values.add_value_pair(x, y);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_slope_is_exact() {
        let values = forward_euler(|_, _| 2.0, 0.0, 1.0, 1.0, 0.1).unwrap();
        assert_eq!(values.len(), 10);
        assert_relative_eq!(values.xs()[0], 0.0);
        assert_relative_eq!(values.ys()[0], 1.0);
        for (x, y) in values.iter() {
            assert_relative_eq!(y, 1.0 + 2.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_exponential_growth_underestimates() {
        // y' = y, y(0) = 1: Euler gives (1 + h)^n < e^{nh}
        let values = forward_euler(|_, y| y, 0.0, 1.0, 1.0, 0.01).unwrap();
        let (x, y) = values.iter().last().unwrap();
        assert!(y < x.exp());
        assert_relative_eq!(y, x.exp(), epsilon = 1e-2);
    }

    #[test]
    fn test_nonzero_start() {
        let values = forward_euler(|x, _| x, 1.0, 0.0, 2.0, 0.5).unwrap();
        assert_eq!(values.xs(), &[1.0, 1.5]);
        assert_relative_eq!(values.ys()[1], 0.5);
    }
}
