//! Fixed-step solvers for scalar first-order ODEs `y' = f(x, y)`.
//!
//! - [`forward_euler`]: explicit Euler
//! - [`runge_kutta2`]: midpoint predictor-corrector driven by an Euler pass
//! - [`picard_solve`]: Picard successive approximations for `y' = y² + x², y(0) = 0`
//!
//! All solvers sample the grid `x_n = x0 + n·step` for
//! `n < floor((to - x0) / step)` and return the samples as a
//! [`TabulatedFunction`].

mod euler;
mod picard;
mod runge_kutta;

pub use euler::forward_euler;
pub use picard::{picard_polynomial, picard_solve};
pub use runge_kutta::runge_kutta2;

use crate::error::{NumlabError, Result};
use crate::table::TabulatedFunction;

/// Right-hand side of the test equation, `y' = y² + x²`.
pub fn picard_test_equation(x: f64, y: f64) -> f64 {
    y * y + x * x
}

/// Number of samples for a solver run, validating the range.
pub(crate) fn sample_count(x0: f64, to: f64, step: f64) -> Result<usize> {
    NumlabError::check_step(step)?;

    NumlabError::check_sample_count(((to - x0) / step).floor(), x0, to, step)
}

/// Configuration for the ODE comparison run.
#[derive(Debug, Clone)]
pub struct OdeConfig {
    /// Right end of the sampled range.
    pub to: f64,
    /// Grid step.
    pub step: f64,
    /// Highest Picard order to tabulate (orders `1..=max_picard_order`).
    pub max_picard_order: usize,
}

impl Default for OdeConfig {
    fn default() -> Self {
        Self {
            to: 1.0,
            step: 1e-3,
            max_picard_order: 4,
        }
    }
}

impl OdeConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the right end of the range.
    pub fn with_to(mut self, to: f64) -> Self {
        self.to = to;
        self
    }

    /// Set the grid step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the highest Picard order.
    pub fn with_max_picard_order(mut self, order: usize) -> Self {
        self.max_picard_order = order;
        self
    }
}

/// Solutions of the test equation by every method on a common grid.
#[derive(Debug, Clone)]
pub struct OdeComparison {
    pub euler: TabulatedFunction,
    pub runge_kutta: TabulatedFunction,
    /// Picard approximations, index 0 holding order 1.
    pub picard: Vec<TabulatedFunction>,
}

impl OdeComparison {
    /// Run all solvers for `y' = y² + x², y(0) = 0`.
    pub fn run(config: &OdeConfig) -> Result<Self> {
        log::info!(
            "solving y' = y² + x² on [0, {}) with step {}",
            config.to,
            config.step
        );

        let euler = forward_euler(picard_test_equation, 0.0, 0.0, config.to, config.step)?;
        let runge_kutta = runge_kutta2(picard_test_equation, 0.0, 0.0, config.to, config.step)?;
        let picard = (1..=config.max_picard_order)
            .map(|order| picard_solve(order, config.to, config.step))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            euler,
            runge_kutta,
            picard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.0, 1.0, 0.25).unwrap(), 4);
        assert_eq!(sample_count(1.0, 2.0, 0.5).unwrap(), 2);
        assert!(matches!(sample_count(0.0, 1.0, 0.0), Err(NumlabError::InvalidStep { .. })));
        assert!(matches!(sample_count(0.0, 1.0, -1.0), Err(NumlabError::InvalidStep { .. })));
        assert!(matches!(sample_count(0.0, 0.1, 1.0), Err(NumlabError::EmptyRange { .. })));
        assert!(sample_count(1.0, 0.0, 0.1).is_err());
        assert!(matches!(sample_count(0.0, f64::INFINITY, 1.0), Err(NumlabError::EmptyRange { .. })));
    }

    #[test]
    fn test_huge_ranges_fail_before_allocating() {
        let result = forward_euler(picard_test_equation, 0.0, 0.0, 1e30, 1e-3);
        assert!(matches!(result, Err(NumlabError::TooManySamples { .. })));
        assert!(runge_kutta2(picard_test_equation, 0.0, 0.0, 1e30, 1e-3).is_err());
        assert!(picard_solve(1, 1e30, 1e-3).is_err());
    }

    #[test]
    fn test_methods_agree_on_short_interval() {
        let config = OdeConfig::new().with_to(0.01).with_step(1e-5);
        let cmp = OdeComparison::run(&config).unwrap();

        assert_eq!(cmp.picard.len(), 4);
        let picard4 = &cmp.picard[3];
        assert_eq!(cmp.euler.len(), picard4.len());
        assert_eq!(cmp.runge_kutta.len(), picard4.len());

        for n in 0..picard4.len() {
            let exact = picard4.ys()[n];
            // Euler is first order; local error ~ step·x²/2
            assert_abs_diff_eq!(cmp.euler.ys()[n], exact, epsilon = 1e-9);
            // Midpoint corrector is second order
            assert_abs_diff_eq!(cmp.runge_kutta.ys()[n], exact, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_runge_kutta_beats_euler() {
        // Past x ≈ 0.4 the y/2 shift in the corrector costs more than Euler's lag.
        let config = OdeConfig::new().with_to(0.2).with_step(1e-3);
        let cmp = OdeComparison::run(&config).unwrap();
        let last = cmp.euler.len() - 1;
        let exact = cmp.picard[3].ys()[last];

        let euler_err = (cmp.euler.ys()[last] - exact).abs();
        let rk_err = (cmp.runge_kutta.ys()[last] - exact).abs();
        assert!(rk_err < euler_err);
    }
}
