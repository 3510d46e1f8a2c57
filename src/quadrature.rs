//! Composite Simpson quadrature.
//!
//! ```text
//! ∫ f ≈ h/3 · [f(x_0) + 4f(x_1) + 2f(x_2) + ... + 4f(x_{n-1}) + f(x_n)]
//! ```
//!
//! `n` must be even.

use crate::error::{NumlabError, Result};

/// Default quadrature step for integrals over the unit interval.
pub const DEFAULT_QUADRATURE_STEP: f64 = 1e-2;

/// Integrate `f` over `[from, to]` with `steps` equal intervals.
pub fn simpson<F>(f: F, from: f64, to: f64, steps: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if steps < 2 || steps % 2 != 0 {
        return Err(NumlabError::OddStepCount { steps });
    }

    let h = (to - from) / steps as f64;
    let mut sum = f(from) + f(to);

    for i in 1..steps {
        let x = from + i as f64 * h;
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f(x);
    }

    Ok(sum * h / 3.0)
}

/// Integrate `f` over `[from, to]` with a step close to `step`.
///
/// The interval count is `(to - from) / step` rounded to the nearest integer,
/// which must come out even.
pub fn simpson_with_step<F>(f: F, from: f64, to: f64, step: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    NumlabError::check_step(step)?;
    let steps = ((to - from) / step).round();
    if !steps.is_finite() || steps < 0.0 {
        return Err(NumlabError::EmptyRange { from, to, step });
    }
    simpson(f, from, to, steps as usize)
}
