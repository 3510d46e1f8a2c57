//! Picard successive approximations for `y' = y² + x², y(0) = 0`.
//!
//! ```text
//! y_1(x) = x³/3
//! y_k(x) = ∫₀ˣ (y_{k-1}(t)² + t²) dt = x³/3 + ∫₀ˣ y_{k-1}(t)² dt
//! ```
//!
//! Each approximation is an exact polynomial, so after one construction the
//! solver only evaluates it on the grid.

use super::sample_count;
use crate::error::{NumlabError, Result};
use crate::polynomial::Polynomial;
use crate::table::TabulatedFunction;

/// The Picard polynomial of the given order (`order >= 1`), normalized.
pub fn picard_polynomial(order: usize) -> Result<Polynomial> {
    if order == 0 {
        return Err(NumlabError::InvalidOrder { order });
    }

    let seed = Polynomial::monomial(1.0 / 3.0, 3);
    let mut current = seed.clone();
    for _ in 1..order {
        current = seed.merge_with(&current.square().integrate());
    }

    Ok(current)
}

/// Evaluate the Picard approximation of `order` on `x_n = n · step`, `x < to`.
pub fn picard_solve(order: usize, to: f64, step: f64) -> Result<TabulatedFunction> {
    let polynomial = picard_polynomial(order)?;
    log::debug!("picard order {}: {}", order, polynomial);

    let count = sample_count(0.0, to, step)?;
    let mut values = TabulatedFunction::with_capacity(count);
    for n in 0..count {
        let x = n as f64 * step;
        values.add_value_pair(x, polynomial.evaluate(x));
    }

    Ok(values)
}
