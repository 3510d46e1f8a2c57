//! A single `c·x^n` term.

use std::fmt;

/// One term of a sparse univariate polynomial: `coefficient · x^power`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub power: u32,
}

impl Term {
    /// Create a new term.
    pub fn new(coefficient: f64, power: u32) -> Self {
        Self { coefficient, power }
    }

    /// Product of two terms (powers add).
    pub fn multiply_by(&self, other: &Term) -> Term {
        Term::new(self.coefficient * other.coefficient, self.power + other.power)
    }

    /// Antiderivative with zero constant of integration.
    pub fn integrate(&self) -> Term {
        let power = self.power + 1;
        Term::new(self.coefficient / f64::from(power), power)
    }

    /// Add the coefficient of a term with the same power.
    pub fn increase_by(&mut self, addition: &Term) {
        debug_assert_eq!(self.power, addition.power);
        self.coefficient += addition.coefficient;
    }

    /// Value of the term at `x`.
    ///
    /// Powers beyond `i32::MAX` fall back to `powf`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let value = match i32::try_from(self.power) {
            Ok(power) => x.powi(power),
            Err(_) => x.powf(f64::from(self.power)),
        };
        self.coefficient * value
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power {
            0 => write!(f, "{}", self.coefficient),
            1 => write!(f, "{}·x", self.coefficient),
            n => write!(f, "{}·x^{}", self.coefficient, n),
        }
    }
}
