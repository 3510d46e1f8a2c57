//! Sparse univariate polynomials with exact term arithmetic.
//!
//! A [`Polynomial`] is an unordered list of [`Term`]s. Squaring produces
//! duplicate powers; [`Polynomial::merge_with`] folds them back so that each
//! power appears at most once. Everything that evaluates a polynomial inside
//! this crate merges first.
//!
//! The operations are exactly what the Picard iteration for `y' = y² + x²`
//! needs:
//!
//! ```text
//! y_k(x) = x³/3 + ∫₀ˣ y_{k-1}(t)² dt
//! ```

mod term;

pub use term::Term;

use std::fmt;

/// A sparse polynomial in one variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Create a polynomial from raw terms (not normalized).
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// A polynomial with a single term.
    pub fn monomial(coefficient: f64, power: u32) -> Self {
        Self::new(vec![Term::new(coefficient, power)])
    }

    /// The terms in storage order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `x^power`, summed over duplicates.
    pub fn coefficient(&self, power: u32) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.power == power)
            .map(|t| t.coefficient)
            .sum()
    }

    /// Highest power present, if any.
    pub fn degree(&self) -> Option<u32> {
        self.terms.iter().map(|t| t.power).max()
    }

    /// Check that no power appears twice.
    pub fn is_normalized(&self) -> bool {
        let mut powers: Vec<u32> = self.terms.iter().map(|t| t.power).collect();
        powers.sort_unstable();
        powers.windows(2).all(|w| w[0] != w[1])
    }

    /// Term-wise antiderivative, definite from 0.
    ///
    /// Every power shifts by one, so no collisions are introduced.
    pub fn integrate(&self) -> Polynomial {
        Polynomial::new(self.terms.iter().map(Term::integrate).collect())
    }

    /// Full ordered cross product of the terms with themselves.
    ///
    /// The result generally holds duplicate powers and must be merged before use.
    pub fn square(&self) -> Polynomial {
        let mut terms = Vec::with_capacity(self.terms.len() * self.terms.len());
        for a in &self.terms {
            for b in &self.terms {
                terms.push(a.multiply_by(b));
            }
        }
        Polynomial::new(terms)
    }

    /// Add `other` into a copy of `self`, one term per power.
    ///
    /// Matching terms are searched from the end, where the most recently
    /// appended powers live.
    pub fn merge_with(&self, other: &Polynomial) -> Polynomial {
        let mut terms = self.terms.clone();

        for term in &other.terms {
            match terms.iter_mut().rev().find(|t| t.power == term.power) {
                Some(existing) => existing.increase_by(term),
                None => terms.push(*term),
            }
        }

        Polynomial::new(terms)
    }

    /// Collapse duplicate powers.
    pub fn normalize(&self) -> Polynomial {
        Polynomial::default().merge_with(self)
    }

    /// Value at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Polynomial::new(vec![term])
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.normalize().terms;
        if terms.is_empty() {
            return write!(f, "0");
        }
        terms.sort_by_key(|t| t.power);

        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
