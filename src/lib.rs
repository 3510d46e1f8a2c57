//! # Numlab Core
//!
//! Fixed-step ODE integrators and a nonlinear discharge-circuit simulator.
//!
//! This library provides:
//! - Exact sparse-polynomial algebra and Picard successive approximations
//! - Forward Euler and a midpoint predictor-corrector for scalar ODEs
//! - Newton divided-difference interpolation over tabulated data
//! - Composite Simpson quadrature
//! - An RLC discharge circuit with a current-dependent tube resistance,
//!   advanced with classical RK4
//!
//! ## Architecture
//!
//! - [`polynomial`] - Sparse univariate polynomials
//! - [`table`] - Tabulated functions and the two-column table format
//! - [`interpolate`] - Newton interpolation with a sliding window
//! - [`quadrature`] - Simpson's rule
//! - [`ode`] - Euler, predictor-corrector and Picard solvers
//! - [`circuit`] - Circuit parameters, lookup tables, tube resistance
//! - [`solver`] - RK4 time integration of the circuit
//! - [`report`] - Text and CSV output (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! numlab ode --to 1 --step 1e-3
//! numlab circuit --to 6e-4 --step 1e-6 --format csv > discharge.csv
//! ```
//!
//! ### Library
//!
//! ```no_run
//! use numlab_core::{circuit::{CircuitParams, LookupTables}, CircuitSimulator};
//!
//! let tables = LookupTables::builtin()?;
//! let trajectory = CircuitSimulator::new(CircuitParams::default(), tables)?.run()?;
//! println!("{}", trajectory.current);
//! # Ok::<(), numlab_core::NumlabError>(())
//! ```
//!
//! ## Accuracy
//!
//! Interpolation queries outside a table's domain extrapolate the edge
//! window without complaint. The reference tube cools to 2000 K at the wall,
//! below the conductivity table, so the outer part of every resistance
//! integral is extrapolated.

pub mod circuit;
pub mod error;
pub mod interpolate;
pub mod ode;
pub mod polynomial;
pub mod quadrature;
pub mod solver;
pub mod table;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use error::{NumlabError, Result, MAX_SAMPLES};
pub use polynomial::{Polynomial, Term};
pub use solver::CircuitSimulator;
pub use table::TabulatedFunction;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSim;
