//! Discharge-circuit model.
//!
//! An RLC loop discharges a capacitor through a gas-discharge tube whose
//! resistance depends on the instantaneous current:
//!
//! ```text
//! di/dt = (u - (R + R_tube(i)) · i) / L
//! du/dt = -i / C
//! ```
//!
//! `R_tube` has no closed form. For a given amperage the radial temperature
//! profile `T(z) = T0(i) + (T_max - T0(i)) · z^m(i)` is built from tabulated
//! data and the resistivity profile is integrated with Simpson's rule, see
//! [`TubeResistance`]. The tables live in an explicit [`LookupTables`] cache
//! that is loaded once and borrowed by every evaluation.

mod lookup;
mod params;
mod resistance;
mod validate;

pub use lookup::{LookupTables, CONDUCTIVITY_ORDER, EXPONENT_ORDER, TEMPERATURE_ORDER};
pub use params::{CircuitParams, CircuitState, SimulationWindow, TubeGeometry};
pub use resistance::TubeResistance;
pub use validate::validate_params;
