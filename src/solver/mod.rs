//! Time integration of the discharge circuit.
//!
//! The circuit state `(i, u)` is advanced with classical fourth-order
//! Runge-Kutta. Both components share the same four stage evaluations:
//!
//! ```text
//! k1 = F(t,       y)
//! k2 = F(t + h/2, y + h·k1/2)
//! k3 = F(t + h/2, y + h·k2/2)
//! k4 = F(t + h,   y + h·k3)
//! y' = y + h/6 · (k1 + 2k2 + 2k3 + k4)
//! ```
//!
//! Every stage calls the tube-resistance model at the stage's own current,
//! which runs a full Simpson quadrature, so stages are never reused.

mod rk4;
mod simulator;
mod stepper;

pub use rk4::{rk4_step, CoupledSystem};
pub use simulator::{CircuitSimulator, CircuitTrajectory, DischargeCircuit, SimulatorConfig};
pub use stepper::TimeStepper;
