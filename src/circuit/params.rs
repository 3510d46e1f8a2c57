//! Physical and simulation parameters of the discharge circuit.

use std::fmt;

use crate::error::{NumlabError, Result};

/// Geometry and wall temperature of the discharge tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    /// Electrode gap, m
    pub length: f64,
    /// Tube radius, m
    pub radius: f64,
    /// Wall temperature `T_max` reached at `z = 1`, K
    pub max_temperature: f64,
}

impl Default for TubeGeometry {
    fn default() -> Self {
        Self {
            length: 0.12,
            radius: 3.5e-4,
            max_temperature: 2000.0,
        }
    }
}

/// Time range and step of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationWindow {
    /// Start time, s
    pub from: f64,
    /// End time (exclusive), s
    pub to: f64,
    /// Time step, s
    pub step: f64,
}

impl Default for SimulationWindow {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 6e-4,
            step: 1e-6,
        }
    }
}

impl SimulationWindow {
    /// Number of recorded samples, `t_n = from + n·step < to`.
    ///
    /// A ratio within rounding noise of an integer counts as that integer.
    /// Fails for an empty or non-finite window and above [`MAX_SAMPLES`](crate::error::MAX_SAMPLES).
    pub fn sample_count(&self) -> Result<usize> {
        NumlabError::check_step(self.step)?;
        let count = ((self.to - self.from) / self.step - 1e-9).ceil();
        NumlabError::check_sample_count(count, self.from, self.to, self.step)
    }

    /// Time of the `n`-th sample.
    pub fn time(&self, n: usize) -> f64 {
        self.from + n as f64 * self.step
    }
}

/// Instantaneous state of the circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitState {
    /// Loop current `i`, A
    pub current: f64,
    /// Capacitor voltage `u`, V
    pub voltage: f64,
}

impl CircuitState {
    pub fn new(current: f64, voltage: f64) -> Self {
        Self { current, voltage }
    }

    pub fn is_finite(&self) -> bool {
        self.current.is_finite() && self.voltage.is_finite()
    }
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i = {:.6} A, u = {:.6} V", self.current, self.voltage)
    }
}

/// Full parameter set of one discharge experiment.
///
/// Plain data; build it with a struct literal, usually starting from
/// `..CircuitParams::default()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParams {
    /// Series resistance `R`, Ohm
    pub resistance: f64,
    /// Inductance `L`, H
    pub inductance: f64,
    /// Capacitance `C`, F
    pub capacitance: f64,
    /// Discharge tube
    pub tube: TubeGeometry,
    /// Time range
    pub window: SimulationWindow,
    /// State at `window.from`
    pub initial: CircuitState,
}

impl Default for CircuitParams {
    fn default() -> Self {
        Self {
            resistance: 0.25,
            inductance: 1.87e-3,
            capacitance: 2.68e-3,
            tube: TubeGeometry::default(),
            window: SimulationWindow::default(),
            initial: CircuitState::new(0.5, 1400.0),
        }
    }
}
