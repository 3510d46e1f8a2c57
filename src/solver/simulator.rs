//! Main simulator interface.

use crate::circuit::{validate_params, CircuitParams, CircuitState, LookupTables, TubeResistance};
use crate::error::{NumlabError, Result};
use crate::quadrature::DEFAULT_QUADRATURE_STEP;
use crate::table::TabulatedFunction;

use super::rk4::CoupledSystem;
use super::stepper::TimeStepper;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Simpson step over the normalized tube radius.
    pub quadrature_step: f64,
    /// Log progress every this many steps (0 disables).
    pub progress_interval: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            quadrature_step: DEFAULT_QUADRATURE_STEP,
            progress_interval: 100,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quadrature step used for the tube resistance.
    ///
    /// `1 / step` must round to an even number of intervals.
    pub fn with_quadrature_step(mut self, step: f64) -> Self {
        self.quadrature_step = step;
        self
    }

    /// Set how often progress is logged at `debug` level.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }
}

/// The circuit equations bound to a tube-resistance evaluator.
#[derive(Debug, Clone, Copy)]
pub struct DischargeCircuit<'a> {
    params: CircuitParams,
    tube: TubeResistance<'a>,
}

impl<'a> DischargeCircuit<'a> {
    pub fn new(params: CircuitParams, tube: TubeResistance<'a>) -> Self {
        Self { params, tube }
    }

    pub fn params(&self) -> &CircuitParams {
        &self.params
    }

    pub fn tube(&self) -> &TubeResistance<'a> {
        &self.tube
    }

    /// `di/dt = (u - (R + R_tube(i)) · i) / L`.
    pub fn current_derivative(&self, current: f64, voltage: f64) -> Result<f64> {
        let tube_resistance = self.tube.resistance(current)?;
        Ok((voltage - (self.params.resistance + tube_resistance) * current) / self.params.inductance)
    }

    /// `du/dt = -i / C`.
    pub fn voltage_derivative(&self, current: f64) -> f64 {
        -current / self.params.capacitance
    }
}

impl CoupledSystem for DischargeCircuit<'_> {
    fn derivatives(&self, state: CircuitState) -> Result<CircuitState> {
        Ok(CircuitState::new(
            self.current_derivative(state.current, state.voltage)?,
            self.voltage_derivative(state.current),
        ))
    }
}

/// Recorded trajectory of a simulation run.
#[derive(Debug, Clone, Default)]
pub struct CircuitTrajectory {
    /// `i(t)`
    pub current: TabulatedFunction,
    /// `u(t)`
    pub voltage: TabulatedFunction,
    /// `R_tube(t)`
    pub resistance: TabulatedFunction,
}

impl CircuitTrajectory {
    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

/// The discharge-circuit simulator.
pub struct CircuitSimulator<'a> {
    /// RK4 driver over the circuit equations
    stepper: TimeStepper<DischargeCircuit<'a>>,
    /// Progress logging interval
    progress_interval: usize,
}

impl<'a> CircuitSimulator<'a> {
    /// Create a new simulator with default configuration.
    pub fn new(params: CircuitParams, tables: &'a LookupTables) -> Result<Self> {
        Self::with_config(params, tables, SimulatorConfig::default())
    }

    /// Create a new simulator with custom configuration.
    pub fn with_config(params: CircuitParams, tables: &'a LookupTables, config: SimulatorConfig) -> Result<Self> {
        validate_params(&params)?;
        NumlabError::check_step(config.quadrature_step)?;

        let tube = TubeResistance::new(params.tube, tables).with_quadrature_step(config.quadrature_step);
        let circuit = DischargeCircuit::new(params, tube);

        Ok(Self {
            stepper: TimeStepper::new(circuit, params.window, params.initial)?,
            progress_interval: config.progress_interval,
        })
    }

    /// The circuit equations.
    pub fn circuit(&self) -> &DischargeCircuit<'a> {
        self.stepper.system()
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.stepper.time()
    }

    /// Current state.
    pub fn state(&self) -> CircuitState {
        self.stepper.state()
    }

    /// Whether the time window is exhausted.
    pub fn is_finished(&self) -> bool {
        self.stepper.is_finished()
    }

    /// Advance by one RK4 step and return the new state.
    ///
    /// On error the time and state are left unchanged.
    pub fn step(&mut self) -> Result<CircuitState> {
        self.stepper.step()
    }

    /// Run to the end of the window, recording one sample per step.
    ///
    /// The first sample is the state at the current time, so a fresh
    /// simulator records the initial state at `window.from`.
    pub fn run(&mut self) -> Result<CircuitTrajectory> {
        let window = *self.stepper.window();
        let remaining = self.stepper.remaining();
        log::info!(
            "simulating {} steps from t = {:e} to {:e} s (step {:e})",
            remaining,
            self.time(),
            window.to,
            window.step
        );

        let mut trajectory = CircuitTrajectory {
            current: TabulatedFunction::with_capacity(remaining),
            voltage: TabulatedFunction::with_capacity(remaining),
            resistance: TabulatedFunction::with_capacity(remaining),
        };

        while !self.is_finished() {
            let time = self.time();
            let state = self.state();
            let tube_resistance = self.circuit().tube.resistance(state.current)?;

            trajectory.current.add_value_pair(time, state.current);
            trajectory.voltage.add_value_pair(time, state.voltage);
            trajectory.resistance.add_value_pair(time, tube_resistance);

            if self.progress_interval > 0 && self.stepper.step_index() % self.progress_interval == 0 {
                log::debug!("t = {:e} of {:e} s: {}", time, window.to, state);
            }

            self.step()?;
        }

        log::info!("simulation finished: {}", self.state());
        Ok(trajectory)
    }
}
