//! Fixed-step driver over a coupled system.

use crate::circuit::{CircuitState, SimulationWindow};
use crate::error::{NumlabError, Result};

use super::rk4::{rk4_step, CoupledSystem};

/// Walks a [`SimulationWindow`] one RK4 step at a time.
///
/// Time and state only move together: a step that fails, or that
/// produces a non-finite state, leaves both where they were.
#[derive(Debug, Clone)]
pub struct TimeStepper<S> {
    system: S,
    window: SimulationWindow,
    sample_count: usize,
    step_index: usize,
    state: CircuitState,
}

impl<S: CoupledSystem> TimeStepper<S> {
    /// Start at `window.from` in state `initial`.
    pub fn new(system: S, window: SimulationWindow, initial: CircuitState) -> Result<Self> {
        let sample_count = window.sample_count()?;
        Ok(Self {
            system,
            window,
            sample_count,
            step_index: 0,
            state: initial,
        })
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn window(&self) -> &SimulationWindow {
        &self.window
    }

    /// Index of the current sample.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Samples left to record, the current one included.
    pub fn remaining(&self) -> usize {
        self.sample_count.saturating_sub(self.step_index)
    }

    pub fn time(&self) -> f64 {
        self.window.time(self.step_index)
    }

    pub fn state(&self) -> CircuitState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.step_index >= self.sample_count
    }

    /// Advance by one step and return the new state.
    pub fn step(&mut self) -> Result<CircuitState> {
        let next = rk4_step(&self.system, self.state, self.window.step)?;

        if !next.is_finite() {
            return Err(NumlabError::NumericalOverflow {
                time: self.window.time(self.step_index + 1),
                current: next.current,
                voltage: next.voltage,
            });
        }

        self.step_index += 1;
        self.state = next;
        Ok(next)
    }
}
