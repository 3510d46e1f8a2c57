//! WASM bindings for Numlab Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSim, picardTable } from 'numlab_core';
//!
//! await init();
//!
//! const sim = new WasmCircuitSim(0.0, 6e-4, 1e-6);
//! sim.run();
//! plot(sim.times(), sim.currents());
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{CircuitParams, LookupTables, SimulationWindow};
use crate::ode::picard_solve;
use crate::solver::{CircuitSimulator, CircuitTrajectory};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: crate::NumlabError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible discharge-circuit simulator using the built-in tables.
#[wasm_bindgen]
pub struct WasmCircuitSim {
    params: CircuitParams,
    trajectory: CircuitTrajectory,
}

#[wasm_bindgen]
impl WasmCircuitSim {
    /// Create a simulator for the reference circuit over the given window.
    ///
    /// # Arguments
    /// * `from` - Start time in seconds
    /// * `to` - End time in seconds
    /// * `step` - Time step in seconds
    #[wasm_bindgen(constructor)]
    pub fn new(from: f64, to: f64, step: f64) -> Result<WasmCircuitSim, JsValue> {
        let params = CircuitParams {
            window: SimulationWindow { from, to, step },
            ..CircuitParams::default()
        };
        crate::circuit::validate_params(&params).map_err(to_js)?;

        Ok(WasmCircuitSim {
            params,
            trajectory: CircuitTrajectory::default(),
        })
    }

    /// Set the initial current and voltage.
    #[wasm_bindgen]
    pub fn set_initial(&mut self, current: f64, voltage: f64) {
        self.params.initial.current = current;
        self.params.initial.voltage = voltage;
    }

    /// Run the simulation, replacing any previous trajectory.
    #[wasm_bindgen]
    pub fn run(&mut self) -> Result<usize, JsValue> {
        let tables = LookupTables::builtin().map_err(to_js)?;
        let mut simulator = CircuitSimulator::new(self.params, tables).map_err(to_js)?;
        self.trajectory = simulator.run().map_err(to_js)?;
        Ok(self.trajectory.len())
    }

    /// Sample times of the last run.
    #[wasm_bindgen]
    pub fn times(&self) -> Vec<f64> {
        self.trajectory.current.xs().to_vec()
    }

    /// Current `i(t)` of the last run.
    #[wasm_bindgen]
    pub fn currents(&self) -> Vec<f64> {
        self.trajectory.current.ys().to_vec()
    }

    /// Voltage `u(t)` of the last run.
    #[wasm_bindgen]
    pub fn voltages(&self) -> Vec<f64> {
        self.trajectory.voltage.ys().to_vec()
    }

    /// Tube resistance `R_tube(t)` of the last run.
    #[wasm_bindgen]
    pub fn resistances(&self) -> Vec<f64> {
        self.trajectory.resistance.ys().to_vec()
    }
}

/// Values of the Picard approximation of `order` on `x = n·step < to`.
#[wasm_bindgen(js_name = picardTable)]
pub fn picard_table(order: usize, to: f64, step: f64) -> Result<Vec<f64>, JsValue> {
    Ok(picard_solve(order, to, step).map_err(to_js)?.ys().to_vec())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
