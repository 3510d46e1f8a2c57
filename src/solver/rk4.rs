//! Classical RK4 step for the two-component circuit state.

use crate::circuit::CircuitState;
use crate::error::Result;

/// A first-order system `y' = F(y)` over the circuit state.
///
/// Derivative evaluation may fail (e.g. the tube resistance is not finite).
pub trait CoupledSystem {
    /// `(di/dt, du/dt)` at `state`.
    fn derivatives(&self, state: CircuitState) -> Result<CircuitState>;
}

/// Advance `state` by one step of size `h`.
pub fn rk4_step(system: &impl CoupledSystem, state: CircuitState, h: f64) -> Result<CircuitState> {
    let offset = |k: CircuitState, scale: f64| {
        CircuitState::new(state.current + scale * k.current, state.voltage + scale * k.voltage)
    };

    let k1 = system.derivatives(state)?;
    let k2 = system.derivatives(offset(k1, h / 2.0))?;
    let k3 = system.derivatives(offset(k2, h / 2.0))?;
    let k4 = system.derivatives(offset(k3, h))?;

    Ok(CircuitState::new(
        state.current + h / 6.0 * (k1.current + 2.0 * k2.current + 2.0 * k3.current + k4.current),
        state.voltage + h / 6.0 * (k1.voltage + 2.0 * k2.voltage + 2.0 * k3.voltage + k4.voltage),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Harmonic oscillator: i' = u, u' = -i.
    struct Oscillator;

    impl CoupledSystem for Oscillator {
        fn derivatives(&self, state: CircuitState) -> Result<CircuitState> {
            Ok(CircuitState::new(state.voltage, -state.current))
        }
    }

    #[test]
    fn test_oscillator_period() {
        let steps = 1000;
        let h = 2.0 * std::f64::consts::PI / steps as f64;
        let mut state = CircuitState::new(1.0, 0.0);
        for _ in 0..steps {
            state = rk4_step(&Oscillator, state, h).unwrap();
        }
        assert_relative_eq!(state.current, 1.0, epsilon = 1e-9);
        assert_relative_eq!(state.voltage, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_step_matches_taylor() {
        // Exact one-step RK4 for a linear system equals the 4th-order Taylor polynomial.
        let h: f64 = 0.1;
        let state = rk4_step(&Oscillator, CircuitState::new(1.0, 0.0), h).unwrap();
        let cos4 = 1.0 - h * h / 2.0 + h.powi(4) / 24.0;
        let sin4 = h - h.powi(3) / 6.0;
        assert_relative_eq!(state.current, cos4, epsilon = 1e-15);
        assert_relative_eq!(state.voltage, -sin4, epsilon = 1e-15);
    }
}
