//! Circuit parameter validation.

use crate::error::{NumlabError, Result};

use super::CircuitParams;

/// Validate a parameter set for simulation.
///
/// Checks:
/// - `L`, `C` and the tube geometry are positive and finite
/// - `R` is non-negative
/// - the time window has a positive step and between one and
///   [`MAX_SAMPLES`](crate::error::MAX_SAMPLES) samples
/// - the initial state is finite
pub fn validate_params(params: &CircuitParams) -> Result<()> {
    positive("inductance", params.inductance)?;
    positive("capacitance", params.capacitance)?;
    positive("tube.length", params.tube.length)?;
    positive("tube.radius", params.tube.radius)?;
    positive("tube.max_temperature", params.tube.max_temperature)?;

    if !(params.resistance >= 0.0 && params.resistance.is_finite()) {
        return Err(NumlabError::invalid_parameter(
            "resistance",
            format!("must be non-negative, got {}", params.resistance),
        ));
    }

    params.window.sample_count()?;

    if !params.initial.is_finite() {
        return Err(NumlabError::invalid_parameter(
            "initial",
            format!("state must be finite, got {}", params.initial),
        ));
    }

    Ok(())
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(NumlabError::invalid_parameter(
            name,
            format!("must be positive, got {}", value),
        ))
    }
}
