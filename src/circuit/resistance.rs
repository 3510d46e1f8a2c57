//! Current-dependent resistance of the discharge tube.
//!
//! ```text
//! T(z)      = T0(i) + (T_max - T0(i)) · z^m(i)
//! R_tube(i) = l / (2π r² · ∫₀¹ z · T(z) · σ(T(z)) dz)
//! ```
//!
//! `T0`, `m` and `σ` come from the lookup interpolators. Amperage enters the
//! tables by magnitude, so a reversed current sees the same tube.

use std::f64::consts::PI;

use super::lookup::LookupTables;
use super::params::TubeGeometry;
use crate::error::{NumlabError, Result};
use crate::quadrature::{simpson_with_step, DEFAULT_QUADRATURE_STEP};
use crate::table::TabulatedFunction;

/// Evaluator for `R_tube(i)`.
#[derive(Debug, Clone, Copy)]
pub struct TubeResistance<'a> {
    geometry: TubeGeometry,
    tables: &'a LookupTables,
    quadrature_step: f64,
}

impl<'a> TubeResistance<'a> {
    /// Create an evaluator using the default quadrature step.
    pub fn new(geometry: TubeGeometry, tables: &'a LookupTables) -> Self {
        Self {
            geometry,
            tables,
            quadrature_step: DEFAULT_QUADRATURE_STEP,
        }
    }

    /// Set the quadrature step over `z ∈ [0, 1]`.
    pub fn with_quadrature_step(mut self, step: f64) -> Self {
        self.quadrature_step = step;
        self
    }

    pub fn geometry(&self) -> &TubeGeometry {
        &self.geometry
    }

    /// Radial temperature at normalized radius `z` for the given amperage.
    pub fn temperature(&self, amperage: f64, z: f64) -> f64 {
        let (t0, m) = self.profile(amperage);
        t0 + (self.geometry.max_temperature - t0) * z.powf(m)
    }

    /// `∫₀¹ z · T(z) · σ(T(z)) dz`.
    pub fn profile_integral(&self, amperage: f64) -> Result<f64> {
        let (t0, m) = self.profile(amperage);
        let t_max = self.geometry.max_temperature;
        let conductivity = &self.tables.conductivity;

        simpson_with_step(
            |z| {
                let temperature = t0 + (t_max - t0) * z.powf(m);
                z * temperature * conductivity.interpolate(temperature)
            },
            0.0,
            1.0,
            self.quadrature_step,
        )
    }

    /// Tube resistance at the given amperage, Ohm.
    pub fn resistance(&self, amperage: f64) -> Result<f64> {
        let integral = self.profile_integral(amperage)?;
        let radius = self.geometry.radius;
        let resistance = self.geometry.length / (2.0 * PI * radius * radius * integral);

        log::trace!("R_tube({:.6e}) = {:.6e}", amperage, resistance);

        if integral <= 0.0 || !resistance.is_finite() {
            return Err(NumlabError::NonFiniteResistance { amperage, integral });
        }
        Ok(resistance)
    }

    /// Tabulate `R_tube` over amperage `from..=to`.
    pub fn sweep(&self, from: f64, to: f64, step: f64) -> Result<TabulatedFunction> {
        NumlabError::check_step(step)?;
        if to < from {
            return Err(NumlabError::EmptyRange { from, to, step });
        }

        let intervals = ((to - from) / step + 1e-9).floor();
        let count = NumlabError::check_sample_count(intervals + 1.0, from, to, step)?;
        let mut values = TabulatedFunction::with_capacity(count);
        for n in 0..count {
            let amperage = from + n as f64 * step;
            values.add_value_pair(amperage, self.resistance(amperage)?);
        }

        Ok(values)
    }

    fn profile(&self, amperage: f64) -> (f64, f64) {
        let amperage = amperage.abs();
        (
            self.tables.temperature.interpolate(amperage),
            self.tables.exponent.interpolate(amperage),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::NewtonInterpolator;
    use approx::assert_relative_eq;

    /// Tables with constant `T0`, `m = 1` and `σ = 1`, so the integral is analytic.
    fn flat_tables(t0: f64) -> LookupTables {
        let flat = |y: f64| -> TabulatedFunction { (0..4).map(|i| (i as f64 * 1000.0, y)).collect() };
        LookupTables {
            conductivity: NewtonInterpolator::new("sigma", flat(1.0), 1).unwrap(),
            temperature: NewtonInterpolator::new("t0", flat(t0), 1).unwrap(),
            exponent: NewtonInterpolator::new("m", flat(1.0), 1).unwrap(),
        }
    }

    #[test]
    fn test_analytic_integral() {
        // T(z) = t0 + (tmax - t0) z, ∫ z T dz = t0/2 + (tmax - t0)/3
        let tables = flat_tables(6000.0);
        let geometry = TubeGeometry::default();
        let tube = TubeResistance::new(geometry, &tables);

        let expected = 6000.0 / 2.0 + (2000.0 - 6000.0) / 3.0;
        assert_relative_eq!(tube.profile_integral(1.0).unwrap(), expected, max_relative = 1e-12);

        let r = tube.resistance(1.0).unwrap();
        let expected_r = geometry.length / (2.0 * PI * geometry.radius.powi(2) * expected);
        assert_relative_eq!(r, expected_r, max_relative = 1e-12);
    }

    #[test]
    fn test_temperature_profile_endpoints() {
        let tables = flat_tables(6000.0);
        let tube = TubeResistance::new(TubeGeometry::default(), &tables);
        assert_relative_eq!(tube.temperature(1.0, 0.0), 6000.0);
        assert_relative_eq!(tube.temperature(1.0, 1.0), 2000.0);
    }

    #[test]
    fn test_non_positive_integral_is_error() {
        // σ = 0 everywhere
        let zero: TabulatedFunction = (0..4).map(|i| (i as f64 * 1000.0, 0.0)).collect();
        let mut tables = flat_tables(6000.0);
        tables.conductivity = NewtonInterpolator::new("sigma", zero, 1).unwrap();
        let tube = TubeResistance::new(TubeGeometry::default(), &tables);
        assert!(matches!(tube.resistance(1.0), Err(NumlabError::NonFiniteResistance { .. })));
    }

    #[test]
    fn test_builtin_resistance_decreases_with_current() {
        let tables = LookupTables::builtin().unwrap();
        let tube = TubeResistance::new(TubeGeometry::default(), tables);
        let low = tube.resistance(5.0).unwrap();
        let high = tube.resistance(200.0).unwrap();
        assert!(low > 0.0 && high > 0.0);
        assert!(high < low);
        assert_relative_eq!(tube.resistance(-5.0).unwrap(), low);
    }

    #[test]
    fn test_sweep() {
        let tables = flat_tables(6000.0);
        let tube = TubeResistance::new(TubeGeometry::default(), &tables);
        let sweep = tube.sweep(1.0, 2.0, 0.25).unwrap();
        assert_eq!(sweep.xs(), &[1.0, 1.25, 1.5, 1.75, 2.0]);
        assert!(tube.sweep(2.0, 1.0, 0.25).is_err());
        assert!(tube.sweep(1.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_sweep_rejects_unbounded_ranges() {
        let tables = flat_tables(6000.0);
        let tube = TubeResistance::new(TubeGeometry::default(), &tables);
        assert!(matches!(
            tube.sweep(0.0, f64::INFINITY, 1.0),
            Err(NumlabError::EmptyRange { .. })
        ));
        assert!(matches!(
            tube.sweep(f64::NEG_INFINITY, 0.0, 1.0),
            Err(NumlabError::EmptyRange { .. })
        ));
        assert!(matches!(
            tube.sweep(0.0, 1e300, 1.0),
            Err(NumlabError::TooManySamples { .. })
        ));
    }

    #[test]
    fn test_odd_quadrature_step_rejected() {
        let tables = flat_tables(6000.0);
        let tube = TubeResistance::new(TubeGeometry::default(), &tables).with_quadrature_step(1.0 / 3.0);
        assert!(matches!(tube.resistance(1.0), Err(NumlabError::OddStepCount { steps: 3 })));
    }
}
