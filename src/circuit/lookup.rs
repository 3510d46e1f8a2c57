//! Lookup tables backing the tube-resistance model.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;
use crate::interpolate::NewtonInterpolator;
use crate::table::{self, TabulatedFunction};

/// Interpolation order for conductivity against temperature.
pub const CONDUCTIVITY_ORDER: usize = 3;

/// Interpolation order for axis temperature against amperage.
pub const TEMPERATURE_ORDER: usize = 5;

/// Interpolation order for the profile exponent against amperage.
pub const EXPONENT_ORDER: usize = 5;

const CONDUCTIVITY_FILE: &str = "conductivity.txt";
const TEMPERATURE_FILE: &str = "temperature.txt";
const EXPONENT_FILE: &str = "m.txt";

const BUILTIN_CONDUCTIVITY: &str = include_str!("../../data/conductivity.txt");
const BUILTIN_TEMPERATURE: &str = include_str!("../../data/temperature.txt");
const BUILTIN_EXPONENT: &str = include_str!("../../data/m.txt");

static BUILTIN: OnceLock<LookupTables> = OnceLock::new();

/// The three interpolators the resistance model queries.
///
/// Loaded once, then shared by reference.
#[derive(Debug, Clone)]
pub struct LookupTables {
    /// Plasma conductivity `σ(T)`
    pub conductivity: NewtonInterpolator,
    /// Axis temperature `T0(i)`
    pub temperature: NewtonInterpolator,
    /// Profile exponent `m(i)`
    pub exponent: NewtonInterpolator,
}

impl LookupTables {
    /// Build from already-loaded tables with the default orders.
    pub fn from_tables(
        conductivity: TabulatedFunction,
        temperature: TabulatedFunction,
        exponent: TabulatedFunction,
    ) -> Result<Self> {
        Ok(Self {
            conductivity: NewtonInterpolator::new("conductivity", conductivity, CONDUCTIVITY_ORDER)?,
            temperature: NewtonInterpolator::new("temperature", temperature, TEMPERATURE_ORDER)?,
            exponent: NewtonInterpolator::new("exponent", exponent, EXPONENT_ORDER)?,
        })
    }

    /// Load `conductivity.txt`, `temperature.txt` and `m.txt` from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        log::info!("loading lookup tables from {}", dir.display());
        Self::from_tables(
            table::parse_file(&dir.join(CONDUCTIVITY_FILE))?,
            table::parse_file(&dir.join(TEMPERATURE_FILE))?,
            table::parse_file(&dir.join(EXPONENT_FILE))?,
        )
    }

    /// The reference tables compiled into the crate.
    ///
    /// Parsed on the first successful call; later calls share that copy.
    pub fn builtin() -> Result<&'static LookupTables> {
        if let Some(tables) = BUILTIN.get() {
            return Ok(tables);
        }

        log::info!("parsing built-in lookup tables");
        let tables = Self::parse_builtin()?;
        Ok(BUILTIN.get_or_init(|| tables))
    }

    fn parse_builtin() -> Result<Self> {
        Self::from_tables(
            table::parse(BUILTIN_CONDUCTIVITY, CONDUCTIVITY_FILE)?,
            table::parse(BUILTIN_TEMPERATURE, TEMPERATURE_FILE)?,
            table::parse(BUILTIN_EXPONENT, EXPONENT_FILE)?,
        )
    }
}
