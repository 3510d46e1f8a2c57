//! Numlab - ODE solver comparison and discharge-circuit simulator.
//!
//! # Usage
//!
//! ```bash
//! numlab ode --to 1 --step 1e-3
//! numlab circuit --to 6e-4 --step 1e-6
//! numlab resistance --from 0.5 --to 1200 --step 10 --format csv
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use numlab_core::{
    circuit::{CircuitParams, CircuitState, LookupTables, SimulationWindow, TubeResistance},
    error::Result,
    ode::{OdeComparison, OdeConfig},
    report::{Format, Report},
    solver::SimulatorConfig,
    CircuitSimulator,
};

/// Numerical methods lab: ODE solvers and a discharge-circuit simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare Euler, predictor-corrector and Picard solutions of y' = y² + x²
    Ode {
        /// Right end of the range
        #[arg(long, default_value_t = 1.0)]
        to: f64,

        /// Grid step
        #[arg(long, default_value_t = 1e-3)]
        step: f64,

        /// Highest Picard order to tabulate
        #[arg(long, default_value_t = 4)]
        picard_order: usize,
    },

    /// Simulate the discharge circuit with RK4
    Circuit {
        /// Start time, s
        #[arg(long, default_value_t = 0.0)]
        from: f64,

        /// End time, s
        #[arg(long, default_value_t = 6e-4)]
        to: f64,

        /// Time step, s
        #[arg(long, default_value_t = 1e-6)]
        step: f64,

        /// Initial current, A
        #[arg(long, default_value_t = 0.5)]
        i0: f64,

        /// Initial capacitor voltage, V
        #[arg(long, default_value_t = 1400.0)]
        u0: f64,

        #[command(flatten)]
        tables: TablesArg,
    },

    /// Tabulate the tube resistance against amperage
    Resistance {
        /// First amperage, A
        #[arg(long, default_value_t = 0.5)]
        from: f64,

        /// Last amperage, A
        #[arg(long, default_value_t = 1200.0)]
        to: f64,

        /// Amperage step, A
        #[arg(long, default_value_t = 10.0)]
        step: f64,

        #[command(flatten)]
        tables: TablesArg,
    },
}

#[derive(ClapArgs, Debug)]
struct TablesArg {
    /// Directory with conductivity.txt, temperature.txt and m.txt
    /// (built-in tables when omitted)
    #[arg(long, value_name = "DIR")]
    tables: Option<PathBuf>,
}

impl TablesArg {
    fn load(&self) -> Result<LookupTables> {
        match &self.tables {
            Some(dir) => LookupTables::load(dir),
            None => LookupTables::builtin().cloned(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match &args.command {
        Command::Ode {
            to,
            step,
            picard_order,
        } => {
            let config = OdeConfig::new()
                .with_to(*to)
                .with_step(*step)
                .with_max_picard_order(*picard_order);
            let cmp = OdeComparison::run(&config)?;

            let labels: Vec<String> = (1..=cmp.picard.len()).map(|k| format!("Picard({k})")).collect();
            let mut report = Report::new("x")
                .column("Euler", &cmp.euler)
                .column("Runge-Kutta", &cmp.runge_kutta);
            for (label, values) in labels.iter().zip(&cmp.picard) {
                report = report.column(label.as_str(), values);
            }
            report.print(args.format)?;
        }

        Command::Circuit {
            from,
            to,
            step,
            i0,
            u0,
            tables,
        } => {
            let tables = tables.load()?;
            let params = CircuitParams {
                window: SimulationWindow {
                    from: *from,
                    to: *to,
                    step: *step,
                },
                initial: CircuitState::new(*i0, *u0),
                ..CircuitParams::default()
            };

            let mut simulator = CircuitSimulator::with_config(params, &tables, SimulatorConfig::default())?;
            let trajectory = simulator.run()?;

            Report::new("t")
                .column("i", &trajectory.current)
                .column("u", &trajectory.voltage)
                .column("R_tube", &trajectory.resistance)
                .print(args.format)?;
        }

        Command::Resistance {
            from,
            to,
            step,
            tables,
        } => {
            let tables = tables.load()?;
            let tube = TubeResistance::new(CircuitParams::default().tube, &tables);
            let sweep = tube.sweep(*from, *to, *step)?;

            Report::new("i").column("R_tube", &sweep).print(args.format)?;
        }
    }

    Ok(())
}
