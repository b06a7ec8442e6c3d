//! Command-line parsing for the ECM jam calculator.
//!
//! Flags are parsed into raw values here; range checks and descriptor
//! parsing happen in `app::jam_config_from_args` so every rejection carries a
//! `CalcError` category.

use clap::{ArgAction, Parser};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ecm", version, about = "ECM jam probabilities.")]
pub struct Cli {
    /// Add a jammer to the fit (`CODE` or `CODExN`, e.g. `M2`, `R2x2`).
    #[arg(short = 'j', long = "jam", value_name = "DESC")]
    pub jams: Vec<String>,

    /// Add a strength fitting (`CODE` or `CODExN`, e.g. `S2x2`).
    #[arg(short = 'f', long = "fitting", value_name = "DESC")]
    pub fittings: Vec<String>,

    /// Target sensor strength.
    #[arg(short = 'r', long, env = "ECM_RESIST", default_value_t = 20.0, allow_negative_numbers = true)]
    pub resist: f64,

    /// Pilot skill level (1-5).
    #[arg(short = 's', long, env = "ECM_SKILL", default_value_t = 5, allow_negative_numbers = true)]
    pub skill: i64,

    /// Hull bonus to jam strength, in percent.
    #[arg(short = 'H', long, env = "ECM_HULL", default_value_t = 0.0, allow_negative_numbers = true)]
    pub hull: f64,

    /// Also estimate the probability by Monte Carlo with this many trials (0 = off).
    #[arg(long, env = "ECM_TRIALS", default_value_t = 0)]
    pub trials: u64,

    /// Seed for the Monte Carlo estimate.
    #[arg(long, env = "ECM_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// List known jammer and fitting codes, then exit.
    #[arg(long)]
    pub list: bool,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
