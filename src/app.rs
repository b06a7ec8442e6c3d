//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - validates them into a `JamConfig`
//! - runs the calculation pipeline
//! - prints the report

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::{JamConfig, OutputMode};
use crate::error::{AppError, CalcError, EXIT_RUNTIME};
use crate::parse::{parse_fitting, parse_jam};

pub mod pipeline;

/// Entry point for the `ecm` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Run a parsed command line, writing the report to `out`.
///
/// Nothing is written unless every input validates.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<(), AppError> {
    if cli.list {
        return write_out(out, &crate::report::format_catalogs());
    }

    let config = jam_config_from_args(cli)?;
    let run = pipeline::run_calc(&config)?;

    let rendered = match config.output {
        OutputMode::Text => crate::report::format_run(&run),
        OutputMode::Json => crate::report::format_json(&run, &config)?,
    };
    write_out(out, &rendered)
}

/// Validate raw flags and parse every descriptor.
pub fn jam_config_from_args(cli: &Cli) -> Result<JamConfig, CalcError> {
    if cli.jams.is_empty() {
        return Err(CalcError::MissingRequiredInput("no jammers specified".to_string()));
    }
    if !(cli.resist.is_finite() && cli.resist > 0.0) {
        return Err(CalcError::out_of_range("resist", cli.resist, "a number > 0"));
    }
    let skill = u8::try_from(cli.skill)
        .ok()
        .filter(|s| (1..=5).contains(s))
        .ok_or_else(|| CalcError::out_of_range("skill", cli.skill, "an integer from 1 to 5"))?;
    if !cli.hull.is_finite() {
        return Err(CalcError::out_of_range("hull", cli.hull, "a finite percentage"));
    }

    let jams = cli
        .jams
        .iter()
        .map(|desc| parse_jam(desc))
        .collect::<Result<Vec<_>, _>>()?;
    let fittings = cli
        .fittings
        .iter()
        .map(|desc| parse_fitting(desc))
        .collect::<Result<Vec<_>, _>>()?;

    for jam in &jams {
        tracing::debug!(%jam, "parsed jammer");
    }
    for fitting in &fittings {
        tracing::debug!(%fitting, "parsed fitting");
    }

    Ok(JamConfig {
        jams,
        fittings,
        resist: cli.resist,
        skill,
        hull_fraction: cli.hull / 100.0,
        trials: cli.trials,
        seed: cli.seed,
        output: if cli.json { OutputMode::Json } else { OutputMode::Text },
    })
}

fn write_out(out: &mut impl Write, text: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to write output: {e}")))
}

/// Logs go to stderr; stdout is reserved for the report.
///
/// `RUST_LOG` wins when no `-v` is given; the default is `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("ecmulator=debug"),
        _ => EnvFilter::new("ecmulator=trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
