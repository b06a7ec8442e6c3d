//! Terminal output.
//!
//! Text mode is line oriented so it stays easy to grep:
//!
//! ```text
//! R2x2 str=4.50
//! jam probability: 40%
//! ```

use crate::app::pipeline::RunOutput;
use crate::catalog;
use crate::domain::JamConfig;
use crate::error::{AppError, EXIT_RUNTIME};
use crate::report::build_report;

/// Per-jammer strengths followed by the final percentage.
pub fn format_run(run: &RunOutput) -> String {
    let mut out = String::new();

    for jam in &run.jams {
        out.push_str(&format!("{} str={:.2}\n", jam.descriptor, jam.strength));
    }
    out.push_str(&format!("jam probability: {}%\n", run.percent));

    if let Some(sim) = &run.simulation {
        out.push_str(&format!(
            "simulated: {:.2}% over {} trials (seed {})\n",
            sim.rate() * 100.0,
            sim.trials,
            sim.seed
        ));
    }

    out
}

pub fn format_json(run: &RunOutput, config: &JamConfig) -> Result<String, AppError> {
    let report = build_report(run, config);
    let mut payload = serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to serialize report: {e}")))?;
    payload.push('\n');
    Ok(payload)
}

/// Both catalogs, in declaration order.
pub fn format_catalogs() -> String {
    let mut out = String::new();

    out.push_str("Jammers:\n");
    out.push_str(&format!("{:<4} {:>8}  {:<18} {}\n", "code", "strength", "category", "name"));
    for j in catalog::jammers().iter() {
        out.push_str(&format!(
            "{:<4} {:>8.2}  {:<18} {}\n",
            j.code,
            j.strength,
            j.category.display_name(),
            j.label
        ));
    }

    out.push_str("\nFittings:\n");
    out.push_str(&format!("{:<4} {:>8}  {:<30} {}\n", "code", "bonus", "category", "name"));
    for f in catalog::fittings().iter() {
        out.push_str(&format!(
            "{:<4} {:>7.0}%  {:<30} {}\n",
            f.code,
            f.bonus * 100.0,
            f.category.display_name(),
            f.label
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::ResolvedJam;
    use crate::domain::{JamCategory, OutputMode};
    use crate::sim::SimulationOutcome;

    fn sample_run() -> RunOutput {
        RunOutput {
            jams: vec![
                ResolvedJam {
                    descriptor: "R2x2".to_string(),
                    code: "R2",
                    category: JamCategory::Racial,
                    count: 2,
                    strength: 4.5,
                },
                ResolvedJam {
                    descriptor: "D3".to_string(),
                    code: "D3",
                    category: JamCategory::Drone,
                    count: 1,
                    strength: 1.0,
                },
            ],
            skill_multiplier: 1.25,
            fitting_multiplier: 1.0,
            probability: 0.43,
            percent: 43,
            simulation: None,
        }
    }

    #[test]
    fn text_lists_jammers_then_probability() {
        let text = format_run(&sample_run());
        assert_eq!(text, "R2x2 str=4.50\nD3 str=1.00\njam probability: 43%\n");
    }

    #[test]
    fn text_includes_simulation_line() {
        let mut run = sample_run();
        run.simulation = Some(SimulationOutcome {
            trials: 1000,
            seed: 9,
            jams: 431,
        });
        let text = format_run(&run);
        assert!(text.ends_with("simulated: 43.10% over 1000 trials (seed 9)\n"), "{text}");
    }

    #[test]
    fn json_carries_strengths_and_percent() {
        let config = JamConfig {
            jams: Vec::new(),
            fittings: Vec::new(),
            resist: 20.0,
            skill: 5,
            hull_fraction: 0.0,
            trials: 0,
            seed: 42,
            output: OutputMode::Json,
        };
        let payload = format_json(&sample_run(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["percent"], 43);
        assert_eq!(value["jammers"][0]["descriptor"], "R2x2");
        assert_eq!(value["jammers"][0]["category"], "racial");
        assert_eq!(value["jammers"][1]["strength"], 1.0);
        assert!(value.get("simulation").is_none());
    }

    #[test]
    fn catalog_listing_covers_every_code() {
        let listing = format_catalogs();
        for code in catalog::jammers().codes().into_iter().chain(catalog::fittings().codes()) {
            assert!(listing.contains(code), "missing {code}");
        }
        assert!(listing.contains("mismatched racial"));
    }
}
