//! The calculation pipeline shared by the text and JSON front-ends:
//! fitting multiplier -> per-jammer strength -> combined probability ->
//! optional Monte Carlo check.

use crate::calc::{as_percent, combine_jam_probability, effective_strength, fitting_multiplier, skill_multiplier};
use crate::domain::{JamCategory, JamConfig};
use crate::error::CalcError;
use crate::sim::{SimulationOutcome, simulate_jam_rate};

/// One `--jam` argument after bonuses.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedJam {
    pub descriptor: String,
    pub code: &'static str,
    pub category: JamCategory,
    pub count: u8,
    /// Effective strength of a single unit.
    pub strength: f64,
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub jams: Vec<ResolvedJam>,
    pub skill_multiplier: f64,
    pub fitting_multiplier: f64,
    pub probability: f64,
    pub percent: i64,
    pub simulation: Option<SimulationOutcome>,
}

impl RunOutput {
    /// One strength per fitted unit, repeat counts expanded.
    pub fn unit_strengths(&self) -> Vec<f64> {
        self.jams
            .iter()
            .flat_map(|jam| std::iter::repeat_n(jam.strength, usize::from(jam.count)))
            .collect()
    }
}

pub fn run_calc(config: &JamConfig) -> Result<RunOutput, CalcError> {
    let fitting_multiplier = fitting_multiplier(&config.fittings);
    tracing::debug!(fitting_multiplier, fittings = config.fittings.len(), "fittings stacked");

    let jams: Vec<ResolvedJam> = config
        .jams
        .iter()
        .map(|jam| {
            let strength = effective_strength(
                jam.kind,
                config.skill,
                config.hull_fraction,
                fitting_multiplier,
            );
            tracing::debug!(%jam, strength, "resolved jammer");
            if strength > config.resist {
                tracing::warn!(
                    descriptor = %jam.descriptor,
                    strength,
                    resist = config.resist,
                    "jammer strength exceeds target resist"
                );
            }
            ResolvedJam {
                descriptor: jam.descriptor.clone(),
                code: jam.kind.code,
                category: jam.kind.category,
                count: jam.count,
                strength,
            }
        })
        .collect();

    let mut run = RunOutput {
        jams,
        skill_multiplier: skill_multiplier(config.skill),
        fitting_multiplier,
        probability: 0.0,
        percent: 0,
        simulation: None,
    };

    let strengths = run.unit_strengths();
    run.probability = combine_jam_probability(&strengths, config.resist);
    run.percent = as_percent(run.probability);
    tracing::info!(probability = run.probability, units = strengths.len(), "jam probability computed");

    if config.trials > 0 {
        run.simulation = Some(simulate_jam_rate(&strengths, config.resist, config.trials, config.seed)?);
    }

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputMode;
    use crate::parse::{parse_fitting, parse_jam};

    fn config(jams: &[&str], fittings: &[&str], skill: u8, hull_fraction: f64) -> JamConfig {
        JamConfig {
            jams: jams.iter().map(|d| parse_jam(d).unwrap()).collect(),
            fittings: fittings.iter().map(|d| parse_fitting(d).unwrap()).collect(),
            resist: 20.0,
            skill,
            hull_fraction,
            trials: 0,
            seed: 42,
            output: OutputMode::Text,
        }
    }

    #[test]
    fn drone_example() {
        let run = run_calc(&config(&["D3"], &[], 5, 0.0)).unwrap();
        assert!((run.jams[0].strength - 1.0).abs() < 1e-12);
        assert_eq!(run.percent, 5);
    }

    #[test]
    fn multispectral_example() {
        let run = run_calc(&config(&["M2"], &[], 5, 0.0)).unwrap();
        assert!((run.jams[0].strength - 3.0).abs() < 1e-9);
        assert_eq!(run.percent, 15);
    }

    #[test]
    fn repeated_racial_example() {
        let run = run_calc(&config(&["R2x2"], &[], 5, 0.0)).unwrap();
        assert_eq!(run.unit_strengths().len(), 2);
        assert!((run.jams[0].strength - 4.5).abs() < 1e-9);
        assert!((run.probability - 0.399375).abs() < 1e-9);
        assert_eq!(run.percent, 40);
    }

    #[test]
    fn drones_unaffected_in_mixed_fit() {
        let run = run_calc(&config(&["D9", "M2"], &["S2x2"], 5, 0.25)).unwrap();
        assert_eq!(run.jams[0].strength, 2.0);
        assert!(run.jams[1].strength > 3.0 * 1.25);
    }

    #[test]
    fn bonuses_raise_probability() {
        let base = run_calc(&config(&["M2", "R1"], &[], 3, 0.0)).unwrap().probability;
        let skilled = run_calc(&config(&["M2", "R1"], &[], 4, 0.0)).unwrap().probability;
        let hulled = run_calc(&config(&["M2", "R1"], &[], 3, 0.3)).unwrap().probability;
        let fitted = run_calc(&config(&["M2", "R1"], &["P1"], 3, 0.0)).unwrap().probability;
        assert!(skilled > base);
        assert!(hulled > base);
        assert!(fitted > base);
    }

    #[test]
    fn trials_enable_simulation() {
        let mut cfg = config(&["R2x2"], &[], 5, 0.0);
        cfg.trials = 50_000;
        let run = run_calc(&cfg).unwrap();
        let sim = run.simulation.unwrap();
        assert_eq!(sim.trials, 50_000);
        assert!((sim.rate() - run.probability).abs() < 0.02);
    }
}
