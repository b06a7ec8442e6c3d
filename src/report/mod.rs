//! Reporting: a serializable summary of a run plus terminal formatting.

use serde::Serialize;

use crate::app::pipeline::RunOutput;
use crate::domain::{JamCategory, JamConfig};
use crate::sim::SimulationOutcome;

pub mod format;

pub use format::*;

#[derive(Debug, Clone, Serialize)]
pub struct JamReport {
    pub resist: f64,
    pub skill: u8,
    pub hull_bonus: f64,
    pub skill_multiplier: f64,
    pub fitting_multiplier: f64,
    pub fittings: Vec<String>,
    pub jammers: Vec<JammerLine>,
    pub probability: f64,
    pub percent: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JammerLine {
    pub descriptor: String,
    pub code: &'static str,
    pub category: JamCategory,
    pub count: u8,
    pub strength: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    #[serde(flatten)]
    pub outcome: SimulationOutcome,
    pub rate: f64,
}

pub fn build_report(run: &RunOutput, config: &JamConfig) -> JamReport {
    JamReport {
        resist: config.resist,
        skill: config.skill,
        hull_bonus: config.hull_fraction,
        skill_multiplier: run.skill_multiplier,
        fitting_multiplier: run.fitting_multiplier,
        fittings: config.fittings.iter().map(|f| f.descriptor.clone()).collect(),
        jammers: run
            .jams
            .iter()
            .map(|jam| JammerLine {
                descriptor: jam.descriptor.clone(),
                code: jam.code,
                category: jam.category,
                count: jam.count,
                strength: round2(jam.strength),
            })
            .collect(),
        probability: run.probability,
        percent: run.percent,
        simulation: run.simulation.map(|outcome| SimulationReport {
            outcome,
            rate: outcome.rate(),
        }),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
