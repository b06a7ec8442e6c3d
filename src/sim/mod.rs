//! Seeded Monte Carlo cross-check of the closed-form jam probability.
//!
//! Each trial rolls every unit once with success chance
//! `strength / resist` (clamped to `[0, 1]`); the trial counts as a jam if
//! any unit lands. Results are reproducible for a given seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub trials: u64,
    pub seed: u64,
    pub jams: u64,
}

impl SimulationOutcome {
    /// Observed jam fraction.
    pub fn rate(&self) -> f64 {
        self.jams as f64 / self.trials as f64
    }
}

/// Roll `trials` jam cycles against `resist`.
pub fn simulate_jam_rate(
    unit_strengths: &[f64],
    resist: f64,
    trials: u64,
    seed: u64,
) -> Result<SimulationOutcome, CalcError> {
    if trials == 0 {
        return Err(CalcError::out_of_range("trials", trials, "> 0"));
    }
    if !(resist.is_finite() && resist > 0.0) {
        return Err(CalcError::out_of_range("resist", resist, "> 0"));
    }

    let chances: Vec<f64> = unit_strengths
        .iter()
        .map(|&strength| (strength / resist).clamp(0.0, 1.0))
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut jams = 0u64;
    for _ in 0..trials {
        if chances.iter().any(|&p| rng.gen_bool(p)) {
            jams += 1;
        }
    }

    tracing::debug!(trials, seed, jams, "monte carlo finished");

    Ok(SimulationOutcome { trials, seed, jams })
}
