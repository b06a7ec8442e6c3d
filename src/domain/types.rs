//! Shared domain types.
//!
//! Catalog records (`JammerKind`, `FittingKind`) are `'static` and never
//! mutated; instances parsed from the command line borrow them.

use serde::Serialize;

/// Largest repeat count a descriptor suffix can carry (`x1`..`x9`).
pub const MAX_REPEAT: u8 = 9;

/// Jammer family. Only `Drone` is immune to pilot, hull and fitting bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JamCategory {
    Drone,
    Multispectral,
    Racial,
    MismatchedRacial,
    Burst,
}

impl JamCategory {
    pub const ALL: [JamCategory; 5] = [
        JamCategory::Drone,
        JamCategory::Multispectral,
        JamCategory::Racial,
        JamCategory::MismatchedRacial,
        JamCategory::Burst,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            JamCategory::Drone => "drone",
            JamCategory::Multispectral => "multispectral",
            JamCategory::Racial => "racial",
            JamCategory::MismatchedRacial => "mismatched racial",
            JamCategory::Burst => "burst",
        }
    }

    pub fn is_bonus_immune(self) -> bool {
        matches!(self, JamCategory::Drone)
    }
}

/// Fitting family. Both families stack with each other under one penalty chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingCategory {
    SignalDistortionAmplifier,
    ParticleDispersionAugmentor,
}

impl FittingCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            FittingCategory::SignalDistortionAmplifier => "signal distortion amplifier",
            FittingCategory::ParticleDispersionAugmentor => "particle dispersion augmentor",
        }
    }
}

/// A jam source from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JammerKind {
    pub code: &'static str,
    pub strength: f64,
    pub category: JamCategory,
    pub label: &'static str,
}

/// A strength-boosting fitting from the catalog. `bonus` is fractional (0.10 = +10%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittingKind {
    pub code: &'static str,
    pub bonus: f64,
    pub category: FittingCategory,
    pub label: &'static str,
}

/// One `--jam` argument: a catalog jammer fitted `count` times.
#[derive(Debug, Clone, PartialEq)]
pub struct JamInstance {
    pub kind: &'static JammerKind,
    pub count: u8,
    /// The descriptor exactly as the user typed it.
    pub descriptor: String,
}

impl std::fmt::Display for JamInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "jam={} str={} count={}",
            self.kind.code, self.kind.strength, self.count
        )
    }
}

/// One `--fitting` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct FittingInstance {
    pub kind: &'static FittingKind,
    pub count: u8,
    pub descriptor: String,
}

impl std::fmt::Display for FittingInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fitting={} bonus={} count={}",
            self.kind.code, self.kind.bonus, self.count
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Validated inputs for a single calculation.
#[derive(Debug, Clone)]
pub struct JamConfig {
    pub jams: Vec<JamInstance>,
    pub fittings: Vec<FittingInstance>,
    /// Target sensor strength; always finite and > 0.
    pub resist: f64,
    /// Pilot skill level in `1..=5`.
    pub skill: u8,
    /// Hull bonus as a fraction (the CLI takes percent).
    pub hull_fraction: f64,
    /// Monte Carlo trials; 0 disables the cross-check.
    pub trials: u64,
    pub seed: u64,
    pub output: OutputMode,
}
