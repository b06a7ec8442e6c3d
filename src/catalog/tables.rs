//! Jammer strengths and fitting bonuses.
//!
//! Declaration order is the enumeration order used by `--list`.

use crate::domain::FittingCategory::{
    ParticleDispersionAugmentor as Pda, SignalDistortionAmplifier as Sda,
};
use crate::domain::JamCategory::{Burst, Drone, MismatchedRacial, Multispectral, Racial};
use crate::domain::{FittingCategory, FittingKind, JamCategory, JammerKind};

const fn jammer(
    code: &'static str,
    strength: f64,
    category: JamCategory,
    label: &'static str,
) -> JammerKind {
    JammerKind {
        code,
        strength,
        category,
        label,
    }
}

const fn fitting(
    code: &'static str,
    bonus: f64,
    category: FittingCategory,
    label: &'static str,
) -> FittingKind {
    FittingKind {
        code,
        bonus,
        category,
        label,
    }
}

pub static JAMMERS: [JammerKind; 29] = [
    // Drones
    jammer("D3", 1.0, Drone, "light EC drone"),
    jammer("D6", 1.5, Drone, "medium EC drone"),
    jammer("D9", 2.0, Drone, "heavy EC drone"),
    // Multispectral
    jammer("M1", 2.2, Multispectral, "T1"),
    jammer("MM", 2.2, Multispectral, "Meta"),
    jammer("M2", 2.4, Multispectral, "T2"),
    jammer("ML", 2.5, Multispectral, "Legion"),
    jammer("MG", 2.6, Multispectral, "Dread Guristas"),
    jammer("MK", 2.8, Multispectral, "Kaikka's"),
    jammer("MT", 2.9, Multispectral, "Thon's"),
    jammer("MV", 3.1, Multispectral, "Vepas'"),
    jammer("ME", 3.2, Multispectral, "Estamel's"),
    // Racial, matched to the target's sensor type
    jammer("R1", 3.0, Racial, "T1"),
    jammer("RM", 3.3, Racial, "Meta"),
    jammer("R2", 3.6, Racial, "T2"),
    jammer("RS", 3.45, Racial, "Storyline"),
    jammer("RL", 3.7, Racial, "Legion"),
    // Racial, against the wrong sensor type
    jammer("X1", 1.0, MismatchedRacial, "T1"),
    jammer("XM", 1.1, MismatchedRacial, "Meta"),
    jammer("X2", 1.2, MismatchedRacial, "T2"),
    jammer("XS", 1.15, MismatchedRacial, "Storyline"),
    jammer("XL", 1.2, MismatchedRacial, "Legion"),
    // Burst
    jammer("B1", 1.8, Burst, "T1"),
    jammer("BM", 2.0, Burst, "Meta"),
    jammer("B2", 2.2, Burst, "T2"),
    jammer("BS", 2.1, Burst, "Storyline"),
    jammer("BL", 2.3, Burst, "Legion"),
    jammer("BG", 2.4, Burst, "Dread Guristas"),
    jammer("BP", 5.0, Burst, "Burst Projector"),
];

pub static FITTINGS: [FittingKind; 8] = [
    // Signal distortion amplifiers
    fitting("S1", 0.10, Sda, "T1"),
    fitting("SM", 0.12, Sda, "Meta"),
    fitting("S2", 0.15, Sda, "T2"),
    fitting("SL", 0.14, Sda, "Legion"),
    fitting("SG", 0.16, Sda, "Dread Guristas"),
    fitting("SK", 0.18, Sda, "Kaikka's"),
    // Particle dispersion augmentor rigs
    fitting("P1", 0.10, Pda, "T1 rig"),
    fitting("P2", 0.15, Pda, "T2 rig"),
];
