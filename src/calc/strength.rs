//! Effective jam strength after pilot, hull and fitting bonuses.

use crate::domain::JammerKind;

/// Strength bonus per pilot skill level (+5% per level).
pub const SKILL_BONUS_PER_LEVEL: f64 = 0.05;

pub fn skill_multiplier(skill: u8) -> f64 {
    1.0 + SKILL_BONUS_PER_LEVEL * f64::from(skill)
}

/// Resolve a jammer's strength.
///
/// Drones ignore every bonus. Everything else gets
/// `base * (1 + 0.05 * skill) * (1 + hull_fraction) * fitting_multiplier`.
pub fn effective_strength(
    kind: &JammerKind,
    skill: u8,
    hull_fraction: f64,
    fitting_multiplier: f64,
) -> f64 {
    if kind.category.is_bonus_immune() {
        return kind.strength;
    }
    kind.strength * skill_multiplier(skill) * (1.0 + hull_fraction) * fitting_multiplier
}
