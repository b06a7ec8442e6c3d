//! Stacking-penalized fitting bonuses.
//!
//! Bonuses are ranked strongest first. The bonus at 0-indexed rank `n` is
//! scaled by
//!
//! ```text
//! penalty(n) = exp(-(n / 2.67)^2)
//! ```
//!
//! and the scaled bonuses combine multiplicatively:
//! `Π (1 + bonus[n] * penalty(n))`. Rank 0 is unpenalized.

use crate::domain::FittingInstance;

pub const STACKING_PENALTY_SCALE: f64 = 2.67;

/// Penalty factor applied to the bonus at `rank`.
pub fn stacking_penalty(rank: usize) -> f64 {
    let x = rank as f64 / STACKING_PENALTY_SCALE;
    (-(x * x)).exp()
}

/// Combine raw fractional bonuses under the stacking penalty.
///
/// Input order does not matter; ranking is done here.
pub fn stacked_multiplier(bonuses: &[f64]) -> f64 {
    let mut ranked = bonuses.to_vec();
    ranked.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .iter()
        .enumerate()
        .map(|(rank, bonus)| 1.0 + bonus * stacking_penalty(rank))
        .product()
}

/// Strength multiplier from all fitted modules and rigs. Exactly 1.0 with none.
pub fn fitting_multiplier(fittings: &[FittingInstance]) -> f64 {
    let bonuses: Vec<f64> = fittings
        .iter()
        .flat_map(|f| std::iter::repeat_n(f.kind.bonus, usize::from(f.count)))
        .collect();
    stacked_multiplier(&bonuses)
}
