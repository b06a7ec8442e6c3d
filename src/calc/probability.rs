//! Aggregate jam probability.
//!
//! Every fitted unit rolls independently. A unit fails to jam with chance
//! `(resist - strength) / resist`; the run jams unless all of them fail.

/// Chance that a single unit fails to jam.
///
/// Goes negative once `strength > resist`. That is left alone: such a unit
/// is a guaranteed jam and the combined figure simply overshoots.
pub fn failure_chance(strength: f64, resist: f64) -> f64 {
    (resist - strength) / resist
}

/// `1 - Π failure_chance` over every unit. `strengths` has one entry per unit
/// (repeat counts already expanded); `resist` must be > 0.
pub fn combine_jam_probability(strengths: &[f64], resist: f64) -> f64 {
    let all_fail: f64 = strengths
        .iter()
        .map(|&strength| failure_chance(strength, resist))
        .product();
    1.0 - all_fail
}

/// Probability as a whole-number percentage, rounded to nearest.
pub fn as_percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_drone() {
        let p = combine_jam_probability(&[1.0], 20.0);
        assert!((p - 0.05).abs() < 1e-12);
        assert_eq!(as_percent(p), 5);
    }

    #[test]
    fn two_independent_units() {
        let p = combine_jam_probability(&[4.5, 4.5], 20.0);
        assert!((p - (1.0 - 0.600625)).abs() < 1e-12);
        assert_eq!(as_percent(p), 40);
    }

    #[test]
    fn no_units_never_jam() {
        assert_eq!(combine_jam_probability(&[], 20.0), 0.0);
    }

    #[test]
    fn overwhelming_strength_is_not_clamped() {
        let p = combine_jam_probability(&[25.0], 20.0);
        assert!((p - 1.25).abs() < 1e-12);
        assert_eq!(as_percent(p), 125);
    }

    #[test]
    fn stronger_unit_raises_probability() {
        let weak = combine_jam_probability(&[3.0, 2.0], 20.0);
        let strong = combine_jam_probability(&[3.5, 2.0], 20.0);
        assert!(strong > weak);
    }
}
