//! Rating and hit-chance curves

use super::constants::{HIT_STEEPNESS, MAX_HIT_CHANCE, MIN_HIT_CHANCE, RATING_STEEPNESS, RATING_STRETCH};

/// `stretch · value^(1/steepness)`
pub fn diminishing_return(value: f64, stretch: f64, steepness: f64) -> f64 {
    stretch * value.max(0.0).powf(1.0 / steepness)
}

/// Attribute to attack/evasion rating
pub fn calculate_rating(value: f64) -> f64 {
    diminishing_return(value, RATING_STRETCH, RATING_STEEPNESS)
}

/// Sigmoid of the log ratio of two opposed values, scaled into `[min, max]`
///
/// Equal values (including two zeros) sit exactly at the midpoint.
pub fn opposed_sigmoid_odds(attacker: f64, defender: f64, steepness: f64, min: f64, max: f64) -> f64 {
    if attacker == defender {
        return min + (max - min) * 0.5;
    }
    let log_ratio = (attacker / defender).ln();
    let sigmoid = 1.0 / (1.0 + (-log_ratio * steepness).exp());
    if sigmoid.is_nan() {
        return min + (max - min) * 0.5;
    }
    min + (max - min) * sigmoid
}

pub fn calculate_hit_chance(attacker_rating: f64, defender_rating: f64) -> f64 {
    opposed_sigmoid_odds(
        attacker_rating,
        defender_rating,
        HIT_STEEPNESS,
        MIN_HIT_CHANCE,
        MAX_HIT_CHANCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_are_even() {
        for value in [0.0, 1.0, 42.0, 1e9] {
            assert!((opposed_sigmoid_odds(value, value, 1.0, 0.0, 1.0) - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_hit_chance_bounds() {
        assert!((calculate_hit_chance(100.0, 100.0) - 0.7).abs() < 1e-12);
        assert!((calculate_hit_chance(0.0, 100.0) - 0.4).abs() < f64::EPSILON);
        assert!((calculate_hit_chance(100.0, 0.0) - 1.0).abs() < f64::EPSILON);
        // twice the rating: 0.4 + 0.6 * 4/5
        assert!((calculate_hit_chance(200.0, 100.0) - 0.88).abs() < 1e-12);
    }

    #[test]
    fn test_rating_curve() {
        assert!((calculate_rating(1.0) - 8.0).abs() < f64::EPSILON);
        assert!(calculate_rating(1000.0) > calculate_rating(999.0));
        assert!(calculate_rating(10_000_000.0) < 100_000.0);
        assert!(calculate_rating(-5.0).abs() < f64::EPSILON);
    }
}
