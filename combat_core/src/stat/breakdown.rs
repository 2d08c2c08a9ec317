//! StatBreakdown - every stage of one stat resolution

use super::Stat;

/// Intermediate values of the stat pipeline
///
/// `value = finish(bonus × multiplier + extra_bonus)` where `bonus` already
/// includes `base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBreakdown {
    pub stat: Stat,
    /// Base value (computed for ratings)
    pub base: f64,
    /// Base plus every additive bonus
    pub bonus: f64,
    /// Product of all multipliers
    pub multiplier: f64,
    /// Sum of flat bonuses applied after multipliers
    pub extra_bonus: f64,
    /// Rounded and clamped result
    pub value: f64,
}

impl StatBreakdown {
    /// Value before rounding and clamping
    pub fn raw(&self) -> f64 {
        self.bonus * self.multiplier + self.extra_bonus
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{}: {:.2}", self.stat, self.value)];

        let added = self.bonus - self.base;
        if added.abs() > f64::EPSILON {
            parts.push(format!("base {:.2} {:+.2}", self.base, added));
        }
        if (self.multiplier - 1.0).abs() > f64::EPSILON {
            parts.push(format!("x{:.3}", self.multiplier));
        }
        if self.extra_bonus.abs() > f64::EPSILON {
            parts.push(format!("extra {:+.2}", self.extra_bonus));
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attribute;

    #[test]
    fn test_summary() {
        let breakdown = StatBreakdown {
            stat: Stat::Attribute(Attribute::Strength),
            base: 10.0,
            bonus: 15.0,
            multiplier: 2.0,
            extra_bonus: 1.0,
            value: 31.0,
        };
        assert!((breakdown.raw() - 31.0).abs() < f64::EPSILON);
        let summary = breakdown.summary();
        assert!(summary.starts_with("strength: 31.00"));
        assert!(summary.contains("x2.000"));
    }
}
