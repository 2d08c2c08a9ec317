//! Base values, rounding precisions and clamps for a unit

use super::Stat;
use crate::types::Attribute;
use std::collections::HashMap;

/// Round `value` to the nearest multiple of `precision` (0 disables rounding)
pub fn round_to(value: f64, precision: f64) -> f64 {
    if precision <= 0.0 {
        return value;
    }
    (value / precision).round() * precision
}

/// Per-unit stat inputs: base values, precisions and clamps
#[derive(Debug, Clone)]
pub struct StatTable {
    base_values: HashMap<Stat, f64>,
    precisions: HashMap<Stat, f64>,
    clamps: HashMap<Stat, (f64, f64)>,
}

impl Default for StatTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl StatTable {
    /// An empty table (every base 0, no rounding, no clamps)
    pub fn empty() -> Self {
        StatTable {
            base_values: HashMap::new(),
            precisions: HashMap::new(),
            clamps: HashMap::new(),
        }
    }

    /// The documented defaults every unit starts from
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();

        for stat in Stat::all() {
            table.base_values.insert(stat, default_base(stat));
        }

        for &attribute in Attribute::all() {
            table.precisions.insert(Stat::Attribute(attribute), 1.0);
            table.clamps.insert(Stat::Attribute(attribute), (1.0, f64::INFINITY));
            table.clamps.insert(Stat::Steal(attribute), (0.0, 1.0));
        }
        for stat in [Stat::Health, Stat::AttackRating, Stat::EvasionRating, Stat::Armor] {
            table.precisions.insert(stat, 1.0);
        }
        table.clamps.insert(Stat::Health, (1.0, f64::INFINITY));
        table.clamps.insert(Stat::RangedAttackSpeedMultiplier, (1.0, f64::INFINITY));

        for &damage_type in crate::types::DamageType::all() {
            table.clamps.insert(Stat::Resistance(damage_type), (f64::NEG_INFINITY, 1.0));
            table.clamps.insert(Stat::MaxResistance(damage_type), (0.0, 1.0));
        }

        table
    }

    pub fn base(&self, stat: Stat) -> f64 {
        self.base_values.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn set_base(&mut self, stat: Stat, value: f64) {
        self.base_values.insert(stat, value);
    }

    pub fn precision(&self, stat: Stat) -> f64 {
        self.precisions.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn set_precision(&mut self, stat: Stat, precision: f64) {
        self.precisions.insert(stat, precision);
    }

    pub fn clamp(&self, stat: Stat) -> Option<(f64, f64)> {
        self.clamps.get(&stat).copied()
    }

    pub fn set_clamp(&mut self, stat: Stat, min: f64, max: f64) {
        self.clamps.insert(stat, (min, max));
    }

    /// Final rounding and clamping stage
    pub fn finish(&self, stat: Stat, value: f64) -> f64 {
        let rounded = round_to(value, self.precision(stat));
        match self.clamp(stat) {
            Some((min, max)) => rounded.max(min).min(max),
            None => rounded,
        }
    }
}

fn default_base(stat: Stat) -> f64 {
    match stat {
        Stat::Attribute(_) => 1.0,
        Stat::Steal(_) | Stat::AttributeMultiplier(_) => 0.0,
        Stat::DamageAs(_) | Stat::Resistance(_) => 0.0,
        Stat::MaxResistance(_) => 0.8,
        Stat::PercentageDamageIncrease
        | Stat::PercentageDamageReduction
        | Stat::PercentageEnchantmentDamageReduction
        | Stat::PercentageArmorReduction => 1.0,
        Stat::BonusDodge | Stat::BonusAccuracy => 1.0,
        Stat::MesmerizeChance | Stat::FocusChance => 1.0,
        Stat::RangedAttackSpeedMultiplier => 1.0,
        Stat::IncreasedBaseDamage => 20.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DamageType;

    #[test]
    fn test_round_to() {
        assert!((round_to(12.4, 1.0) - 12.0).abs() < f64::EPSILON);
        assert!((round_to(12.26, 0.5) - 12.5).abs() < f64::EPSILON);
        assert!((round_to(12.26, 0.0) - 12.26).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults() {
        let table = StatTable::with_defaults();
        assert!((table.base(Stat::Attribute(Attribute::Strength)) - 1.0).abs() < f64::EPSILON);
        assert!((table.base(Stat::MaxResistance(DamageType::Fire)) - 0.8).abs() < f64::EPSILON);
        assert!((table.base(Stat::IncreasedBaseDamage) - 20.0).abs() < f64::EPSILON);
        assert!((table.base(Stat::PercentageDamageIncrease) - 1.0).abs() < f64::EPSILON);
        assert!(table.base(Stat::Steal(Attribute::Luck)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_finish_clamps() {
        let table = StatTable::with_defaults();
        assert!((table.finish(Stat::Resistance(DamageType::Ice), 3.0) - 1.0).abs() < f64::EPSILON);
        assert!((table.finish(Stat::MaxResistance(DamageType::Ice), -0.3)).abs() < f64::EPSILON);
        assert!((table.finish(Stat::Attribute(Attribute::Wisdom), 0.2) - 1.0).abs() < f64::EPSILON);
        assert!((table.finish(Stat::Health, 10.6) - 11.0).abs() < f64::EPSILON);
    }
}
