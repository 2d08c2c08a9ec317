//! Armor soft floor, damage conversion and per-type resistance

use crate::types::DamageType;

/// Reduce base damage by armor
///
/// Armor at or above the damage collapses the hit to `1 + damage/armor`
/// instead of subtracting linearly. Non-positive armor does nothing.
pub fn apply_armor(base_damage: f64, armor: f64) -> f64 {
    if armor <= 0.0 {
        return base_damage;
    }
    if armor + 1.0 >= base_damage {
        1.0 + base_damage / armor
    } else {
        base_damage - armor
    }
}

/// Share of damage left after resistance, capped by the max resistance stat
pub fn resistance_term(resistance: f64, max_resistance: f64) -> f64 {
    (1.0 - resistance).min(max_resistance)
}

/// Split damage across types before resistances
///
/// Positive `damageAs` ratios on non-primary types each take a share; when
/// they sum above 1 they are normalized. The primary type keeps what is
/// left. Entries come back primary first, then in [`DamageType::all`] order,
/// and types with nothing allocated are omitted.
pub fn convert_damage(
    damage: f64,
    primary: DamageType,
    conversion: impl Fn(DamageType) -> f64,
) -> Vec<(DamageType, f64)> {
    let ratios: Vec<(DamageType, f64)> = DamageType::all()
        .iter()
        .copied()
        .filter(|&damage_type| damage_type != primary)
        .map(|damage_type| (damage_type, conversion(damage_type)))
        .collect();

    let total: f64 = ratios.iter().map(|(_, ratio)| ratio).sum();
    let mut split = Vec::with_capacity(ratios.len() + 1);

    let remaining = damage * (1.0 - total).max(0.0);
    if remaining > 0.0 {
        split.push((primary, remaining));
    }

    for (damage_type, ratio) in ratios {
        if ratio <= 0.0 {
            continue;
        }
        let share = if total > 1.0 { ratio / total } else { ratio };
        split.push((damage_type, damage * share));
    }
    split
}

/// Round one resisted amount, floor it at 1 and cap it
///
/// Returns `(dealt, over_damage)`; an amount that rounds to nothing deals 0.
pub fn cap_instance(amount: f64, cap: f64) -> (f64, f64) {
    let rounded = amount.max(0.0).round();
    if rounded <= 0.0 {
        return if amount > 0.0 { (1.0, 0.0) } else { (0.0, 0.0) };
    }
    let dealt = rounded.min(cap).max(1.0);
    (dealt, (rounded - dealt).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_soft_floor() {
        assert!((apply_armor(100.0, 40.0) - 60.0).abs() < f64::EPSILON);
        assert!((apply_armor(100.0, 200.0) - 1.5).abs() < f64::EPSILON);
        assert!((apply_armor(100.0, 99.0) - (1.0 + 100.0 / 99.0)).abs() < f64::EPSILON);
        assert!((apply_armor(100.0, 0.0) - 100.0).abs() < f64::EPSILON);
        assert!((apply_armor(100.0, -10.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resistance_uses_cap() {
        assert!((resistance_term(-0.5, 0.2) - 0.2).abs() < f64::EPSILON);
        assert!((resistance_term(0.5, 0.8) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_conversion_half_to_fire() {
        let split = convert_damage(100.0, DamageType::Physical, |t| {
            if t == DamageType::Fire {
                0.5
            } else {
                0.0
            }
        });
        assert_eq!(split, vec![(DamageType::Physical, 50.0), (DamageType::Fire, 50.0)]);
    }

    #[test]
    fn test_conversion_normalizes() {
        let split = convert_damage(90.0, DamageType::Holy, |t| match t {
            DamageType::Fire | DamageType::Ice | DamageType::Lightning => 0.5,
            _ => 0.0,
        });
        assert_eq!(split.len(), 3);
        for (damage_type, amount) in split {
            assert_ne!(damage_type, DamageType::Holy);
            assert!((amount - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_primary_conversion_ratio_is_ignored() {
        let split = convert_damage(10.0, DamageType::Magical, |t| {
            if t == DamageType::Magical {
                1.0
            } else {
                0.0
            }
        });
        assert_eq!(split, vec![(DamageType::Magical, 10.0)]);
    }

    #[test]
    fn test_cap_instance() {
        assert_eq!(cap_instance(0.2, 1e9), (1.0, 0.0));
        assert_eq!(cap_instance(0.0, 1e9), (0.0, 0.0));
        assert_eq!(cap_instance(12.6, 1e9), (13.0, 0.0));
        assert_eq!(cap_instance(2500.0, 1000.0), (1000.0, 1500.0));
    }
}
