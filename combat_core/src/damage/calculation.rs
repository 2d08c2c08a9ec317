//! Damage calculation - one swing from attacker stats to typed damage instances

use super::{apply_armor, cap_instance, convert_damage, resistance_term, Luck};
use crate::config::DamageConstants;
use crate::stat::{Stat, StatContext, StatView};
use crate::types::{AttackType, Attribute, DamageType, HeroStance};
use crate::unit::Unit;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Damage of one type dealt by one swing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageInstance {
    pub damage: f64,
    pub damage_type: DamageType,
}

/// Result of resolving one swing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageOutcome {
    pub damages: Vec<DamageInstance>,
    /// Damage beyond the per-instance ceiling
    pub over_damage: f64,
    pub critical: bool,
    pub double_critical: bool,
}

impl DamageOutcome {
    /// Damage dealt across every instance, excluding over-damage
    pub fn total(&self) -> f64 {
        self.damages.iter().map(|instance| instance.damage).sum()
    }
}

/// Everything about a swing that does not need a roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageValues {
    /// Weapon damage after armor
    pub base_damage: f64,
    pub damage_type: DamageType,
    /// Largest amount the variance roll can remove
    pub variation: f64,
    pub critical_chance: f64,
    pub double_critical_chance: f64,
    pub triple_critical_chance: f64,
    pub can_only_take_one_damage: bool,
    /// Attacker amplification times victim reduction
    pub multiplier: f64,
}

/// Nominal damage type of an attack
pub fn damage_type_for(attack_type: AttackType, stance: HeroStance) -> DamageType {
    match attack_type {
        AttackType::Melee | AttackType::Ranged => DamageType::Physical,
        AttackType::Cast | AttackType::Blood => DamageType::Magical,
        AttackType::Smite if stance == HeroStance::Blight => DamageType::Blight,
        AttackType::Smite => DamageType::Holy,
    }
}

/// Deterministic part of the damage pipeline for `attacker` hitting `victim`
pub fn calculate_damage_values(
    attacker: &Unit,
    victim: &Unit,
    is_second: bool,
    ctx: &mut StatContext<'_>,
) -> DamageValues {
    let attacker_view = StatView::new(attacker, Some(victim));
    let victim_view = StatView::new(victim, Some(attacker));
    let attack_type = attacker.attack_type;

    let armor = (victim_view.resolve(ctx, Stat::Armor)
        * victim_view.resolve(ctx, Stat::PercentageArmorReduction))
    .max(0.0);
    let base_damage = apply_armor(attacker_view.base_damage(ctx, is_second), armor);

    let luck = Luck::new(attacker_view.resolve(ctx, Stat::Attribute(Attribute::Luck)));
    let (critical_chance, double_critical_chance, triple_critical_chance) = if attack_type == AttackType::Blood {
        (0.0, 0.0, 0.0)
    } else if attacker.class.is_gambler() {
        (luck.large, luck.ultra, luck.ultra / 2.0)
    } else {
        (luck.large, luck.ultra, 0.0)
    };

    let variation = base_damage * 0.2 * (1.0 - luck.small)
        + base_damage * 0.1 * (1.0 - luck.large)
        + base_damage * 0.1 * (1.0 - luck.ultra);

    let multiplier = attacker_view.resolve(ctx, Stat::PercentageDamageIncrease)
        * victim_view.resolve(ctx, Stat::PercentageDamageReduction);

    DamageValues {
        base_damage,
        damage_type: damage_type_for(attack_type, attacker.stance),
        variation,
        critical_chance,
        double_critical_chance,
        triple_critical_chance,
        can_only_take_one_damage: victim_view.resolve(ctx, Stat::CanOnlyTakeOneDamage) > 0.0,
        multiplier,
    }
}

/// Resolve one swing: variance, crit cascade, multipliers, conversion and
/// per-type resistance
pub fn calculate_damage(
    attacker: &Unit,
    victim: &Unit,
    is_second: bool,
    constants: &DamageConstants,
    rng: &mut impl Rng,
) -> DamageOutcome {
    let mut ctx = StatContext::new();
    let values = calculate_damage_values(attacker, victim, is_second, &mut ctx);

    let mut damage = (values.base_damage - values.variation * rng.gen::<f64>()).max(1.0);
    let mut critical = false;
    let mut double_critical = false;

    if rng.gen::<f64>() < values.critical_chance {
        critical = true;
        damage *= 2.0;
        if rng.gen::<f64>() < values.double_critical_chance {
            double_critical = true;
            damage *= 3.0;
            if rng.gen::<f64>() < values.triple_critical_chance {
                damage *= 3.0;
            }
        }
    }

    damage *= values.multiplier;

    let attacker_view = StatView::new(attacker, Some(victim));
    let victim_view = StatView::new(victim, Some(attacker));
    let conversions: Vec<(DamageType, f64)> = DamageType::all()
        .iter()
        .map(|&damage_type| (damage_type, attacker_view.resolve(&mut ctx, Stat::DamageAs(damage_type))))
        .collect();
    let split = convert_damage(damage, values.damage_type, |damage_type| {
        conversions
            .iter()
            .find(|(entry, _)| *entry == damage_type)
            .map(|(_, ratio)| *ratio)
            .unwrap_or(0.0)
    });

    let mut outcome = DamageOutcome {
        critical,
        double_critical,
        ..DamageOutcome::default()
    };

    for (damage_type, amount) in split {
        let term = resistance_term(
            victim_view.resolve(&mut ctx, Stat::Resistance(damage_type)),
            victim_view.resolve(&mut ctx, Stat::MaxResistance(damage_type)),
        );
        let (dealt, over) = cap_instance(amount * term, constants.max_damage_per_instance);
        if dealt > 0.0 {
            outcome.damages.push(DamageInstance {
                damage: dealt,
                damage_type,
            });
        }
        outcome.over_damage += over;
    }

    if values.can_only_take_one_damage {
        for instance in &mut outcome.damages {
            instance.damage = 1.0;
        }
        outcome.over_damage = 0.0;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRecord;
    use crate::modifier::{GenericStatsModifier, ModifierSource};
    use crate::types::{HeroClass, ItemType};
    use rand::rngs::mock::StepRng;

    /// Every roll is 0: no variance, every crit lands
    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// First roll 0, then rolls just below 1: no variance, no crits
    fn steady_rng() -> StepRng {
        StepRng::new(0, u64::MAX)
    }

    fn pair() -> (Unit, Unit) {
        let attacker = Unit::new("attacker", HeroClass::Fighter, AttackType::Melee);
        let victim = Unit::new("victim", HeroClass::Fighter, AttackType::Melee);
        (attacker, victim)
    }

    #[test]
    fn test_damage_type_mapping() {
        assert_eq!(damage_type_for(AttackType::Ranged, HeroStance::Normal), DamageType::Physical);
        assert_eq!(damage_type_for(AttackType::Blood, HeroStance::Normal), DamageType::Magical);
        assert_eq!(damage_type_for(AttackType::Smite, HeroStance::Normal), DamageType::Holy);
        assert_eq!(damage_type_for(AttackType::Smite, HeroStance::Blight), DamageType::Blight);
        assert_eq!(damage_type_for(AttackType::Melee, HeroStance::Blight), DamageType::Physical);
    }

    #[test]
    fn test_values_without_armor() {
        let (attacker, victim) = pair();
        let values = calculate_damage_values(&attacker, &victim, false, &mut StatContext::new());
        assert!((values.base_damage - 21.0).abs() < f64::EPSILON);
        assert!((values.multiplier - 1.0).abs() < f64::EPSILON);
        assert!(!values.can_only_take_one_damage);
        assert!(values.triple_critical_chance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_blood_never_crits() {
        let (mut attacker, victim) = pair();
        attacker.attack_type = AttackType::Blood;
        attacker.set_base(Attribute::Luck.into(), 5000.0);
        let values = calculate_damage_values(&attacker, &victim, false, &mut StatContext::new());
        assert!(values.critical_chance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_gamblers_get_triple_crit_chance() {
        let (mut attacker, victim) = pair();
        attacker.class = HeroClass::Gambler;
        attacker.set_base(Attribute::Luck.into(), 10000.0);
        let values = calculate_damage_values(&attacker, &victim, false, &mut StatContext::new());
        assert!((values.triple_critical_chance - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_armor_reduction_stat_scales_armor() {
        let (attacker, mut victim) = pair();
        victim.equip_item(ItemRecord::new("plate", ItemType::BodyArmor, 10));
        let armored = calculate_damage_values(&attacker, &victim, false, &mut StatContext::new());
        // 147 armor against 21 damage
        assert!((armored.base_damage - (1.0 + 21.0 / 147.0)).abs() < 1e-12);

        victim.apply_modifier(
            Box::new(GenericStatsModifier::new().with_multiplier(Stat::PercentageArmorReduction, 0.0)),
            ModifierSource::Injected,
            None,
        );
        let stripped = calculate_damage_values(&attacker, &victim, false, &mut StatContext::new());
        assert!((stripped.base_damage - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_roll_means_no_variance() {
        let (attacker, victim) = pair();
        let outcome = calculate_damage(&attacker, &victim, false, &DamageConstants::default(), &mut steady_rng());
        assert!(!outcome.critical);
        // 21 physical at the default 0.8 cap
        assert_eq!(
            outcome.damages,
            vec![DamageInstance {
                damage: 17.0,
                damage_type: DamageType::Physical
            }]
        );
    }

    #[test]
    fn test_zero_roll_crits() {
        let (mut attacker, victim) = pair();
        attacker.set_base(Attribute::Luck.into(), 1000.0);
        let outcome = calculate_damage(&attacker, &victim, false, &DamageConstants::default(), &mut zero_rng());
        assert!(outcome.critical);
        assert!(outcome.double_critical);
    }

    #[test]
    fn test_converted_damage_uses_own_cap() {
        let (mut attacker, mut victim) = pair();
        attacker.set_base(Stat::IncreasedBaseDamage, 99.0);
        attacker.set_base(Stat::DamageAs(DamageType::Fire), 0.5);
        victim.set_base(Stat::MaxResistance(DamageType::Fire), 0.2);
        victim.set_base(Stat::Resistance(DamageType::Fire), -0.5);

        let outcome = calculate_damage(&attacker, &victim, false, &DamageConstants::default(), &mut steady_rng());
        let fire = outcome
            .damages
            .iter()
            .find(|instance| instance.damage_type == DamageType::Fire)
            .unwrap();
        assert!((fire.damage - 10.0).abs() < f64::EPSILON);
        let physical = outcome
            .damages
            .iter()
            .find(|instance| instance.damage_type == DamageType::Physical)
            .unwrap();
        assert!((physical.damage - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_over_damage_beyond_cap() {
        let (mut attacker, victim) = pair();
        attacker.set_base(Stat::IncreasedBaseDamage, 9999.0);
        let constants = DamageConstants {
            max_damage_per_instance: 100.0,
        };
        let outcome = calculate_damage(&attacker, &victim, false, &constants, &mut steady_rng());
        assert!((outcome.damages[0].damage - 100.0).abs() < f64::EPSILON);
        assert!((outcome.over_damage - 7900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_can_only_take_one_damage() {
        let (mut attacker, mut victim) = pair();
        attacker.set_base(Stat::IncreasedBaseDamage, 9999.0);
        attacker.set_base(Stat::DamageAs(DamageType::Ice), 0.3);
        victim.set_base(Stat::CanOnlyTakeOneDamage, 1.0);
        let constants = DamageConstants {
            max_damage_per_instance: 100.0,
        };
        let outcome = calculate_damage(&attacker, &victim, false, &constants, &mut steady_rng());
        assert_eq!(outcome.damages.len(), 2);
        assert!(outcome.damages.iter().all(|instance| (instance.damage - 1.0).abs() < f64::EPSILON));
        assert!(outcome.over_damage.abs() < f64::EPSILON);
    }
}
