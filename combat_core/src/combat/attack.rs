//! A single swing from one combatant at the other

use super::{CombatLogEntry, Combatant, LogEntryKind};
use crate::config::DamageConstants;
use crate::damage::{calculate_damage, calculate_hit, damage_type_for};
use crate::stat::Stat;
use crate::unit::Unit;
use rand::Rng;
use tracing::debug;

/// Everything one swing produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackResult {
    pub log: Vec<CombatLogEntry>,
    /// Weapon damage taken by the victim, over-damage included
    pub damage: f64,
    /// Life damage taken by the victim
    pub enchantment_damage: f64,
    /// Health the attacker regained
    pub heal: f64,
}

/// Resolve one swing of `attacker` at `victim`
///
/// Runs the mesmerize check, the hit roll and the damage pipeline, then the
/// attacker's enchantment ticks. Health is not touched; the caller applies
/// the returned deltas.
pub fn attack_combatant(
    attacker: &mut Combatant,
    victim: &Combatant,
    is_second: bool,
    constants: &DamageConstants,
    rng: &mut impl Rng,
) -> AttackResult {
    let swing_type = attacker.swing_attack_type(is_second);
    let previous = attacker.unit.attack_type;
    attacker.unit.attack_type = swing_type;
    let result = swing(attacker, victim, is_second, constants, rng);
    attacker.unit.attack_type = previous;
    result
}

fn swing(
    attacker: &Combatant,
    victim: &Combatant,
    is_second: bool,
    constants: &DamageConstants,
    rng: &mut impl Rng,
) -> AttackResult {
    let (unit, target) = (&attacker.unit, &victim.unit);
    let attack_type = unit.attack_type;
    let mut result = AttackResult::default();

    if is_mesmerized(unit, target, rng) {
        debug!(from = %attacker.name, to = %victim.name, "swing mesmerized");
        result.log.push(CombatLogEntry::new(
            LogEntryKind::Mesmerized,
            &attacker.name,
            &victim.name,
            attack_type,
        ));
        return result;
    }

    if calculate_hit(unit, target, rng) {
        let outcome = calculate_damage(unit, target, is_second, constants, rng);
        let dealt = outcome.total();
        debug!(
            from = %attacker.name,
            to = %victim.name,
            %attack_type,
            dealt,
            over_damage = outcome.over_damage,
            critical = outcome.critical,
            "swing hit"
        );

        if outcome.damages.is_empty() {
            let entry = CombatLogEntry::new(LogEntryKind::Attack, &attacker.name, &victim.name, attack_type)
                .with_damage(Some(damage_type_for(attack_type, unit.stance)), 0.0);
            result.log.push(entry);
        }
        for instance in &outcome.damages {
            let mut entry = CombatLogEntry::new(LogEntryKind::Attack, &attacker.name, &victim.name, attack_type)
                .with_damage(Some(instance.damage_type), instance.damage);
            entry.critical = outcome.critical;
            entry.double_critical = outcome.double_critical;
            result.log.push(entry);
        }
        result.damage = dealt + outcome.over_damage;

        let lifesteal = unit.stat_against(Stat::Lifesteal, target);
        let stolen = (lifesteal * dealt).round();
        if stolen > 0.0 {
            result.heal += stolen;
            result.log.push(CombatLogEntry::heal(
                LogEntryKind::LifeSteal,
                &attacker.name,
                &attacker.name,
                attack_type,
                stolen,
            ));
        }
    } else {
        debug!(from = %attacker.name, to = %victim.name, "swing missed");
        result.log.push(CombatLogEntry::new(
            LogEntryKind::Miss,
            &attacker.name,
            &victim.name,
            attack_type,
        ));
    }

    apply_enchantment_ticks(attacker, victim, &mut result);
    result
}

/// Mesmerize chance of the victim, broken by the attacker's focus
fn is_mesmerized(attacker: &Unit, victim: &Unit, rng: &mut impl Rng) -> bool {
    let mesmerize = 1.0 - victim.stat_against(Stat::MesmerizeChance, attacker);
    if mesmerize <= 0.0 || rng.gen::<f64>() >= mesmerize {
        return false;
    }
    let focus = 1.0 - attacker.stat_against(Stat::FocusChance, victim);
    !(focus > 0.0 && rng.gen::<f64>() < focus)
}

/// Life damage on the victim and life heal on the attacker
fn apply_enchantment_ticks(attacker: &Combatant, victim: &Combatant, result: &mut AttackResult) {
    let (unit, target) = (&attacker.unit, &victim.unit);
    let attack_type = unit.attack_type;

    let life_damage = unit.stat_against(Stat::LifeDamage, target);
    if life_damage > 0.0 {
        let reduction = target.stat_against(Stat::PercentageEnchantmentDamageReduction, unit);
        let amount = (victim.max_health * life_damage * reduction).round();
        if amount > 0.0 {
            result.enchantment_damage += amount;
            result.log.push(
                CombatLogEntry::new(LogEntryKind::EnchantmentDamage, &attacker.name, &victim.name, attack_type)
                    .with_damage(None, amount),
            );
        }
    }

    let life_heal = unit.stat_against(Stat::LifeHeal, target);
    let healed = (attacker.max_health * life_heal).round();
    if healed > 0.0 {
        result.heal += healed;
        result.log.push(CombatLogEntry::heal(
            LogEntryKind::EnchantmentHeal,
            &attacker.name,
            &attacker.name,
            attack_type,
            healed,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::add_item_to_combatant;
    use crate::config::CombatConstants;
    use crate::item::ItemRecord;
    use crate::modifier::{GenericStatsModifier, ModifierSource};
    use crate::types::{AttackType, DamageType, HeroClass, ItemType};
    use rand::rngs::mock::StepRng;

    fn combatant(name: &str, class: HeroClass, attack_type: AttackType, items: &[ItemRecord]) -> Combatant {
        let mut unit = Unit::new(name, class, attack_type);
        unit.set_base(Stat::Health, 1000.0);
        for item in items {
            unit.equip_item(item.clone());
        }
        let mut combatant = Combatant::new(unit, attack_type, 1, 1000.0, &CombatConstants::default());
        for item in items {
            add_item_to_combatant(&mut combatant, item);
        }
        combatant
    }

    fn buff(combatant: &mut Combatant, modifier: GenericStatsModifier) {
        combatant
            .unit
            .apply_modifier(Box::new(modifier), ModifierSource::Intrinsic, None);
    }

    /// The hit roll is 0, later rolls just below 1: the swing lands with full
    /// variance and no crits
    fn steady_rng() -> StepRng {
        StepRng::new(0, u64::MAX)
    }

    #[test]
    fn test_hit_logs_damage() {
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &[]);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        let result = attack_combatant(&mut attacker, &victim, false, &DamageConstants::default(), &mut StepRng::new(0, 0));

        assert_eq!(result.log.len(), 1);
        let entry = &result.log[0];
        assert_eq!(entry.kind, LogEntryKind::Attack);
        assert_eq!(entry.damage_type, Some(DamageType::Physical));
        assert!(entry.success);
        assert!(entry.damage >= 1.0);
        assert!((result.damage - entry.damage).abs() < f64::EPSILON);
    }

    #[test]
    fn test_miss() {
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &[]);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        let mut rng = StepRng::new(u64::MAX, 0);
        let result = attack_combatant(&mut attacker, &victim, false, &DamageConstants::default(), &mut rng);

        assert_eq!(result.log.len(), 1);
        assert_eq!(result.log[0].kind, LogEntryKind::Miss);
        assert!(!result.log[0].success);
        assert!(result.damage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_mesmerized_swing_deals_nothing() {
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &[]);
        let mut victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        buff(&mut victim, GenericStatsModifier::new().with_multiplier(Stat::MesmerizeChance, 0.5));

        let result = attack_combatant(&mut attacker, &victim, false, &DamageConstants::default(), &mut StepRng::new(0, 0));
        assert_eq!(result.log.len(), 1);
        assert_eq!(result.log[0].kind, LogEntryKind::Mesmerized);
        assert!(result.damage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_focus_breaks_mesmerize() {
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &[]);
        let mut victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        buff(&mut victim, GenericStatsModifier::new().with_multiplier(Stat::MesmerizeChance, 0.5));
        buff(&mut attacker, GenericStatsModifier::new().with_multiplier(Stat::FocusChance, 0.5));

        let result = attack_combatant(&mut attacker, &victim, false, &DamageConstants::default(), &mut StepRng::new(0, 0));
        assert_eq!(result.log[0].kind, LogEntryKind::Attack);
    }

    #[test]
    fn test_lifesteal_heals_attacker() {
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &[]);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        buff(&mut attacker, GenericStatsModifier::new().with_bonus(Stat::Lifesteal, 1.0));

        let result = attack_combatant(&mut attacker, &victim, false, &DamageConstants::default(), &mut steady_rng());
        let steal = result
            .log
            .iter()
            .find(|entry| entry.kind == LogEntryKind::LifeSteal)
            .expect("lifesteal entry");
        assert_eq!(steal.to, "a");
        assert!((result.heal - result.damage).abs() < f64::EPSILON);
        assert!((steal.damage + result.heal).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enchantment_ticks() {
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &[]);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        buff(
            &mut attacker,
            GenericStatsModifier::new()
                .with_bonus(Stat::LifeDamage, 0.05)
                .with_bonus(Stat::LifeHeal, 0.02),
        );

        let mut rng = StepRng::new(u64::MAX, 0);
        let result = attack_combatant(&mut attacker, &victim, false, &DamageConstants::default(), &mut rng);

        assert!((result.enchantment_damage - 50.0).abs() < f64::EPSILON);
        assert!((result.heal - 20.0).abs() < f64::EPSILON);
        let kinds: Vec<LogEntryKind> = result.log.iter().map(|entry| entry.kind).collect();
        assert_eq!(
            kinds,
            vec![LogEntryKind::Miss, LogEntryKind::EnchantmentDamage, LogEntryKind::EnchantmentHeal]
        );
    }

    #[test]
    fn test_second_weapon_is_weaker() {
        let items = [
            ItemRecord::new("Sword", ItemType::MeleeWeapon, 10),
            ItemRecord::new("Sickle", ItemType::MeleeWeapon, 4),
        ];
        let mut attacker = combatant("a", HeroClass::Fighter, AttackType::Melee, &items);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        let constants = DamageConstants::default();

        let first = attack_combatant(&mut attacker, &victim, false, &constants, &mut steady_rng());
        let second = attack_combatant(&mut attacker, &victim, true, &constants, &mut steady_rng());
        assert!(first.damage > second.damage);
    }

    #[test]
    fn test_battle_mage_offhand_swing_type() {
        let items = [
            ItemRecord::new("Wand", ItemType::SpellFocus, 8),
            ItemRecord::new("Club", ItemType::MeleeWeapon, 6),
        ];
        let mut attacker = combatant("a", HeroClass::BattleMage, AttackType::Cast, &items);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        let constants = DamageConstants::default();

        let first = attack_combatant(&mut attacker, &victim, false, &constants, &mut steady_rng());
        let second = attack_combatant(&mut attacker, &victim, true, &constants, &mut steady_rng());

        assert_eq!(first.log[0].attack_type, AttackType::Cast);
        assert_eq!(second.log[0].attack_type, AttackType::Melee);
        assert_ne!(first.log[0].damage_type, second.log[0].damage_type);
        assert_eq!(attacker.unit.attack_type, AttackType::Cast);
    }

    #[test]
    fn test_ranged_ignores_second_swing() {
        let items = [ItemRecord::new("Bow", ItemType::RangedWeapon, 10)];
        let mut attacker = combatant("a", HeroClass::Archer, AttackType::Ranged, &items);
        let victim = combatant("b", HeroClass::Fighter, AttackType::Melee, &[]);
        let constants = DamageConstants::default();

        let first = attack_combatant(&mut attacker, &victim, false, &constants, &mut steady_rng());
        let second = attack_combatant(&mut attacker, &victim, true, &constants, &mut steady_rng());
        assert!((first.damage - second.damage).abs() < f64::EPSILON);
        assert_eq!(second.log[0].attack_type, AttackType::Ranged);
    }
}
