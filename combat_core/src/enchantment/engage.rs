//! Entering combat: stat steals, victim effects and counter-spells

use super::{activation_rank, apply_counter_spells};
use crate::modifier::{ModifierSource, StatStealModifier, StealSide};
use crate::stat::Stat;
use crate::types::Attribute;
use crate::unit::Unit;
use tracing::debug;

/// Pair two units for a fight
///
/// Steals and victim effects run in both directions, then counter-spells
/// resolve once for both sides. A unit that is already engaged is left
/// untouched.
pub fn enter_combat(a: &mut Unit, b: &mut Unit) {
    if a.engaged || b.engaged {
        debug!(a = %a.name, b = %b.name, "units already engaged");
        return;
    }

    create_stat_steal_modifiers(a, b);
    create_stat_steal_modifiers(b, a);

    apply_attack_modifiers(a, b);
    apply_attack_modifiers(b, a);

    a.engaged = true;
    b.engaged = true;

    apply_counter_spells(a, b);
}

/// Register both halves of every attribute `thief` steals from `victim`
///
/// Returns the stolen attributes.
pub fn create_stat_steal_modifiers(thief: &mut Unit, victim: &mut Unit) -> Vec<Attribute> {
    let stolen: Vec<Attribute> = Attribute::all()
        .iter()
        .copied()
        .filter(|&attribute| thief.stat_against(Stat::Steal(attribute), victim) > 0.0)
        .collect();

    let source = ModifierSource::Opponent { item: None };
    for &attribute in &stolen {
        thief.apply_modifier(
            Box::new(StatStealModifier::new(attribute, StealSide::Thief)),
            source,
            None,
        );
        victim.apply_modifier(
            Box::new(StatStealModifier::new(attribute, StealSide::Victim)),
            source,
            None,
        );
    }
    stolen
}

/// Place `attacker`'s victim-side enchantment effects on `victim`, in
/// activation order
pub fn apply_attack_modifiers(attacker: &Unit, victim: &mut Unit) -> usize {
    let mut pending: Vec<_> = attacker.victim_modifiers().iter().collect();
    pending.sort_by_key(|entry| activation_rank(entry.enchantment));

    for entry in &pending {
        debug!(
            from = %attacker.name,
            to = %victim.name,
            enchantment = ?entry.enchantment,
            "applying victim modifier"
        );
        victim.apply_modifier(
            Box::new(entry.modifier.clone()),
            ModifierSource::Opponent {
                item: Some(entry.item),
            },
            Some(entry.enchantment),
        );
    }
    pending.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchantment::EnchantmentType;
    use crate::item::ItemRecord;
    use crate::types::{AttackType, HeroClass, ItemType};

    fn unit(name: &str) -> Unit {
        let mut unit = Unit::new(name, HeroClass::Fighter, AttackType::Melee);
        for &attribute in Attribute::all() {
            unit.set_base(attribute.into(), 100.0);
        }
        unit
    }

    fn enchanted(enchantment: EnchantmentType) -> ItemRecord {
        ItemRecord::new("trinket", ItemType::Accessory, 5).with_enchantment(enchantment)
    }

    #[test]
    fn test_victim_modifiers_reach_opponent() {
        let mut a = unit("a");
        let mut b = unit("b");
        a.equip_item(enchanted(EnchantmentType::MinusEnemyStrength));
        enter_combat(&mut a, &mut b);
        assert!((b.stat(Attribute::Strength.into()) - 50.0).abs() < f64::EPSILON);
        assert!((a.stat(Attribute::Strength.into()) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enter_combat_is_idempotent() {
        let mut a = unit("a");
        let mut b = unit("b");
        a.equip_item(enchanted(EnchantmentType::MinusEnemyStrength));
        enter_combat(&mut a, &mut b);
        let count = b.modifiers().len();
        enter_combat(&mut a, &mut b);
        assert_eq!(b.modifiers().len(), count);
        assert!(a.is_engaged() && b.is_engaged());
    }

    #[test]
    fn test_stat_steal_moves_attributes() {
        let mut a = unit("a");
        let mut b = unit("b");
        a.equip_item(enchanted(EnchantmentType::StrengthSteal));
        enter_combat(&mut a, &mut b);
        // thief gains 20% of the victim's bonus stage; victim keeps 80%
        assert!((a.stat_against(Attribute::Strength.into(), &b) - 120.0).abs() < f64::EPSILON);
        assert!((b.stat_against(Attribute::Strength.into(), &a) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_activation_order_is_respected() {
        let mut a = unit("a");
        let mut b = unit("b");
        a.equip_item(enchanted(EnchantmentType::MinusEnemyAllStats));
        a.equip_item(enchanted(EnchantmentType::MinusEnemyArmor));
        a.equip_item(enchanted(EnchantmentType::MinusEnemyStrength));
        enter_combat(&mut a, &mut b);
        let applied: Vec<EnchantmentType> = b
            .modifiers()
            .iter()
            .filter_map(|modifier| modifier.enchantment)
            .collect();
        assert_eq!(
            applied,
            vec![
                EnchantmentType::MinusEnemyArmor,
                EnchantmentType::MinusEnemyStrength,
                EnchantmentType::MinusEnemyAllStats,
            ]
        );
    }
}
