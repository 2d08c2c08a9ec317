//! InventoryItem - an equipped item and the modifiers it registers

use super::{passive_upgrade_tier, ArtifactItem, BaseItemCatalog, BuiltInBonus, ItemRecord};
use crate::enchantment::{modifiers_for_enchantment, EnchantmentType};
use crate::modifier::{GenericArmorModifier, GenericStatsModifier, ModifierSource};
use crate::types::ItemType;
use crate::unit::Unit;

/// An enchantment effect waiting to be placed on the opponent
#[derive(Debug, Clone, PartialEq)]
pub struct VictimModifier {
    /// Index of the granting item in the owner's equipment
    pub item: usize,
    pub enchantment: EnchantmentType,
    pub modifier: GenericStatsModifier,
}

/// An item equipped by a unit
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    record: ItemRecord,
    passives: Vec<EnchantmentType>,
}

impl InventoryItem {
    pub fn new(record: ItemRecord, catalog: &BaseItemCatalog) -> Self {
        let passives = catalog.passive_enchantments(&record.base_item).to_vec();
        InventoryItem { record, passives }
    }

    pub fn record(&self) -> &ItemRecord {
        &self.record
    }

    pub fn item_type(&self) -> ItemType {
        self.record.item_type
    }

    pub fn level(&self) -> u32 {
        self.record.level
    }

    /// Item level plus any passive upgrade tiers
    pub fn tier(&self) -> f64 {
        f64::from(self.record.level) + passive_upgrade_tier(&self.record)
    }

    /// The item's own enchantment followed by its base item passives
    pub fn enchantments(&self) -> impl Iterator<Item = EnchantmentType> + '_ {
        self.record
            .enchantment
            .into_iter()
            .chain(self.passives.iter().copied())
    }

    /// Register this item's modifiers on `unit` and add it to the equipment
    ///
    /// Returns the equipment index.
    pub fn equip(self, unit: &mut Unit) -> usize {
        let index = unit.equipment().len();
        let source = ModifierSource::Item(index);

        if self.item_type().is_armor() {
            let built_ins = BuiltInBonus::armor(&self.record.built_ins);
            let armor = GenericArmorModifier::new(self.tier(), self.item_type())
                .with_built_ins(built_ins.flat, built_ins.percent);
            unit.apply_modifier(Box::new(armor), source, None);
        }

        for enchantment in self.enchantments().collect::<Vec<_>>() {
            let effects = modifiers_for_enchantment(enchantment, unit.attack_type);
            for modifier in effects.attacker {
                unit.apply_modifier(Box::new(modifier), source, Some(enchantment));
            }
            for modifier in effects.victim {
                unit.push_victim_modifier(VictimModifier {
                    item: index,
                    enchantment,
                    modifier,
                });
            }
        }

        if let Some(imbue) = &self.record.imbue {
            ArtifactItem::imbued(imbue).equip(unit, source);
        }

        unit.push_equipment(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ArtifactAttribute, ArtifactAttributeType, ArtifactRecord, Imbue};
    use crate::stat::Stat;
    use crate::types::{AttackType, Attribute, HeroClass};

    fn unit() -> Unit {
        Unit::new("wearer", HeroClass::Fighter, AttackType::Melee)
    }

    #[test]
    fn test_counter_spells_add_up() {
        let mut unit = unit();
        let charm = ItemRecord::new("some-item", ItemType::Quest, 2)
            .with_base_item("some-item")
            .with_enchantment(EnchantmentType::CounterSpell);
        unit.equip_item(charm.clone());
        assert!((unit.stat(Stat::CounterSpell) - 1.0).abs() < f64::EPSILON);
        unit.equip_item(charm);
        assert!((unit.stat(Stat::CounterSpell) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_item_passives() {
        let mut unit = unit();
        unit.equip_item(ItemRecord::new("naga-scale", ItemType::Quest, 2).with_base_item("naga-scale"));
        assert!((unit.stat(Stat::CounterSpell) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_armor_registers_generic_armor() {
        let mut unit = unit();
        let index = unit.equip_item(ItemRecord::new("plate", ItemType::BodyArmor, 10));
        assert_eq!(index, 0);
        assert!((unit.stat(Stat::Armor) - 147.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_victim_modifiers_are_deferred() {
        let mut unit = unit();
        unit.equip_item(
            ItemRecord::new("hex", ItemType::Accessory, 5).with_enchantment(EnchantmentType::MinusEnemyStrength),
        );
        assert_eq!(unit.victim_modifiers().len(), 1);
        assert_eq!(unit.victim_modifiers()[0].enchantment, EnchantmentType::MinusEnemyStrength);
        assert!(unit
            .modifiers()
            .iter()
            .all(|m| m.enchantment != Some(EnchantmentType::MinusEnemyStrength)));
    }

    #[test]
    fn test_imbue_equips_enabled_affixes_only() {
        let mut unit = unit();
        unit.set_base(Attribute::Strength.into(), 100.0);
        unit.set_base(Attribute::Luck.into(), 100.0);
        let artifact = ArtifactRecord {
            id: String::new(),
            name: "Shard".to_string(),
            level: 10,
            attributes: vec![
                ArtifactAttribute {
                    attribute_type: ArtifactAttributeType::BonusStrength,
                    magnitude: 0.5,
                },
                ArtifactAttribute {
                    attribute_type: ArtifactAttributeType::BonusLuck,
                    magnitude: 0.5,
                },
            ],
        };
        let imbue = Imbue {
            artifact,
            affixes: vec![ArtifactAttributeType::BonusStrength],
        };
        unit.equip_item(ItemRecord::new("ring", ItemType::Accessory, 10).with_imbue(imbue));
        assert!((unit.stat(Attribute::Strength.into()) - 150.0).abs() < f64::EPSILON);
        assert!((unit.stat(Attribute::Luck.into()) - 100.0).abs() < f64::EPSILON);
    }
}
