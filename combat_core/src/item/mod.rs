//! Items - equipment records and the modifiers they register
//!
//! Item records arrive serialized from the caller. Equipping an item on a
//! [`Unit`](crate::unit::Unit) registers its armor, enchantment, passive and
//! artifact modifiers; victim-side enchantment effects wait for combat.

mod artifact;
mod builtins;
mod catalog;
mod inventory;

pub use artifact::ArtifactItem;
pub use builtins::{
    armor_for_tier, passive_upgrade_tier, percent_multiplier, weapon_base_damage,
    weapon_damage_with_built_ins, BuiltInBonus,
};
pub use catalog::{default_catalog, load_base_items, parse_base_items, BaseItem, BaseItemCatalog};
pub use inventory::{InventoryItem, VictimModifier};

use crate::enchantment::EnchantmentType;
use crate::types::{AttackType, HeroClass, ItemType};
use serde::{Deserialize, Deserializer, Serialize};

/// Artifact affixes and item built-ins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactAttributeType {
    BonusStrength,
    BonusDexterity,
    BonusConstitution,
    BonusIntelligence,
    BonusWisdom,
    BonusWillpower,
    BonusLuck,
    BonusHealth,
    DamageAsPhysical,
    DamageAsMagical,
    DamageAsFire,
    DamageAsIce,
    DamageAsLightning,
    DamageAsHoly,
    DamageAsBlight,
    AllResistances,
    BonusDamage,
    ReducedDamage,
    BonusAccuracy,
    BonusDodge,
    Lifesteal,
    Mesmerize,
    Focus,
    /// Flat damage added to this weapon only
    ItemFlatDamage,
    /// Percent damage for this weapon only
    ItemBonusDamage,
    /// Flat armor added to this armor piece only
    ItemFlatArmor,
    /// Percent armor for this armor piece only
    ItemBonusArmor,
    /// Affixes this engine does not understand contribute nothing
    #[serde(other)]
    Unknown,
}

/// One affix with its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtifactAttribute {
    #[serde(rename = "type")]
    pub attribute_type: ArtifactAttributeType,
    pub magnitude: f64,
}

/// A serialized artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub attributes: Vec<ArtifactAttribute>,
}

/// An artifact fused into an item; only the listed affixes stay active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imbue {
    pub artifact: ArtifactRecord,
    /// Enabled affixes (empty keeps them all)
    #[serde(default)]
    pub affixes: Vec<ArtifactAttributeType>,
}

/// A serialized inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub base_item: String,
    pub level: u32,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, deserialize_with = "lenient_enchantment")]
    pub enchantment: Option<EnchantmentType>,
    #[serde(default)]
    pub built_ins: Vec<ArtifactAttribute>,
    #[serde(default)]
    pub imbue: Option<Imbue>,
}

impl ItemRecord {
    pub fn new(name: &str, item_type: ItemType, level: u32) -> Self {
        ItemRecord {
            id: String::new(),
            name: name.to_string(),
            base_item: String::new(),
            level,
            item_type,
            enchantment: None,
            built_ins: Vec::new(),
            imbue: None,
        }
    }

    pub fn with_base_item(mut self, base_item: &str) -> Self {
        self.base_item = base_item.to_string();
        self
    }

    pub fn with_enchantment(mut self, enchantment: EnchantmentType) -> Self {
        self.enchantment = Some(enchantment);
        self
    }

    pub fn with_built_in(mut self, attribute_type: ArtifactAttributeType, magnitude: f64) -> Self {
        self.built_ins.push(ArtifactAttribute {
            attribute_type,
            magnitude,
        });
        self
    }

    pub fn with_imbue(mut self, imbue: Imbue) -> Self {
        self.imbue = Some(imbue);
        self
    }
}

/// Unknown enchantment names degrade to no enchantment
fn lenient_enchantment<'de, D>(deserializer: D) -> Result<Option<EnchantmentType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value.clone()) {
        Ok(enchantment) => Some(enchantment),
        Err(_) => {
            tracing::warn!(%value, "ignoring unknown enchantment");
            None
        }
    }))
}

/// Whether an item of `item_type` swings as a weapon for `class`
pub fn is_weapon(item_type: ItemType, class: HeroClass) -> bool {
    match item_type {
        ItemType::MeleeWeapon | ItemType::RangedWeapon | ItemType::SpellFocus => true,
        ItemType::Shield => class.wields_shield(),
        _ => false,
    }
}

/// Whether a weapon type contributes to attacks of `attack_type`
pub fn does_weapon_affect_attack(item_type: ItemType, attack_type: AttackType) -> bool {
    let excluded: &[ItemType] = match attack_type {
        AttackType::Blood => &[ItemType::RangedWeapon, ItemType::MeleeWeapon],
        AttackType::Smite => &[ItemType::RangedWeapon],
        AttackType::Cast => &[ItemType::MeleeWeapon, ItemType::RangedWeapon],
        AttackType::Ranged => &[ItemType::MeleeWeapon, ItemType::SpellFocus],
        AttackType::Melee => &[ItemType::SpellFocus, ItemType::RangedWeapon],
    };
    !excluded.contains(&item_type)
}

/// Weapon relevance including the melee/spell-focus crossover of hybrids
pub fn weapon_counts_for_attack(item_type: ItemType, attack_type: AttackType, class: HeroClass) -> bool {
    if does_weapon_affect_attack(item_type, attack_type) {
        return true;
    }
    class.is_hybrid()
        && matches!(
            (attack_type, item_type),
            (AttackType::Melee, ItemType::SpellFocus) | (AttackType::Cast, ItemType::MeleeWeapon)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shield_is_weapon_for_paladins() {
        assert!(is_weapon(ItemType::Shield, HeroClass::Paladin));
        assert!(!is_weapon(ItemType::Shield, HeroClass::Fighter));
        assert!(is_weapon(ItemType::SpellFocus, HeroClass::Fighter));
    }

    #[test]
    fn test_weapon_affects_attack() {
        assert!(does_weapon_affect_attack(ItemType::MeleeWeapon, AttackType::Melee));
        assert!(!does_weapon_affect_attack(ItemType::MeleeWeapon, AttackType::Cast));
        assert!(!does_weapon_affect_attack(ItemType::SpellFocus, AttackType::Ranged));
        assert!(does_weapon_affect_attack(ItemType::SpellFocus, AttackType::Blood));
        assert!(!does_weapon_affect_attack(ItemType::RangedWeapon, AttackType::Smite));
    }

    #[test]
    fn test_hybrids_cross_over() {
        assert!(weapon_counts_for_attack(ItemType::MeleeWeapon, AttackType::Cast, HeroClass::BattleMage));
        assert!(weapon_counts_for_attack(ItemType::SpellFocus, AttackType::Melee, HeroClass::DemonHunter));
        assert!(!weapon_counts_for_attack(ItemType::MeleeWeapon, AttackType::Cast, HeroClass::Wizard));
    }

    #[test]
    fn test_unknown_enchantment_degrades() {
        let json = r#"{"name":"odd","level":3,"type":"MeleeWeapon","enchantment":"NotARealOne"}"#;
        let record: ItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.enchantment, None);
    }

    #[test]
    fn test_unknown_built_in_degrades() {
        let json = r#"{"name":"odd","level":3,"type":"MeleeWeapon","builtIns":[{"type":"Sparkles","magnitude":2}]}"#;
        let record: ItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.built_ins[0].attribute_type, ArtifactAttributeType::Unknown);
    }
}
