//! Monster records and monster unit construction

use super::{HeroCombat, Unit};
use crate::error::CombatError;
use crate::item::{default_catalog, BaseItemCatalog, ItemRecord};
use crate::modifier::{ModifierSource, MonsterModifier};
use crate::stat::Stat;
use crate::types::{AttackType, HeroClass, ItemType};
use serde::{Deserialize, Serialize};

/// A serialized monster instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub level: u32,
    pub attack_type: AttackType,
    pub combat: HeroCombat,
    /// Extra gear carried on top of the natural weapon and hide
    #[serde(default)]
    pub equipment: Vec<ItemRecord>,
    #[serde(default)]
    pub attack_speed_remainder: f64,
}

impl MonsterRecord {
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Weapon slot a monster's natural attack occupies
    pub fn natural_weapon_type(&self) -> ItemType {
        match self.attack_type {
            AttackType::Melee => ItemType::MeleeWeapon,
            AttackType::Ranged => ItemType::RangedWeapon,
            AttackType::Cast | AttackType::Smite | AttackType::Blood => ItemType::SpellFocus,
        }
    }
}

impl Unit {
    pub fn from_monster(monster: &MonsterRecord) -> Self {
        Self::from_monster_with(monster, default_catalog())
    }

    /// Build a monster unit with level-scaled attributes, a natural weapon and
    /// a body armor of its level
    pub fn from_monster_with(monster: &MonsterRecord, catalog: &BaseItemCatalog) -> Self {
        let mut unit = Unit::new(&monster.name, HeroClass::Monster, monster.attack_type);
        unit.set_base(Stat::Level, f64::from(monster.level));
        unit.set_base(Stat::Health, monster.combat.max_health);
        unit.apply_modifier(Box::new(MonsterModifier), ModifierSource::Intrinsic, None);

        let weapon = ItemRecord::new("natural weapon", monster.natural_weapon_type(), monster.level);
        let hide = ItemRecord::new("natural armor", ItemType::BodyArmor, monster.level);
        unit.equip_item_with(weapon, catalog);
        unit.equip_item_with(hide, catalog);
        for record in &monster.equipment {
            unit.equip_item_with(record.clone(), catalog);
        }
        unit
    }
}
