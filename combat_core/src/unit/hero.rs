//! Hero records and hero unit construction

use super::Unit;
use crate::enchantment::EnchantmentType;
use crate::error::CombatError;
use crate::item::{default_catalog, ArtifactRecord, BaseItemCatalog, ItemRecord};
use crate::modifier::{BasicHeroModifier, HeroClassModifier, HeroSkills, HeroStanceModifier, ModifierSource};
use crate::stat::Stat;
use crate::types::{Attribute, HeroClass, HeroStance, ItemType, Terrain};
use serde::{Deserialize, Serialize};

/// Raw hero attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStats {
    pub strength: f64,
    pub dexterity: f64,
    pub constitution: f64,
    pub intelligence: f64,
    pub wisdom: f64,
    pub willpower: f64,
    pub luck: f64,
}

impl Default for HeroStats {
    fn default() -> Self {
        HeroStats {
            strength: 1.0,
            dexterity: 1.0,
            constitution: 1.0,
            intelligence: 1.0,
            wisdom: 1.0,
            willpower: 1.0,
            luck: 1.0,
        }
    }
}

impl HeroStats {
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Willpower => self.willpower,
            Attribute::Luck => self.luck,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCombat {
    pub health: f64,
    pub max_health: f64,
}

/// Equipped slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroEquipment {
    pub left_hand: Option<ItemRecord>,
    pub right_hand: Option<ItemRecord>,
    pub body_armor: Option<ItemRecord>,
    pub hand_armor: Option<ItemRecord>,
    pub leg_armor: Option<ItemRecord>,
    pub head_armor: Option<ItemRecord>,
    pub foot_armor: Option<ItemRecord>,
    pub accessories: Vec<ItemRecord>,
    pub artifact: Option<ArtifactRecord>,
}

impl HeroEquipment {
    /// Hand and armor slots in equip order
    pub fn slots(&self) -> impl Iterator<Item = &ItemRecord> + '_ {
        [
            &self.left_hand,
            &self.right_hand,
            &self.body_armor,
            &self.hand_armor,
            &self.leg_armor,
            &self.head_armor,
            &self.foot_armor,
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBuffs {
    pub blessing: Option<EnchantmentType>,
}

/// A serialized hero as handed over by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    #[serde(default)]
    pub stats: HeroStats,
    #[serde(default)]
    pub skills: HeroSkills,
    pub combat: HeroCombat,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub active_stance: HeroStance,
    #[serde(default)]
    pub equipment: HeroEquipment,
    #[serde(default)]
    pub inventory: Vec<ItemRecord>,
    #[serde(default)]
    pub buffs: HeroBuffs,
    #[serde(default)]
    pub attack_speed_remainder: f64,
}

impl HeroRecord {
    /// Parse a hero from its JSON form
    pub fn from_json(json: &str) -> Result<Self, CombatError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Unit {
    /// Build a hero unit with the bundled base item catalog
    pub fn from_hero(hero: &HeroRecord) -> Self {
        Self::from_hero_with(hero, default_catalog())
    }

    /// Build a hero unit
    ///
    /// Equips hands and armor slots, accessories, quest items from the
    /// inventory, the artifact and finally the active blessing.
    pub fn from_hero_with(hero: &HeroRecord, catalog: &BaseItemCatalog) -> Self {
        let mut unit = Unit::new(&hero.name, hero.class, hero.class.default_attack_type());
        unit.stance = hero.active_stance;

        for &attribute in Attribute::all() {
            unit.set_base(Stat::Attribute(attribute), hero.stats.get(attribute));
        }
        unit.set_base(Stat::Level, f64::from(hero.level));
        unit.set_base(Stat::Health, hero.combat.max_health);
        unit.set_base(Stat::Vitality, hero.skills.vitality);

        unit.apply_modifier(
            Box::new(BasicHeroModifier::new(hero.skills, hero.terrain)),
            ModifierSource::Intrinsic,
            None,
        );
        unit.apply_modifier(
            Box::new(HeroClassModifier::new(hero.class)),
            ModifierSource::Intrinsic,
            None,
        );
        unit.apply_modifier(
            Box::new(HeroStanceModifier::new(hero.active_stance)),
            ModifierSource::Intrinsic,
            None,
        );

        let equipment = &hero.equipment;
        let quest_items = hero
            .inventory
            .iter()
            .filter(|item| item.item_type == ItemType::Quest);
        for record in equipment
            .slots()
            .chain(equipment.accessories.iter())
            .chain(quest_items)
        {
            unit.equip_item_with(record.clone(), catalog);
        }

        if let Some(artifact) = &equipment.artifact {
            unit.equip_artifact(artifact);
        }

        if let Some(blessing) = hero.buffs.blessing {
            let record = ItemRecord::new("Blessing", ItemType::Quest, 1)
                .with_base_item("blessing")
                .with_enchantment(blessing);
            unit.equip_item_with(record, catalog);
        }

        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttackType;

    fn record(class: HeroClass) -> HeroRecord {
        HeroRecord {
            id: "h1".to_string(),
            name: "Ayla".to_string(),
            class,
            level: 10,
            stats: HeroStats {
                constitution: 20.0,
                ..HeroStats::default()
            },
            skills: HeroSkills::default(),
            combat: HeroCombat {
                health: 100.0,
                max_health: 100.0,
            },
            terrain: Terrain::Land,
            active_stance: HeroStance::Normal,
            equipment: HeroEquipment::default(),
            inventory: Vec::new(),
            buffs: HeroBuffs::default(),
            attack_speed_remainder: 0.0,
        }
    }

    #[test]
    fn test_attack_type_follows_class() {
        assert_eq!(Unit::from_hero(&record(HeroClass::Paladin)).attack_type, AttackType::Smite);
        assert_eq!(Unit::from_hero(&record(HeroClass::Archer)).attack_type, AttackType::Ranged);
        assert_eq!(Unit::from_hero(&record(HeroClass::Vampire)).attack_type, AttackType::Blood);
        assert_eq!(Unit::from_hero(&record(HeroClass::BattleMage)).attack_type, AttackType::Cast);
    }

    #[test]
    fn test_equip_order_and_quest_items() {
        let mut hero = record(HeroClass::Fighter);
        hero.equipment.left_hand = Some(ItemRecord::new("axe", ItemType::MeleeWeapon, 5));
        hero.equipment.body_armor = Some(ItemRecord::new("mail", ItemType::BodyArmor, 5));
        hero.equipment.accessories = vec![ItemRecord::new("ring", ItemType::Accessory, 5)];
        hero.inventory = vec![
            ItemRecord::new("key", ItemType::Quest, 1),
            ItemRecord::new("spare", ItemType::MeleeWeapon, 9),
        ];
        let unit = Unit::from_hero(&hero);
        let names: Vec<&str> = unit
            .equipment()
            .iter()
            .map(|item| item.record().name.as_str())
            .collect();
        assert_eq!(names, vec!["axe", "mail", "ring", "key"]);
    }

    #[test]
    fn test_blessing_is_equipped_last() {
        let mut hero = record(HeroClass::Fighter);
        hero.buffs.blessing = Some(EnchantmentType::CounterSpell);
        let unit = Unit::from_hero(&hero);
        assert_eq!(unit.equipment().len(), 1);
        assert_eq!(unit.equipment()[0].record().name, "Blessing");
        assert!((unit.stat(Stat::CounterSpell) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parses_camel_case_record() {
        let json = r#"{
            "name": "Brann",
            "class": "Gladiator",
            "level": 3,
            "stats": {"strength": 12, "dexterity": 9, "constitution": 11,
                      "intelligence": 4, "wisdom": 5, "willpower": 6, "luck": 7},
            "combat": {"health": 50, "maxHealth": 60},
            "activeStance": "Combat",
            "equipment": {"leftHand": {"name": "club", "level": 3, "type": "MeleeWeapon"}},
            "attackSpeedRemainder": 120
        }"#;
        let hero: HeroRecord = serde_json::from_str(json).unwrap();
        assert_eq!(hero.active_stance, HeroStance::Combat);
        assert!((hero.combat.max_health - 60.0).abs() < f64::EPSILON);
        let unit = Unit::from_hero(&hero);
        assert!((unit.base_value(Stat::Attribute(Attribute::Strength)) - 12.0).abs() < f64::EPSILON);
        assert_eq!(unit.weapons_for(AttackType::Melee).len(), 1);
    }
}
