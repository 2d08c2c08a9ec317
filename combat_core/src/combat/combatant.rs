//! Combatant - a unit plus the per-fight state the duel loop needs

use crate::config::CombatConstants;
use crate::damage::Luck;
use crate::enchantment::EnchantmentType;
use crate::item::{default_catalog, is_weapon, weapon_counts_for_attack, BaseItemCatalog, ItemRecord};
use crate::stat::Stat;
use crate::types::{AttackType, Attribute, HeroClass, ItemType};
use crate::unit::{HeroRecord, HeroStats, MonsterRecord, Unit};

/// Flattened view of one equipped item
#[derive(Debug, Clone, PartialEq)]
pub struct CombatItem {
    pub item_type: ItemType,
    /// 0 for weapons that do not count toward the combatant's attack type
    pub level: u32,
    pub base_item: String,
    pub enchantment: Option<EnchantmentType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatEquipment {
    /// Highest level first
    pub weapons: Vec<CombatItem>,
    pub armor: Vec<CombatItem>,
    pub quests: Vec<ItemRecord>,
}

/// A unit entering a fight
///
/// The snapshot fields are fixed when the combatant is created. Stat reads
/// during the fight go through `unit`, so enchantment effects applied while
/// the fight runs are visible to later exchanges.
#[derive(Debug)]
pub struct Combatant {
    pub name: String,
    pub class: HeroClass,
    pub attack_type: AttackType,
    pub level: u32,
    pub health: f64,
    pub max_health: f64,
    pub equipment: CombatEquipment,
    /// Base attribute values at creation
    pub attributes: HeroStats,
    pub luck: Luck,
    /// Milliseconds between swings
    pub attack_speed: f64,
    /// Milliseconds accumulated toward the next swing
    pub attack_speed_remainder: f64,
    pub unit: Unit,
}

impl Combatant {
    /// Snapshot `unit`, switching it to `attack_type`
    pub fn new(mut unit: Unit, attack_type: AttackType, level: u32, health: f64, constants: &CombatConstants) -> Self {
        unit.attack_type = attack_type;
        let attributes = base_attributes(&unit);
        Combatant {
            name: unit.name.clone(),
            class: unit.class,
            attack_type,
            level,
            health,
            max_health: unit.max_health(),
            equipment: CombatEquipment::default(),
            luck: Luck::new(attributes.luck),
            attributes,
            attack_speed: attack_speed_for(&unit, attack_type, constants),
            attack_speed_remainder: 0.0,
            unit,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Whether swings alternate between the first and second weapon
    pub fn is_dual_wielding(&self) -> bool {
        !self.attack_type.is_single_attack()
            && self.equipment.weapons.iter().filter(|weapon| weapon.level > 0).count() >= 2
    }

    /// Attack type a swing is made with
    ///
    /// Hybrid classes swing their second weapon with the attack type that
    /// weapon implies.
    pub fn swing_attack_type(&self, is_second: bool) -> AttackType {
        if !is_second || !self.class.is_hybrid() {
            return self.attack_type;
        }
        match self.equipment.weapons.get(1).map(|weapon| weapon.item_type) {
            Some(ItemType::MeleeWeapon) => AttackType::Melee,
            Some(ItemType::SpellFocus) => AttackType::Cast,
            _ => self.attack_type,
        }
    }
}

fn base_attributes(unit: &Unit) -> HeroStats {
    let base = |attribute: Attribute| unit.base_value(Stat::Attribute(attribute));
    HeroStats {
        strength: base(Attribute::Strength),
        dexterity: base(Attribute::Dexterity),
        constitution: base(Attribute::Constitution),
        intelligence: base(Attribute::Intelligence),
        wisdom: base(Attribute::Wisdom),
        willpower: base(Attribute::Willpower),
        luck: base(Attribute::Luck),
    }
}

/// Swing cadence of `unit` attacking with `attack_type`
///
/// Rangers and archers use a doubled interval shortened by their ranged
/// speed multiplier; blood casters use the doubled interval as is.
pub fn attack_speed_for(unit: &Unit, attack_type: AttackType, constants: &CombatConstants) -> f64 {
    let base = constants.base_attack_speed;
    let speed = if unit.class.is_ranger() {
        let factor = unit.stat(Stat::RangedAttackSpeedMultiplier).max(1.0);
        (base * 2.0 / factor).round()
    } else if attack_type == AttackType::Blood && unit.class.is_blood_caster() {
        base * 2.0
    } else {
        base
    };
    speed.max(constants.min_attack_interval)
}

/// Add an item to the combatant's flattened equipment
///
/// Weapons that do not count toward the attack type are kept at level 0. A
/// ranged weapon is dropped when a weapon is already listed.
pub fn add_item_to_combatant(combatant: &mut Combatant, record: &ItemRecord) {
    let class = combatant.class;
    let mut item = CombatItem {
        item_type: record.item_type,
        level: record.level,
        base_item: record.base_item.clone(),
        enchantment: record.enchantment,
    };

    if !is_weapon(record.item_type, class) {
        combatant.equipment.armor.push(item);
        return;
    }
    if record.item_type == ItemType::RangedWeapon && !combatant.equipment.weapons.is_empty() {
        return;
    }
    if !weapon_counts_for_attack(record.item_type, combatant.attack_type, class) {
        item.level = 0;
    }

    let weapons = &mut combatant.equipment.weapons;
    let position = weapons
        .iter()
        .position(|weapon| weapon.level < item.level)
        .unwrap_or(weapons.len());
    weapons.insert(position, item);
}

pub fn create_hero_combatant(hero: &HeroRecord, attack_type: AttackType, constants: &CombatConstants) -> Combatant {
    create_hero_combatant_with(hero, attack_type, constants, default_catalog())
}

/// Build a hero's unit and snapshot it for a fight
pub fn create_hero_combatant_with(
    hero: &HeroRecord,
    attack_type: AttackType,
    constants: &CombatConstants,
    catalog: &BaseItemCatalog,
) -> Combatant {
    let unit = Unit::from_hero_with(hero, catalog);
    let mut combatant = Combatant::new(unit, attack_type, hero.level, hero.combat.health, constants);
    combatant.attack_speed_remainder = hero.attack_speed_remainder;

    for record in hero.equipment.slots() {
        add_item_to_combatant(&mut combatant, record);
    }
    combatant.equipment.quests = hero
        .inventory
        .iter()
        .filter(|item| item.item_type == ItemType::Quest)
        .cloned()
        .collect();
    combatant
}

pub fn create_monster_combatant(monster: &MonsterRecord, constants: &CombatConstants) -> Combatant {
    create_monster_combatant_with(monster, constants, default_catalog())
}

pub fn create_monster_combatant_with(
    monster: &MonsterRecord,
    constants: &CombatConstants,
    catalog: &BaseItemCatalog,
) -> Combatant {
    let unit = Unit::from_monster_with(monster, catalog);
    let records: Vec<ItemRecord> = unit.equipment().iter().map(|item| item.record().clone()).collect();
    let mut combatant = Combatant::new(unit, monster.attack_type, monster.level, monster.combat.health, constants);
    combatant.attack_speed_remainder = monster.attack_speed_remainder;

    for record in &records {
        add_item_to_combatant(&mut combatant, record);
    }
    combatant
}
