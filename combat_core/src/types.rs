//! Core enums shared by every combat subsystem

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a combatant delivers its swings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
    Cast,
    Smite,
    Blood,
}

impl AttackType {
    pub fn all() -> &'static [AttackType] {
        &[
            AttackType::Melee,
            AttackType::Ranged,
            AttackType::Cast,
            AttackType::Smite,
            AttackType::Blood,
        ]
    }

    /// Ranged and blood attackers never alternate weapons
    pub fn is_single_attack(self) -> bool {
        matches!(self, AttackType::Ranged | AttackType::Blood)
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttackType::Melee => "Melee",
            AttackType::Ranged => "Ranged",
            AttackType::Cast => "Cast",
            AttackType::Smite => "Smite",
            AttackType::Blood => "Blood",
        };
        f.write_str(name)
    }
}

/// Damage types, each with its own resistance and resistance cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Magical,
    Fire,
    Ice,
    Lightning,
    Holy,
    Blight,
}

impl DamageType {
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Physical,
            DamageType::Magical,
            DamageType::Fire,
            DamageType::Ice,
            DamageType::Lightning,
            DamageType::Holy,
            DamageType::Blight,
        ]
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageType::Physical => "physical",
            DamageType::Magical => "magical",
            DamageType::Fire => "fire",
            DamageType::Ice => "ice",
            DamageType::Lightning => "lightning",
            DamageType::Holy => "holy",
            DamageType::Blight => "blight",
        };
        f.write_str(name)
    }
}

/// The seven primary attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Willpower,
    Luck,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Willpower,
            Attribute::Luck,
        ]
    }

    pub fn physical() -> &'static [Attribute] {
        &[Attribute::Strength, Attribute::Dexterity, Attribute::Constitution]
    }

    pub fn mental() -> &'static [Attribute] {
        &[Attribute::Intelligence, Attribute::Wisdom, Attribute::Willpower]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Constitution => "constitution",
            Attribute::Intelligence => "intelligence",
            Attribute::Wisdom => "wisdom",
            Attribute::Willpower => "willpower",
            Attribute::Luck => "luck",
        };
        f.write_str(name)
    }
}

/// Which attributes drive each role of an attack type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackAttributes {
    pub to_hit: Attribute,
    pub damage: Attribute,
    pub dodge: Attribute,
    pub damage_reduction: Attribute,
}

/// Attribute roles for a given attack type
pub fn attributes_for_attack(attack_type: AttackType) -> AttackAttributes {
    use Attribute::*;
    let (to_hit, damage, dodge, damage_reduction) = match attack_type {
        AttackType::Melee => (Dexterity, Strength, Dexterity, Constitution),
        AttackType::Ranged => (Luck, Dexterity, Dexterity, Strength),
        AttackType::Cast => (Wisdom, Intelligence, Wisdom, Willpower),
        AttackType::Smite => (Willpower, Wisdom, Wisdom, Willpower),
        AttackType::Blood => (Intelligence, Constitution, Wisdom, Willpower),
    };
    AttackAttributes {
        to_hit,
        damage,
        dodge,
        damage_reduction,
    }
}

/// Hero classes plus the catch-all monster class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Adventurer,
    Fighter,
    Berserker,
    EnragedBerserker,
    Gladiator,
    JackOfAllTrades,
    Gambler,
    Daredevil,
    Ranger,
    Archer,
    Wizard,
    MasterWizard,
    Warlock,
    MasterWarlock,
    DemonHunter,
    BattleMage,
    Zealot,
    Paladin,
    Vampire,
    BloodMage,
    Monster,
}

impl HeroClass {
    /// The attack type a class uses when none is selected
    pub fn default_attack_type(self) -> AttackType {
        match self {
            HeroClass::Zealot | HeroClass::Paladin => AttackType::Smite,
            HeroClass::Vampire | HeroClass::BloodMage => AttackType::Blood,
            HeroClass::Ranger | HeroClass::Archer => AttackType::Ranged,
            HeroClass::Warlock
            | HeroClass::MasterWarlock
            | HeroClass::Wizard
            | HeroClass::MasterWizard
            | HeroClass::DemonHunter
            | HeroClass::BattleMage => AttackType::Cast,
            _ => AttackType::Melee,
        }
    }

    /// Melee/caster hybrids that can swing either weapon family
    pub fn is_hybrid(self) -> bool {
        matches!(self, HeroClass::DemonHunter | HeroClass::BattleMage)
    }

    /// Classes whose ratings jitter with luck
    pub fn is_gambler(self) -> bool {
        matches!(self, HeroClass::Gambler | HeroClass::Daredevil)
    }

    pub fn is_ranger(self) -> bool {
        matches!(self, HeroClass::Ranger | HeroClass::Archer)
    }

    pub fn is_blood_caster(self) -> bool {
        matches!(self, HeroClass::Vampire | HeroClass::BloodMage)
    }

    /// Shield-bearing smiters treat their shield as a weapon
    pub fn wields_shield(self) -> bool {
        matches!(self, HeroClass::Paladin | HeroClass::Zealot)
    }
}

/// Combat stance a hero has active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeroStance {
    #[default]
    Normal,
    Combat,
    Defensive,
    Blight,
}

/// Equipment categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    MeleeWeapon,
    RangedWeapon,
    SpellFocus,
    Shield,
    BodyArmor,
    HandArmor,
    LegArmor,
    HeadArmor,
    FootArmor,
    Accessory,
    Quest,
}

impl ItemType {
    /// Armor-like slots register a generic armor modifier
    pub fn is_armor(self) -> bool {
        matches!(
            self,
            ItemType::BodyArmor
                | ItemType::HandArmor
                | ItemType::LegArmor
                | ItemType::HeadArmor
                | ItemType::FootArmor
                | ItemType::Shield
        )
    }

    /// Divisor used to scale armor per slot
    pub fn armor_tier_penalty(self) -> f64 {
        match self {
            ItemType::BodyArmor | ItemType::Shield => 1.0,
            ItemType::HeadArmor | ItemType::LegArmor => 2.0,
            ItemType::HandArmor | ItemType::FootArmor => 3.0,
            _ => 1.0,
        }
    }
}

/// Terrain the hero is standing on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Land,
    Water,
    Forbidden,
    Void,
}

impl Terrain {
    /// Flat resistance penalty for fighting on hostile terrain
    pub fn resistance_penalty(self) -> f64 {
        match self {
            Terrain::Land => 0.0,
            Terrain::Water => 0.2,
            Terrain::Forbidden => 0.4,
            Terrain::Void => 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_attack_types() {
        assert_eq!(HeroClass::Paladin.default_attack_type(), AttackType::Smite);
        assert_eq!(HeroClass::BloodMage.default_attack_type(), AttackType::Blood);
        assert_eq!(HeroClass::Archer.default_attack_type(), AttackType::Ranged);
        assert_eq!(HeroClass::BattleMage.default_attack_type(), AttackType::Cast);
        assert_eq!(HeroClass::Gladiator.default_attack_type(), AttackType::Melee);
    }

    #[test]
    fn test_armor_slots() {
        assert!(ItemType::Shield.is_armor());
        assert!(!ItemType::MeleeWeapon.is_armor());
        assert!((ItemType::FootArmor.armor_tier_penalty() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_item_type_serializes_pascal_case() {
        let json = serde_json::to_string(&ItemType::BodyArmor).unwrap();
        assert_eq!(json, "\"BodyArmor\"");
    }
}
