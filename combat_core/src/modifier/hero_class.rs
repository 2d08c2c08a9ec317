//! HeroClassModifier - per-class attribute traits

use super::StatModifier;
use crate::stat::{Stat, StatContext, StatView};
use crate::types::{Attribute, HeroClass};

use Attribute::*;

const ALL: &[Attribute] = &[
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Willpower,
    Luck,
];

/// Attribute multipliers granted by a class
pub fn class_traits(class: HeroClass) -> Vec<(Attribute, f64)> {
    let pairs: &[(Attribute, f64)] = match class {
        HeroClass::Adventurer => &[(Luck, 1.1)],
        HeroClass::Fighter => &[(Strength, 1.3), (Dexterity, 1.3)],
        HeroClass::Berserker => &[(Strength, 1.5), (Constitution, 1.2)],
        HeroClass::EnragedBerserker => &[(Strength, 2.0), (Constitution, 1.5)],
        HeroClass::Gladiator => &[(Strength, 1.5), (Dexterity, 1.5)],
        HeroClass::JackOfAllTrades => return ALL.iter().map(|&a| (a, 1.2)).collect(),
        HeroClass::Gambler => &[(Luck, 1.5), (Dexterity, 1.3)],
        HeroClass::Daredevil => &[(Luck, 2.0), (Dexterity, 1.5)],
        HeroClass::Ranger => &[(Dexterity, 1.5), (Luck, 1.2)],
        HeroClass::Archer => &[(Dexterity, 2.0), (Luck, 1.5)],
        HeroClass::Wizard => &[(Intelligence, 1.5)],
        HeroClass::MasterWizard => &[(Intelligence, 2.0), (Wisdom, 1.2)],
        HeroClass::Warlock => &[(Intelligence, 1.3), (Wisdom, 1.3)],
        HeroClass::MasterWarlock => &[(Intelligence, 1.6), (Wisdom, 1.6)],
        HeroClass::DemonHunter => &[(Strength, 1.3), (Intelligence, 1.3)],
        HeroClass::BattleMage => &[(Strength, 1.5), (Intelligence, 1.5)],
        HeroClass::Zealot => &[(Wisdom, 1.5)],
        HeroClass::Paladin => &[(Wisdom, 2.0), (Willpower, 1.3)],
        HeroClass::Vampire => &[(Constitution, 1.5), (Intelligence, 1.2)],
        HeroClass::BloodMage => &[(Constitution, 2.0), (Intelligence, 1.5)],
        HeroClass::Monster => &[],
    };
    pairs.to_vec()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroClassModifier {
    class: HeroClass,
    traits: Vec<(Attribute, f64)>,
}

impl HeroClassModifier {
    pub fn new(class: HeroClass) -> Self {
        HeroClassModifier {
            class,
            traits: class_traits(class),
        }
    }
}

impl StatModifier for HeroClassModifier {
    fn name(&self) -> &'static str {
        "hero_class"
    }

    fn bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match (self.class, stat) {
            (HeroClass::Vampire, Stat::Lifesteal) => Some(0.05),
            _ => None,
        }
    }

    fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Attribute(attribute) => self
                .traits
                .iter()
                .find(|(entry, _)| *entry == attribute)
                .map(|(_, value)| *value),
            Stat::RangedAttackSpeedMultiplier if self.class == HeroClass::Archer => Some(1.25),
            _ => None,
        }
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}
