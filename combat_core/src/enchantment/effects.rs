//! Enchantment effect table

use super::EnchantmentType;
use crate::modifier::GenericStatsModifier;
use crate::stat::Stat;
use crate::types::{AttackType, Attribute};

const SINGLE_BUFF: f64 = 1.5;
const GROUP_BUFF: f64 = 1.35;
const ALL_BUFF: f64 = 1.25;
const SINGLE_DEBUFF: f64 = 0.5;
const GROUP_DEBUFF: f64 = 0.65;
const ALL_DEBUFF: f64 = 0.75;
const ARMOR_PIERCE: f64 = 0.5;
const FISHERMANS: f64 = 1.25;
const STEAL: f64 = 0.2;
const ALL_STEAL: f64 = 0.1;

/// Modifiers an enchantment grants to its wearer and to the wearer's opponent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnchantmentEffects {
    pub attacker: Vec<GenericStatsModifier>,
    pub victim: Vec<GenericStatsModifier>,
}

impl EnchantmentEffects {
    fn none() -> Self {
        Self::default()
    }

    fn attacker(modifier: GenericStatsModifier) -> Self {
        EnchantmentEffects {
            attacker: vec![modifier],
            victim: Vec::new(),
        }
    }

    fn victim(modifier: GenericStatsModifier) -> Self {
        EnchantmentEffects {
            attacker: Vec::new(),
            victim: vec![modifier],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attacker.is_empty() && self.victim.is_empty()
    }
}

fn scale(attributes: &[Attribute], factor: f64) -> GenericStatsModifier {
    attributes
        .iter()
        .fold(GenericStatsModifier::new(), |modifier, &attribute| {
            modifier.with_multiplier(Stat::Attribute(attribute), factor)
        })
}

fn add(stat: Stat, value: f64) -> GenericStatsModifier {
    GenericStatsModifier::new().with_bonus(stat, value)
}

/// Main attribute doubled, every other attribute raised by a fifth
fn super_stats(main: Attribute) -> GenericStatsModifier {
    Attribute::all()
        .iter()
        .fold(GenericStatsModifier::new(), |modifier, &attribute| {
            let factor = if attribute == main { 2.0 } else { 1.2 };
            modifier.with_multiplier(Stat::Attribute(attribute), factor)
        })
}

/// Only applies while the wearer attacks with `required`
fn gated(attack_type: AttackType, required: AttackType, effects: EnchantmentEffects) -> EnchantmentEffects {
    if attack_type == required {
        effects
    } else {
        EnchantmentEffects::none()
    }
}

/// Resolve an enchantment for a wearer using `attack_type`
///
/// Counter-spell, accuracy and dodge enchantments are plain attacker stats;
/// `ImprovedAutomation` has no combat effect.
pub fn modifiers_for_enchantment(enchantment: EnchantmentType, attack_type: AttackType) -> EnchantmentEffects {
    use Attribute::*;
    use EnchantmentType as E;

    let pierce = EnchantmentEffects::victim(
        GenericStatsModifier::new().with_multiplier(Stat::PercentageArmorReduction, ARMOR_PIERCE),
    );
    let weapon_tier = EnchantmentEffects::attacker(add(Stat::BonusWeaponTiers, 1.0));

    match enchantment {
        E::BonusStrength => EnchantmentEffects::attacker(scale(&[Strength], SINGLE_BUFF)),
        E::BonusDexterity => EnchantmentEffects::attacker(scale(&[Dexterity], SINGLE_BUFF)),
        E::BonusConstitution => EnchantmentEffects::attacker(scale(&[Constitution], SINGLE_BUFF)),
        E::BonusIntelligence => EnchantmentEffects::attacker(scale(&[Intelligence], SINGLE_BUFF)),
        E::BonusWisdom => EnchantmentEffects::attacker(scale(&[Wisdom], SINGLE_BUFF)),
        E::BonusWillpower => EnchantmentEffects::attacker(scale(&[Willpower], SINGLE_BUFF)),
        E::BonusLuck => EnchantmentEffects::attacker(scale(&[Luck], SINGLE_BUFF)),
        E::BonusPhysical => EnchantmentEffects::attacker(scale(Attribute::physical(), GROUP_BUFF)),
        E::BonusMental => EnchantmentEffects::attacker(scale(Attribute::mental(), GROUP_BUFF)),
        E::BonusAllStats => EnchantmentEffects::attacker(scale(Attribute::all(), ALL_BUFF)),

        E::MinusEnemyStrength => EnchantmentEffects::victim(scale(&[Strength], SINGLE_DEBUFF)),
        E::MinusEnemyDexterity => EnchantmentEffects::victim(scale(&[Dexterity], SINGLE_DEBUFF)),
        E::MinusEnemyConstitution => EnchantmentEffects::victim(scale(&[Constitution], SINGLE_DEBUFF)),
        E::MinusEnemyIntelligence => EnchantmentEffects::victim(scale(&[Intelligence], SINGLE_DEBUFF)),
        E::MinusEnemyWisdom => EnchantmentEffects::victim(scale(&[Wisdom], SINGLE_DEBUFF)),
        E::MinusEnemyWillpower => EnchantmentEffects::victim(scale(&[Willpower], SINGLE_DEBUFF)),
        E::MinusEnemyPhysical => EnchantmentEffects::victim(scale(Attribute::physical(), GROUP_DEBUFF)),
        E::MinusEnemyMental => EnchantmentEffects::victim(scale(Attribute::mental(), GROUP_DEBUFF)),
        E::MinusEnemyAllStats => EnchantmentEffects::victim(scale(Attribute::all(), ALL_DEBUFF)),

        E::MinusEnemyArmor => pierce,
        E::MeleeArmorPiercing => gated(attack_type, AttackType::Melee, pierce),
        E::RangedArmorPiercing => gated(attack_type, AttackType::Ranged, pierce),
        E::CasterArmorPiercing => gated(attack_type, AttackType::Cast, pierce),
        E::SmiteArmorPiercing => gated(attack_type, AttackType::Smite, pierce),
        E::VampireArmorPiercing => gated(attack_type, AttackType::Blood, pierce),
        E::BonusArmor => EnchantmentEffects::attacker(
            GenericStatsModifier::new().with_multiplier(Stat::Armor, SINGLE_BUFF),
        ),

        E::BonusWeaponTier => weapon_tier,
        E::BonusMeleeWeaponTier => gated(attack_type, AttackType::Melee, weapon_tier),
        E::BonusCasterWeaponTier => gated(attack_type, AttackType::Cast, weapon_tier),
        E::BonusRangedWeaponTier => gated(attack_type, AttackType::Ranged, weapon_tier),
        E::BonusSmiteWeaponTier => gated(attack_type, AttackType::Smite, weapon_tier),
        E::BonusArmorTier => EnchantmentEffects::attacker(add(Stat::BonusArmorTiers, 1.0)),

        E::StrengthSteal => EnchantmentEffects::attacker(add(Stat::Steal(Strength), STEAL)),
        E::DexteritySteal => EnchantmentEffects::attacker(add(Stat::Steal(Dexterity), STEAL)),
        E::ConstitutionSteal => EnchantmentEffects::attacker(add(Stat::Steal(Constitution), STEAL)),
        E::IntelligenceSteal => EnchantmentEffects::attacker(add(Stat::Steal(Intelligence), STEAL)),
        E::WisdomSteal => EnchantmentEffects::attacker(add(Stat::Steal(Wisdom), STEAL)),
        E::WillpowerSteal => EnchantmentEffects::attacker(add(Stat::Steal(Willpower), STEAL)),
        E::LuckSteal => EnchantmentEffects::attacker(add(Stat::Steal(Luck), STEAL)),
        E::AllStatsSteal => EnchantmentEffects::attacker(
            Attribute::all()
                .iter()
                .fold(GenericStatsModifier::new(), |modifier, &attribute| {
                    modifier.with_bonus(Stat::Steal(attribute), ALL_STEAL)
                }),
        ),

        E::LifeSteal => EnchantmentEffects::attacker(add(Stat::Lifesteal, 0.1)),
        E::LifeHeal => EnchantmentEffects::attacker(add(Stat::LifeHeal, 0.05)),
        E::LifeDamage => EnchantmentEffects::attacker(add(Stat::LifeDamage, 0.05)),
        E::Vampirism => EnchantmentEffects::attacker(
            add(Stat::Lifesteal, 0.1).with_bonus(Stat::LifeDamage, 0.05),
        ),

        E::WisDexWill => EnchantmentEffects::attacker(scale(&[Wisdom, Dexterity, Willpower], 1.5)),
        E::BigMelee => EnchantmentEffects::attacker(scale(&[Strength, Dexterity], 1.75)),
        E::BigCaster => EnchantmentEffects::attacker(scale(&[Intelligence, Wisdom], 1.75)),

        E::FishermansStrength => EnchantmentEffects::attacker(scale(&[Strength], FISHERMANS)),
        E::FishermansDexterity => EnchantmentEffects::attacker(scale(&[Dexterity], FISHERMANS)),
        E::FishermansConstitution => EnchantmentEffects::attacker(scale(&[Constitution], FISHERMANS)),
        E::FishermansIntelligence => EnchantmentEffects::attacker(scale(&[Intelligence], FISHERMANS)),
        E::FishermansWisdom => EnchantmentEffects::attacker(scale(&[Wisdom], FISHERMANS)),
        E::FishermansWillpower => EnchantmentEffects::attacker(scale(&[Willpower], FISHERMANS)),
        E::FishermansLuck => EnchantmentEffects::attacker(scale(&[Luck], FISHERMANS)),

        E::SuperDexterityStats => EnchantmentEffects::attacker(super_stats(Dexterity)),
        E::SuperWillpowerStats => EnchantmentEffects::attacker(super_stats(Willpower)),
        E::SuperWisdomStats => EnchantmentEffects::attacker(super_stats(Wisdom)),
        E::DoubleAllStats => EnchantmentEffects::attacker(scale(Attribute::all(), 2.0)),
        E::SuperMeleeStats => EnchantmentEffects::attacker(
            scale(&[Strength, Dexterity], 2.0).with_multiplier(Stat::Attribute(Constitution), 1.5),
        ),
        E::SuperCasterStats => EnchantmentEffects::attacker(
            scale(&[Intelligence, Wisdom], 2.0).with_multiplier(Stat::Attribute(Willpower), 1.5),
        ),
        E::SuperBattleMageStats => EnchantmentEffects::attacker(
            scale(&[Strength, Intelligence], 2.0)
                .with_multiplier(Stat::Attribute(Dexterity), 1.5)
                .with_multiplier(Stat::Attribute(Wisdom), 1.5),
        ),
        E::SuperVampStats => EnchantmentEffects::attacker(
            scale(&[Constitution], 2.0)
                .with_multiplier(Stat::Attribute(Intelligence), 1.5)
                .with_bonus(Stat::Lifesteal, 0.15)
                .with_bonus(Stat::LifeDamage, 0.05),
        ),
        E::SuperVampMeleeStats => EnchantmentEffects::attacker(
            scale(&[Strength, Dexterity, Constitution], 1.75).with_bonus(Stat::Lifesteal, 0.1),
        ),
        E::SuperVampSorcStats => EnchantmentEffects::attacker(
            scale(&[Intelligence, Wisdom, Constitution], 1.75).with_bonus(Stat::Lifesteal, 0.1),
        ),
        E::SuperMeleeVampStats => EnchantmentEffects::attacker(
            scale(&[Strength, Dexterity], 2.0)
                .with_multiplier(Stat::Attribute(Constitution), 1.5)
                .with_bonus(Stat::LifeDamage, 0.05),
        ),
        E::SuperSorcVampStats => EnchantmentEffects::attacker(
            scale(&[Intelligence, Wisdom], 2.0)
                .with_multiplier(Stat::Attribute(Constitution), 1.5)
                .with_bonus(Stat::LifeDamage, 0.05),
        ),

        E::CounterSpell => EnchantmentEffects::attacker(add(Stat::CounterSpell, 1.0)),
        E::DoubleAccuracy => EnchantmentEffects::attacker(
            GenericStatsModifier::new().with_multiplier(Stat::BonusAccuracy, 2.0),
        ),
        E::DoubleDodge => EnchantmentEffects::attacker(
            GenericStatsModifier::new().with_multiplier(Stat::BonusDodge, 2.0),
        ),
        E::ImprovedAutomation => EnchantmentEffects::none(),
    }
}
