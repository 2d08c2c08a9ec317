//! Stat keys and the resolution pipeline
//!
//! Every effective stat value is read through [`StatView::resolve`]:
//!
//! `(base + Σbonus) × Πmultiplier + Σextra_bonus`, rounded to the stat's
//! precision and then clamped.

mod breakdown;
mod context;
mod table;
mod view;

pub use breakdown::StatBreakdown;
pub use context::{Getter, StatContext, StatIncident};
pub use table::{round_to, StatTable};
pub use view::StatView;

pub(crate) use context::GuardKey;

use crate::types::{Attribute, DamageType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named stat on a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Attribute(Attribute),
    /// Fraction of the opponent's attribute stolen during an exchange
    Steal(Attribute),
    AttributeMultiplier(Attribute),
    DamageAs(DamageType),
    Resistance(DamageType),
    MaxResistance(DamageType),
    Level,
    Health,
    Vitality,
    Armor,
    AttackRating,
    EvasionRating,
    AllResistances,
    PercentageDamageIncrease,
    PercentageDamageReduction,
    PercentageEnchantmentDamageReduction,
    PercentageArmorReduction,
    BonusDodge,
    BonusAccuracy,
    BonusWeaponTiers,
    BonusArmorTiers,
    BonusShieldTiers,
    /// Inverse chance: 1 means never mesmerized
    MesmerizeChance,
    /// Inverse chance: 1 means never focused
    FocusChance,
    Lifesteal,
    LifeDamage,
    LifeHeal,
    RangedAttackSpeedMultiplier,
    CounterSpell,
    IncreasedBaseDamage,
    CanOnlyTakeOneDamage,
}

impl Stat {
    /// Every stat key, families expanded
    pub fn all() -> Vec<Stat> {
        let mut stats = Vec::new();
        for &attribute in Attribute::all() {
            stats.push(Stat::Attribute(attribute));
            stats.push(Stat::Steal(attribute));
            stats.push(Stat::AttributeMultiplier(attribute));
        }
        for &damage_type in DamageType::all() {
            stats.push(Stat::DamageAs(damage_type));
            stats.push(Stat::Resistance(damage_type));
            stats.push(Stat::MaxResistance(damage_type));
        }
        stats.extend([
            Stat::Level,
            Stat::Health,
            Stat::Vitality,
            Stat::Armor,
            Stat::AttackRating,
            Stat::EvasionRating,
            Stat::AllResistances,
            Stat::PercentageDamageIncrease,
            Stat::PercentageDamageReduction,
            Stat::PercentageEnchantmentDamageReduction,
            Stat::PercentageArmorReduction,
            Stat::BonusDodge,
            Stat::BonusAccuracy,
            Stat::BonusWeaponTiers,
            Stat::BonusArmorTiers,
            Stat::BonusShieldTiers,
            Stat::MesmerizeChance,
            Stat::FocusChance,
            Stat::Lifesteal,
            Stat::LifeDamage,
            Stat::LifeHeal,
            Stat::RangedAttackSpeedMultiplier,
            Stat::CounterSpell,
            Stat::IncreasedBaseDamage,
            Stat::CanOnlyTakeOneDamage,
        ]);
        stats
    }
}

impl From<Attribute> for Stat {
    fn from(attribute: Attribute) -> Self {
        Stat::Attribute(attribute)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Attribute(attribute) => write!(f, "{attribute}"),
            Stat::Steal(attribute) => write!(f, "{attribute}Steal"),
            Stat::AttributeMultiplier(attribute) => write!(f, "{attribute}Multiplier"),
            Stat::DamageAs(damage_type) => {
                write!(f, "damageAs{}", capitalize(&damage_type.to_string()))
            }
            Stat::Resistance(damage_type) => write!(f, "{damage_type}Resistance"),
            Stat::MaxResistance(damage_type) => {
                write!(f, "max{}Resistance", capitalize(&damage_type.to_string()))
            }
            other => {
                let debug = format!("{other:?}");
                let mut chars = debug.chars();
                match chars.next() {
                    Some(first) => write!(f, "{}{}", first.to_lowercase(), chars.as_str()),
                    None => Ok(()),
                }
            }
        }
    }
}
