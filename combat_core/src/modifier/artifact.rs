//! ArtifactModifier - stats granted by artifact affixes

use super::StatModifier;
use crate::item::{percent_multiplier, ArtifactAttribute, ArtifactAttributeType};
use crate::stat::{Stat, StatContext, StatView};
use crate::types::{Attribute, DamageType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactModifier {
    pub attributes: Vec<ArtifactAttribute>,
}

/// How one affix contributes to the pipeline
enum Contribution {
    Bonus(Stat, f64),
    Multiplier(Stat, f64),
}

fn contribution(attribute: &ArtifactAttribute) -> Option<Contribution> {
    use ArtifactAttributeType as T;
    let magnitude = attribute.magnitude;
    let attribute_bonus = |a: Attribute| Contribution::Multiplier(a.into(), percent_multiplier(magnitude));
    let convert = |t: DamageType| Contribution::Bonus(Stat::DamageAs(t), magnitude);

    Some(match attribute.attribute_type {
        T::BonusStrength => attribute_bonus(Attribute::Strength),
        T::BonusDexterity => attribute_bonus(Attribute::Dexterity),
        T::BonusConstitution => attribute_bonus(Attribute::Constitution),
        T::BonusIntelligence => attribute_bonus(Attribute::Intelligence),
        T::BonusWisdom => attribute_bonus(Attribute::Wisdom),
        T::BonusWillpower => attribute_bonus(Attribute::Willpower),
        T::BonusLuck => attribute_bonus(Attribute::Luck),
        T::BonusHealth => Contribution::Multiplier(Stat::Health, percent_multiplier(magnitude)),
        T::DamageAsPhysical => convert(DamageType::Physical),
        T::DamageAsMagical => convert(DamageType::Magical),
        T::DamageAsFire => convert(DamageType::Fire),
        T::DamageAsIce => convert(DamageType::Ice),
        T::DamageAsLightning => convert(DamageType::Lightning),
        T::DamageAsHoly => convert(DamageType::Holy),
        T::DamageAsBlight => convert(DamageType::Blight),
        T::AllResistances => Contribution::Bonus(Stat::AllResistances, magnitude),
        T::BonusDamage => {
            Contribution::Multiplier(Stat::PercentageDamageIncrease, percent_multiplier(magnitude))
        }
        T::ReducedDamage => {
            Contribution::Multiplier(Stat::PercentageDamageReduction, (1.0 - magnitude).max(0.1))
        }
        T::BonusAccuracy => Contribution::Multiplier(Stat::BonusAccuracy, percent_multiplier(magnitude)),
        T::BonusDodge => Contribution::Multiplier(Stat::BonusDodge, percent_multiplier(magnitude)),
        T::Lifesteal => Contribution::Bonus(Stat::Lifesteal, magnitude),
        T::Mesmerize => Contribution::Multiplier(Stat::MesmerizeChance, (1.0 - magnitude).max(0.0)),
        T::Focus => Contribution::Multiplier(Stat::FocusChance, (1.0 - magnitude).max(0.0)),
        T::ItemFlatDamage
        | T::ItemBonusDamage
        | T::ItemFlatArmor
        | T::ItemBonusArmor
        | T::Unknown => return None,
    })
}

impl ArtifactModifier {
    pub const KIND: &'static str = "artifact";

    pub fn new(attributes: Vec<ArtifactAttribute>) -> Self {
        ArtifactModifier { attributes }
    }
}

impl StatModifier for ArtifactModifier {
    fn name(&self) -> &'static str {
        Self::KIND
    }

    fn bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        self.attributes
            .iter()
            .filter_map(contribution)
            .filter_map(|c| match c {
                Contribution::Bonus(target, value) if target == stat => Some(value),
                _ => None,
            })
            .reduce(|a, b| a + b)
    }

    fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        self.attributes
            .iter()
            .filter_map(contribution)
            .filter_map(|c| match c {
                Contribution::Multiplier(target, value) if target == stat => Some(value),
                _ => None,
            })
            .reduce(|a, b| a * b)
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}
