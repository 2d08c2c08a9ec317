//! GenericArmorModifier - armor granted by one equipped armor piece

use super::StatModifier;
use crate::item::{armor_for_tier, percent_multiplier};
use crate::stat::{Stat, StatContext, StatView};
use crate::types::ItemType;
use serde::{Deserialize, Serialize};

/// Armor from an item of a given tier in a given slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericArmorModifier {
    pub tier: f64,
    #[serde(rename = "type")]
    pub slot: ItemType,
    /// Built-in flat armor affix
    #[serde(default)]
    pub flat_armor: f64,
    /// Built-in percent armor affix (0.05 for +5%, or 1.05 as a multiplier)
    #[serde(default)]
    pub bonus_armor: f64,
}

impl GenericArmorModifier {
    pub const KIND: &'static str = "generic_armor";

    pub fn new(tier: f64, slot: ItemType) -> Self {
        GenericArmorModifier {
            tier: if tier.is_finite() { tier } else { 0.0 },
            slot,
            flat_armor: 0.0,
            bonus_armor: 0.0,
        }
    }

    pub fn with_built_ins(mut self, flat_armor: f64, bonus_armor: f64) -> Self {
        self.flat_armor = flat_armor;
        self.bonus_armor = bonus_armor;
        self
    }
}

impl StatModifier for GenericArmorModifier {
    fn name(&self) -> &'static str {
        Self::KIND
    }

    fn bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        if stat != Stat::Armor {
            return None;
        }

        let mut tier = self.tier + view.resolve(ctx, Stat::BonusArmorTiers);
        if self.slot == ItemType::Shield {
            tier += view.resolve(ctx, Stat::BonusShieldTiers);
        }

        let base = armor_for_tier(tier, self.slot.armor_tier_penalty());
        Some(base * percent_multiplier(self.bonus_armor) + self.flat_armor)
    }

    fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}
