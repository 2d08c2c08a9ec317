//! StatStealModifier - attributes drained from the opponent during a fight

use super::StatModifier;
use crate::stat::{Stat, StatContext, StatView};
use crate::types::Attribute;

/// Which end of the steal a modifier sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealSide {
    /// Gains `steal × opponent attribute` as an extra bonus
    Thief,
    /// Loses the stolen fraction as a multiplier
    Victim,
}

/// One direction of an attribute steal
///
/// Both halves read the thief's live `<attribute>Steal` stat, so disabling
/// the enchantment that granted it silences the steal on both units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatStealModifier {
    attribute: Attribute,
    side: StealSide,
}

impl StatStealModifier {
    pub fn new(attribute: Attribute, side: StealSide) -> Self {
        StatStealModifier { attribute, side }
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn side(&self) -> StealSide {
        self.side
    }
}

impl StatModifier for StatStealModifier {
    fn name(&self) -> &'static str {
        "stat_steal"
    }

    fn bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }

    fn multiplier(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        if self.side != StealSide::Victim || stat != Stat::Attribute(self.attribute) {
            return None;
        }
        let thief = view.flipped()?;
        let steal = thief.resolve(ctx, Stat::Steal(self.attribute));
        (steal > 0.0).then_some(1.0 - steal)
    }

    fn extra_bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        if self.side != StealSide::Thief || stat != Stat::Attribute(self.attribute) {
            return None;
        }
        let victim = view.flipped()?;
        let steal = view.resolve(ctx, Stat::Steal(self.attribute));
        if steal <= 0.0 {
            return None;
        }
        Some(steal * victim.bonus_value(ctx, stat))
    }
}
