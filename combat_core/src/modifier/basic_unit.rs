//! BasicUnitModifier - wiring every unit gets

use super::StatModifier;
use crate::stat::{Stat, StatContext, StatView};

/// Fans out shared stats to the stats they feed
///
/// - `allResistances` adds to every resistance
/// - `<attribute>Multiplier` scales its attribute by `1 + value`
/// - `bonusAccuracy` / `bonusDodge` scale the ratings
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicUnitModifier;

impl StatModifier for BasicUnitModifier {
    fn name(&self) -> &'static str {
        "basic_unit"
    }

    fn bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Resistance(_) => {
                let all = view.resolve(ctx, Stat::AllResistances);
                (all != 0.0).then_some(all)
            }
            _ => None,
        }
    }

    fn multiplier(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Attribute(attribute) => {
                let extra = view.resolve(ctx, Stat::AttributeMultiplier(attribute));
                (extra != 0.0).then_some(1.0 + extra)
            }
            Stat::AttackRating => Some(view.resolve(ctx, Stat::BonusAccuracy)),
            Stat::EvasionRating => Some(view.resolve(ctx, Stat::BonusDodge)),
            _ => None,
        }
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}
