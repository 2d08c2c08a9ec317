//! HeroStanceModifier - damage trade-offs of the active stance

use super::StatModifier;
use crate::stat::{Stat, StatContext, StatView};
use crate::types::HeroStance;

/// Combat stance deals and takes more damage, defensive stance less.
/// The blight stance only changes the damage type of smites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStanceModifier {
    stance: HeroStance,
}

impl HeroStanceModifier {
    pub fn new(stance: HeroStance) -> Self {
        HeroStanceModifier { stance }
    }

    fn factor(&self) -> Option<f64> {
        match self.stance {
            HeroStance::Combat => Some(1.1),
            HeroStance::Defensive => Some(0.9),
            HeroStance::Normal | HeroStance::Blight => None,
        }
    }
}

impl StatModifier for HeroStanceModifier {
    fn name(&self) -> &'static str {
        "hero_stance"
    }

    fn bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }

    fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::PercentageDamageIncrease | Stat::PercentageDamageReduction => self.factor(),
            _ => None,
        }
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}
