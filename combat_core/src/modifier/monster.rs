//! MonsterModifier - level-derived attributes for monsters

use super::StatModifier;
use crate::stat::{Stat, StatContext, StatView};

/// Attribute bonus a monster of `level` receives
pub fn monster_attribute_bonus(level: f64) -> f64 {
    level * level / 2.0 + 5.0 * level
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonsterModifier;

impl StatModifier for MonsterModifier {
    fn name(&self) -> &'static str {
        "monster"
    }

    fn bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Attribute(_) => Some(monster_attribute_bonus(view.resolve(ctx, Stat::Level))),
            _ => None,
        }
    }

    fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_bonus_grows_with_level() {
        assert!((monster_attribute_bonus(1.0) - 5.5).abs() < f64::EPSILON);
        assert!((monster_attribute_bonus(10.0) - 100.0).abs() < f64::EPSILON);
        assert!(monster_attribute_bonus(50.0) > monster_attribute_bonus(49.0));
    }
}
