//! BasicHeroModifier - skills, terrain and health for hero units

use super::StatModifier;
use crate::stat::{Stat, StatContext, StatView};
use crate::types::{attributes_for_attack, AttackType, Attribute, DamageType, Terrain};
use serde::{Deserialize, Serialize};

const DIMINISHING_HEALTH_MAGNITUDE: f64 = 100_000_000.0;
const MODIFIED_HEALTH_FACTOR: f64 = 2.0;
const FLAT_HEALTH: f64 = 193.0;

/// Trained hero skills
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSkills {
    pub attacking_accuracy: f64,
    pub attacking_damage: f64,
    pub casting_accuracy: f64,
    pub casting_damage: f64,
    pub resilience: f64,
    pub regeneration: f64,
    pub vitality: f64,
}

/// Hero-wide stat rules driven by skills and the terrain underfoot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicHeroModifier {
    skills: HeroSkills,
    terrain: Terrain,
}

impl BasicHeroModifier {
    pub fn new(skills: HeroSkills, terrain: Terrain) -> Self {
        BasicHeroModifier { skills, terrain }
    }

    fn attribute_multiplier(&self, view: &StatView<'_>, attribute: Attribute) -> Option<f64> {
        let unit = view.unit;

        if let Some(opponent) = view.opponent {
            if attributes_for_attack(opponent.attack_type).damage_reduction == attribute {
                return Some(1.05f64.powf(self.skills.resilience));
            }
        }

        let roles = attributes_for_attack(unit.attack_type);
        let hybrid = unit.class.is_hybrid();

        let uses_attacking = matches!(
            unit.attack_type,
            AttackType::Melee | AttackType::Smite | AttackType::Ranged
        ) || (unit.attack_type == AttackType::Cast && hybrid);
        if uses_attacking {
            if attribute == roles.to_hit {
                return Some(1.05f64.powf(self.skills.attacking_accuracy));
            }
            if attribute == roles.damage {
                return Some(1.05f64.powf(self.skills.attacking_damage));
            }
        }

        let uses_casting = matches!(
            unit.attack_type,
            AttackType::Cast | AttackType::Smite | AttackType::Blood
        ) || (unit.attack_type == AttackType::Melee && hybrid);
        if uses_casting {
            if attribute == roles.to_hit {
                return Some(1.05f64.powf(self.skills.casting_accuracy));
            }
            if attribute == roles.damage {
                return Some(1.05f64.powf(self.skills.casting_damage));
            }
        }

        None
    }
}

impl StatModifier for BasicHeroModifier {
    fn name(&self) -> &'static str {
        "basic_hero"
    }

    fn bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::AllResistances => {
                Some(self.skills.resilience / 100.0 - self.terrain.resistance_penalty())
            }
            Stat::Resistance(DamageType::Physical | DamageType::Magical) => {
                Some(view.resolve(ctx, Attribute::Constitution.into()).ln() / 50.0)
            }
            Stat::Resistance(DamageType::Fire | DamageType::Ice | DamageType::Lightning) => {
                Some(view.resolve(ctx, Attribute::Willpower.into()).ln() / 60.0)
            }
            Stat::Resistance(DamageType::Holy | DamageType::Blight) => {
                Some(view.resolve(ctx, Attribute::Wisdom.into()).ln() / 100.0)
            }
            Stat::Health => {
                let stats = view.unit.stats();
                let level = view.resolve(ctx, Stat::Level);
                let constitution = view.resolve(ctx, Attribute::Constitution.into());
                let diminishing = (constitution / DIMINISHING_HEALTH_MAGNITUDE + 1.0).ln()
                    * DIMINISHING_HEALTH_MAGNITUDE
                    / MODIFIED_HEALTH_FACTOR;
                Some(
                    stats.base(Attribute::Constitution.into()) * level + diminishing + FLAT_HEALTH
                        - stats.base(Stat::Health),
                )
            }
            _ => None,
        }
    }

    fn multiplier(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Attribute(attribute) => self.attribute_multiplier(view, attribute),
            Stat::Health => {
                let vitality = view.resolve(ctx, Stat::Vitality);
                (vitality != 0.0).then(|| 1.08f64.powf(vitality))
            }
            _ => None,
        }
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeroClass;
    use crate::unit::Unit;

    fn hero_unit(skills: HeroSkills, terrain: Terrain) -> Unit {
        let mut unit = Unit::new("hero", HeroClass::Fighter, AttackType::Melee);
        unit.set_base(Stat::Level, 10.0);
        unit.set_base(Attribute::Constitution.into(), 20.0);
        unit.apply_modifier(
            Box::new(BasicHeroModifier::new(skills, terrain)),
            super::super::ModifierSource::Intrinsic,
            None,
        );
        unit
    }

    #[test]
    fn test_terrain_penalty_lowers_resistances() {
        let land = hero_unit(HeroSkills::default(), Terrain::Land);
        let void = hero_unit(HeroSkills::default(), Terrain::Void);
        let stat = Stat::Resistance(DamageType::Fire);
        assert!((land.stat(stat) - void.stat(stat) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_health_formula() {
        let unit = hero_unit(HeroSkills::default(), Terrain::Land);
        // 20 * 10 + ln(20 / 1e8 + 1) * 1e8 / 2 + 193 ≈ 200 + 10 + 193
        assert!((unit.stat(Stat::Health) - 403.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attacking_skills_scale_to_hit() {
        let skills = HeroSkills {
            attacking_accuracy: 10.0,
            ..HeroSkills::default()
        };
        let mut unit = hero_unit(skills, Terrain::Land);
        unit.set_base(Attribute::Dexterity.into(), 100.0);
        // round(100 * 1.05^10) = 163
        assert!((unit.stat(Attribute::Dexterity.into()) - 163.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vitality_scales_health() {
        let mut unit = hero_unit(HeroSkills::default(), Terrain::Land);
        unit.set_base(Stat::Vitality, 1.0);
        assert!((unit.stat(Stat::Health) - (403.0f64 * 1.08).round()).abs() < f64::EPSILON);
    }
}
