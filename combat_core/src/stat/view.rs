//! StatView - the single read path for effective stat values

use super::{Getter, GuardKey, Stat, StatBreakdown, StatContext, StatIncident};
use crate::damage::calculate_rating;
use crate::item::weapon_damage_with_built_ins;
use crate::types::{attributes_for_attack, AttackType, Attribute};
use crate::unit::Unit;
use tracing::{error, warn};

/// A unit seen during evaluation, together with its current opponent
#[derive(Debug, Clone, Copy)]
pub struct StatView<'a> {
    pub unit: &'a Unit,
    pub opponent: Option<&'a Unit>,
}

impl<'a> StatView<'a> {
    pub fn new(unit: &'a Unit, opponent: Option<&'a Unit>) -> Self {
        StatView { unit, opponent }
    }

    /// The opponent's view of this exchange
    pub fn flipped(&self) -> Option<StatView<'a>> {
        self.opponent.map(|opponent| StatView {
            unit: opponent,
            opponent: Some(self.unit),
        })
    }

    /// Effective value of `stat`
    pub fn resolve(&self, ctx: &mut StatContext<'_>, stat: Stat) -> f64 {
        self.breakdown(ctx, stat).value
    }

    /// Every stage of the pipeline for `stat`
    pub fn breakdown(&self, ctx: &mut StatContext<'_>, stat: Stat) -> StatBreakdown {
        let base = self.base(ctx, stat);
        let bonus = base + self.collect(ctx, Getter::Bonus, stat);
        let multiplier = self.collect(ctx, Getter::Multiplier, stat);
        let extra_bonus = self.collect(ctx, Getter::ExtraBonus, stat);
        let value = self.unit.stats().finish(stat, bonus * multiplier + extra_bonus);
        StatBreakdown {
            stat,
            base,
            bonus,
            multiplier,
            extra_bonus,
            value,
        }
    }

    /// Base plus additive bonuses, before multipliers
    pub fn bonus_value(&self, ctx: &mut StatContext<'_>, stat: Stat) -> f64 {
        self.base(ctx, stat) + self.collect(ctx, Getter::Bonus, stat)
    }

    /// Base value; ratings are derived from attributes
    pub fn base(&self, ctx: &mut StatContext<'_>, stat: Stat) -> f64 {
        match stat {
            Stat::AttackRating => calculate_rating(self.accuracy_input(ctx)),
            Stat::EvasionRating => calculate_rating(self.evasion_input(ctx)),
            other => self.unit.stats().base(other),
        }
    }

    /// Weapon base damage for the first or second swing
    ///
    /// Weapons that affect the current attack type are ranked by level. A
    /// second swing with no second weapon deals nothing; ranged and blood
    /// attackers always use their first weapon.
    pub fn base_damage(&self, ctx: &mut StatContext<'_>, is_second: bool) -> f64 {
        let unit = self.unit;
        let is_second = is_second && !unit.attack_type.is_single_attack();
        let increased = self.resolve(ctx, Stat::IncreasedBaseDamage);
        let weapons = unit.weapons_for(unit.attack_type);

        match weapons.get(usize::from(is_second)) {
            Some(weapon) => {
                let tier = weapon.tier() + self.resolve(ctx, Stat::BonusWeaponTiers);
                weapon_damage_with_built_ins(tier, increased, &weapon.record().built_ins)
            }
            None if is_second => 0.0,
            None => 1.0 + increased,
        }
    }

    fn accuracy_input(&self, ctx: &mut StatContext<'_>) -> f64 {
        let attack_type = self.unit.attack_type;
        let mut value = self.resolve(ctx, attributes_for_attack(attack_type).to_hit.into());

        if self.unit.class.is_hybrid() {
            let other = match attack_type {
                AttackType::Melee => Some(AttackType::Cast),
                AttackType::Cast => Some(AttackType::Melee),
                _ => None,
            };
            if let Some(other) = other {
                value += 0.5 * self.resolve(ctx, attributes_for_attack(other).to_hit.into());
            }
        }

        value + self.luck_jitter(ctx)
    }

    fn evasion_input(&self, ctx: &mut StatContext<'_>) -> f64 {
        let incoming = self
            .opponent
            .map(|opponent| opponent.attack_type)
            .unwrap_or(self.unit.attack_type);
        let value = self.resolve(ctx, attributes_for_attack(incoming).dodge.into());
        value + self.luck_jitter(ctx)
    }

    fn luck_jitter(&self, ctx: &mut StatContext<'_>) -> f64 {
        if !self.unit.class.is_gambler() {
            return 0.0;
        }
        match ctx.roll() {
            Some(roll) => roll * self.resolve(ctx, Stat::Attribute(Attribute::Luck)),
            None => 0.0,
        }
    }

    fn collect(&self, ctx: &mut StatContext<'_>, getter: Getter, stat: Stat) -> f64 {
        let mut total = getter.identity();

        for (index, modifier) in self.unit.modifiers().iter().enumerate() {
            if modifier.disabled {
                continue;
            }

            let key = GuardKey {
                unit: self.unit.id(),
                modifier: index,
                getter,
                stat,
            };
            if !ctx.enter(key) {
                warn!(
                    unit = %self.unit.name,
                    modifier = modifier.name(),
                    ?getter,
                    %stat,
                    "skipping reentrant modifier evaluation"
                );
                ctx.record(StatIncident::Reentrant {
                    modifier: modifier.name(),
                    getter,
                    stat,
                });
                continue;
            }

            let contribution = match getter {
                Getter::Bonus => modifier.kind().bonus(self, ctx, stat),
                Getter::Multiplier => modifier.kind().multiplier(self, ctx, stat),
                Getter::ExtraBonus => modifier.kind().extra_bonus(self, ctx, stat),
            };
            ctx.leave(key);

            match contribution {
                Some(value) if value.is_finite() => total = getter.combine(total, value),
                Some(value) => {
                    error!(
                        unit = %self.unit.name,
                        modifier = modifier.name(),
                        ?getter,
                        %stat,
                        value,
                        "discarding non-finite modifier output"
                    );
                    ctx.record(StatIncident::NonFinite {
                        modifier: modifier.name(),
                        getter,
                        stat,
                        value,
                    });
                }
                None => {}
            }
        }

        total
    }
}
