//! Hit resolution - attack rating against evasion rating

use super::calculate_hit_chance;
use crate::stat::{Stat, StatContext, StatView};
use crate::unit::Unit;
use rand::Rng;

/// Chance that `attacker` lands a swing on `victim`
///
/// Gambler ratings draw their luck jitter from `rng`.
pub fn calculate_odds(attacker: &Unit, victim: &Unit, rng: &mut impl Rng) -> f64 {
    let mut ctx = StatContext::with_rng(rng);
    let attack_rating = StatView::new(attacker, Some(victim)).resolve(&mut ctx, Stat::AttackRating);
    let evasion_rating = StatView::new(victim, Some(attacker)).resolve(&mut ctx, Stat::EvasionRating);
    calculate_hit_chance(attack_rating, evasion_rating)
}

pub fn calculate_hit(attacker: &Unit, victim: &Unit, rng: &mut impl Rng) -> bool {
    let odds = calculate_odds(attacker, victim, rng);
    rng.gen::<f64>() < odds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttackType, Attribute, HeroClass};
    use rand::rngs::mock::StepRng;

    fn unit(name: &str, dexterity: f64) -> Unit {
        let mut unit = Unit::new(name, HeroClass::Fighter, AttackType::Melee);
        unit.set_base(Attribute::Dexterity.into(), dexterity);
        unit
    }

    #[test]
    fn test_even_match() {
        let attacker = unit("a", 50.0);
        let victim = unit("b", 50.0);
        let odds = calculate_odds(&attacker, &victim, &mut StepRng::new(0, 0));
        assert!((odds - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_dexterity_improves_odds() {
        let victim = unit("b", 50.0);
        let weak = calculate_odds(&unit("a", 10.0), &victim, &mut StepRng::new(0, 0));
        let strong = calculate_odds(&unit("a", 500.0), &victim, &mut StepRng::new(0, 0));
        assert!(weak < strong);
        assert!(weak >= 0.4 && strong <= 1.0);
    }

    #[test]
    fn test_zero_roll_always_hits() {
        let attacker = unit("a", 1.0);
        let victim = unit("b", 1000.0);
        assert!(calculate_hit(&attacker, &victim, &mut StepRng::new(0, 0)));
    }

    #[test]
    fn test_high_roll_misses_unless_certain() {
        let attacker = unit("a", 50.0);
        let victim = unit("b", 50.0);
        assert!(!calculate_hit(&attacker, &victim, &mut StepRng::new(u64::MAX, 0)));
    }
}
