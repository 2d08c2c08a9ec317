//! Fight orchestration - attack cadences, health bookkeeping and victory heals

use super::{
    attack_combatant, create_hero_combatant, create_monster_combatant, CombatLogEntry, Combatant, FightResult,
    LogEntryKind, Side,
};
use crate::config::GameConstants;
use crate::enchantment::enter_combat;
use crate::types::AttackType;
use crate::unit::{HeroRecord, MonsterRecord};
use rand::Rng;
use tracing::debug;

/// Run a duel for at most `duration` milliseconds
///
/// Both sides accumulate time toward their attack speed; a side swings each
/// time its remainder reaches its speed, keeping any overflow. The fight
/// ends when either side dies or the budget runs out, in which case the
/// unspent part of the budget is banked in the remainders and
/// `duration_remaining` is 0.
pub fn execute_fight(
    attacker: &mut Combatant,
    victim: &mut Combatant,
    duration: f64,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> FightResult {
    enter_combat(&mut attacker.unit, &mut victim.unit);

    let mut result = FightResult::new();
    let mut remaining = if duration.is_finite() {
        duration.max(0.0)
    } else {
        constants.combat.default_duration
    };
    let min_interval = constants.combat.min_attack_interval.max(f64::MIN_POSITIVE);
    let attacker_speed = attacker.attack_speed.max(min_interval);
    let victim_speed = victim.attack_speed.max(min_interval);
    let mut attacker_second = false;
    let mut victim_second = false;

    while attacker.is_alive() && victim.is_alive() {
        let step = (attacker_speed - attacker.attack_speed_remainder)
            .max(0.0)
            .min((victim_speed - victim.attack_speed_remainder).max(0.0));
        if step > remaining {
            attacker.attack_speed_remainder += remaining;
            victim.attack_speed_remainder += remaining;
            remaining = 0.0;
            break;
        }
        remaining -= step;
        attacker.attack_speed_remainder += step;
        victim.attack_speed_remainder += step;

        if attacker.attack_speed_remainder >= attacker_speed {
            attacker.attack_speed_remainder -= attacker_speed;
            take_turn(Side::Attacker, attacker, victim, &mut attacker_second, constants, &mut result, rng);
        }
        if victim.is_alive() && victim.attack_speed_remainder >= victim_speed {
            victim.attack_speed_remainder -= victim_speed;
            take_turn(Side::Victim, victim, attacker, &mut victim_second, constants, &mut result, rng);
        }
    }

    result.attacker_died = !attacker.is_alive();
    result.victim_died = !victim.is_alive();
    match (result.attacker_died, result.victim_died) {
        (false, true) => victory_heal(Side::Attacker, attacker, victim, constants, &mut result),
        (true, false) => victory_heal(Side::Victim, victim, attacker, constants, &mut result),
        _ => {}
    }

    result.attacker_attack_speed_remainder = attacker.attack_speed_remainder;
    result.victim_attack_speed_remainder = victim.attack_speed_remainder;
    result.duration_remaining = remaining;

    debug!(
        attacker = %attacker.name,
        victim = %victim.name,
        entries = result.log.len(),
        attacker_died = result.attacker_died,
        victim_died = result.victim_died,
        "fight finished"
    );
    result
}

/// One swing by `side`, applied to both combatants and the running result
fn take_turn(
    side: Side,
    actor: &mut Combatant,
    target: &mut Combatant,
    is_second: &mut bool,
    constants: &GameConstants,
    result: &mut FightResult,
    rng: &mut impl Rng,
) {
    let outcome = attack_combatant(actor, target, *is_second, &constants.damage, rng);
    if actor.is_dual_wielding() {
        *is_second = !*is_second;
    }

    target.health -= outcome.damage + outcome.enchantment_damage;
    actor.health = (actor.health + outcome.heal).min(actor.max_health.max(actor.health));

    result.add_damage(side.opponent(), outcome.damage, outcome.enchantment_damage);
    result.add_heal(side, outcome.heal);
    result.log.extend(outcome.log);
}

/// Heal the survivor by `max(fraction · own max health, fallen max health)`
fn victory_heal(
    side: Side,
    survivor: &mut Combatant,
    fallen: &Combatant,
    constants: &GameConstants,
    result: &mut FightResult,
) {
    let amount = (constants.combat.victory_heal_fraction * survivor.max_health)
        .max(fallen.max_health)
        .round();
    survivor.health = (survivor.health + amount).min(survivor.max_health.max(survivor.health));
    result.add_heal(side, amount);
    result.log.push(CombatLogEntry::heal(
        LogEntryKind::VictoryHeal,
        &survivor.name,
        &survivor.name,
        survivor.attack_type,
        amount,
    ));
}

/// Fight a hero against a monster for the default duration
///
/// `modifier` may adjust either combatant before the fight starts.
pub fn fight_monster(
    hero: &HeroRecord,
    monster: &MonsterRecord,
    attack_type: AttackType,
    modifier: Option<&dyn Fn(&mut Combatant, &mut Combatant)>,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> FightResult {
    let mut attacker = create_hero_combatant(hero, attack_type, &constants.combat);
    let mut victim = create_monster_combatant(monster, &constants.combat);
    if let Some(modifier) = modifier {
        modifier(&mut attacker, &mut victim);
    }
    execute_fight(&mut attacker, &mut victim, constants.combat.default_duration, constants, rng)
}

/// Fight two heroes; the victim defends with its class attack type
pub fn fight_hero(
    attacker: &HeroRecord,
    victim: &HeroRecord,
    attack_type: AttackType,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> FightResult {
    let mut attacker = create_hero_combatant(attacker, attack_type, &constants.combat);
    let mut victim = create_hero_combatant(victim, victim.class.default_attack_type(), &constants.combat);
    execute_fight(&mut attacker, &mut victim, constants.combat.default_duration, constants, rng)
}
