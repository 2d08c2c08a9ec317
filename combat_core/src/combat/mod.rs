//! Combat - combatant snapshots, single swings and the duel loop

mod attack;
mod combatant;
mod fight;
mod result;

pub use attack::{attack_combatant, AttackResult};
pub use combatant::{
    add_item_to_combatant, attack_speed_for, create_hero_combatant, create_hero_combatant_with,
    create_monster_combatant, create_monster_combatant_with, CombatEquipment, CombatItem, Combatant,
};
pub use fight::{execute_fight, fight_hero, fight_monster};
pub use result::{CombatLogEntry, FightResult, LogEntryKind, Side};
