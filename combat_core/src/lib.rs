//! combat_core - Stat, modifier and duel resolution for RPG combatants
//!
//! This library provides:
//! - Unit: a stat graph fed by an ordered list of modifiers
//! - Items and enchantments: equipment that registers modifiers on its wielder
//! - Damage: hit chance, crit cascade, damage conversion and resistances
//! - Combat: attack cadences and duels that produce a combat log

pub mod combat;
pub mod config;
pub mod damage;
pub mod enchantment;
pub mod error;
pub mod item;
pub mod modifier;
pub mod prelude;
pub mod stat;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use combat::{
    attack_combatant, create_hero_combatant, create_monster_combatant, execute_fight, fight_hero, fight_monster,
    CombatLogEntry, Combatant, FightResult, LogEntryKind, Side,
};
pub use config::{load_constants, ConfigError, GameConstants};
pub use damage::{calculate_damage, calculate_hit, calculate_hit_chance, calculate_rating, DamageInstance, DamageOutcome};
pub use enchantment::{apply_counter_spells, enter_combat, EnchantmentType};
pub use error::CombatError;
pub use item::{ArtifactRecord, BaseItemCatalog, ItemRecord};
pub use modifier::{GenericStatsModifier, Modifier, ModifierDefinition, ModifierSource, StatModifier};
pub use stat::{Stat, StatBreakdown, StatContext, StatView};
pub use types::{AttackType, Attribute, DamageType, HeroClass, HeroStance, ItemType, Terrain};
pub use unit::{HeroRecord, MonsterRecord, Unit, UnitId};
