//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::stat::{Stat, StatContext, StatView};
pub use crate::types::{AttackType, Attribute, DamageType, HeroClass, HeroStance, ItemType};
pub use crate::unit::{HeroRecord, MonsterRecord, Unit};

// Modifiers
pub use crate::modifier::{GenericStatsModifier, ModifierDefinition, ModifierSource, StatModifier};

// Items and enchantments
pub use crate::enchantment::{enter_combat, EnchantmentType};
pub use crate::item::ItemRecord;

// Combat
pub use crate::combat::{execute_fight, fight_hero, fight_monster, CombatLogEntry, Combatant, FightResult, Side};

// Config
pub use crate::config::GameConstants;
