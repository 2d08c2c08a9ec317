//! Game constants configuration

use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub damage: DamageConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Milliseconds between swings before class adjustments
    #[serde(default = "default_base_attack_speed")]
    pub base_attack_speed: f64,
    /// Tick budget of a fight when the caller gives none
    #[serde(default = "default_duration")]
    pub default_duration: f64,
    /// Lower bound for single-attack cadences
    #[serde(default = "default_min_attack_interval")]
    pub min_attack_interval: f64,
    /// Share of its own max health a survivor is healed to at minimum
    #[serde(default = "default_victory_heal_fraction")]
    pub victory_heal_fraction: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            base_attack_speed: default_base_attack_speed(),
            default_duration: default_duration(),
            min_attack_interval: default_min_attack_interval(),
            victory_heal_fraction: default_victory_heal_fraction(),
        }
    }
}

fn default_base_attack_speed() -> f64 {
    1500.0
}
fn default_duration() -> f64 {
    15000.0
}
fn default_min_attack_interval() -> f64 {
    1.0
}
fn default_victory_heal_fraction() -> f64 {
    0.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Ceiling of a single damage instance; the excess is over-damage
    #[serde(default = "default_max_damage_per_instance")]
    pub max_damage_per_instance: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            max_damage_per_instance: default_max_damage_per_instance(),
        }
    }
}

fn default_max_damage_per_instance() -> f64 {
    1_000_000_000.0
}
