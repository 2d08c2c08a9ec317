//! Configuration loading from TOML files

mod constants;

pub use constants::{CombatConstants, DamageConstants, GameConstants};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load game constants, rejecting values the fight loop cannot run with
pub fn load_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    let constants: GameConstants = load_toml(path)?;
    validate_constants(&constants)?;
    Ok(constants)
}

pub fn validate_constants(constants: &GameConstants) -> Result<(), ConfigError> {
    let combat = &constants.combat;
    if combat.base_attack_speed <= 0.0 {
        return Err(ConfigError::ValidationError(
            "combat.base_attack_speed must be positive".to_string(),
        ));
    }
    if combat.min_attack_interval <= 0.0 {
        return Err(ConfigError::ValidationError(
            "combat.min_attack_interval must be positive".to_string(),
        ));
    }
    if combat.default_duration < 0.0 {
        return Err(ConfigError::ValidationError(
            "combat.default_duration cannot be negative".to_string(),
        ));
    }
    if constants.damage.max_damage_per_instance < 1.0 {
        return Err(ConfigError::ValidationError(
            "damage.max_damage_per_instance must be at least 1".to_string(),
        ));
    }
    Ok(())
}
