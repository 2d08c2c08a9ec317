//! Errors surfaced by registration and record loading

use crate::config::ConfigError;
use thiserror::Error;

/// Combat engine error
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Unknown modifier kind: {0}")]
    UnknownModifier(String),
    #[error("Invalid payload for modifier {kind}: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
