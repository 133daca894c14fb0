use thiserror::Error;

use crate::config::ValueKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Duplicate config key: {0}")]
    DuplicateKey(String),

    #[error("Config key {key} is nested {depth} levels deep (maximum is {max})")]
    PathTooDeep {
        key: String,
        depth: usize,
        max: usize,
    },

    #[error("Config key {key} expects {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Value {value} rejected for {key}")]
    Rejected { key: String, value: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Cannot parse config file: {0}")]
    Parse(String),
}

impl ConfigError {
    /// True for the per-item validation failures that must never abort a load.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConfigError::TypeMismatch { .. } | ConfigError::Rejected { .. }
        )
    }
}
