//! Configuration violations and loading errors.

use thiserror::Error;

/// A single problem found while validating a [`LayerConfig`].
///
/// [`LayerConfig`]: super::LayerConfig
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Layer name must not be empty")]
    EmptyLayerName,

    #[error("Default state '{name}' is not registered")]
    UnknownDefaultState { name: String },

    #[error("Default state '{name}' has leading or trailing whitespace")]
    UntrimmedDefaultState { name: String },
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse layer config: {0}")]
    Parse(#[from] serde_json::Error),
}
