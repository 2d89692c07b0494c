//! Build errors for layer builders.

use crate::config::ConfigViolation;
use crate::layer::LayerError;
use thiserror::Error;

/// Errors that can occur when building a layer.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Layer config is invalid: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error(transparent)]
    Registration(#[from] LayerError),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
