//! Layer configuration.
//!
//! A layer's tunables are plain serde data so they can live next to the rest
//! of a game's data files. Validation uses Stillwater's `Validation` to report
//! every problem at once rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use statelayer::config::LayerConfig;
//!
//! let config = LayerConfig::from_json(r#"{ "name": "Menus", "default_state": "Gameplay" }"#)
//!     .unwrap();
//!
//! assert_eq!(config.name, "Menus");
//! assert!(config.validate(["Gameplay", "Pause"]).is_success());
//! assert!(config.validate(["Pause"]).is_failure());
//! ```

pub mod violations;

pub use violations::{ConfigError, ConfigViolation};

use crate::core::DEFAULT_JOURNAL_CAPACITY;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Label given to layers that were never named.
pub const DEFAULT_LAYER_NAME: &str = "New Layer";

/// Tunables of a [`StateMachineLayer`].
///
/// [`StateMachineLayer`]: crate::layer::StateMachineLayer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Descriptive label, not used for lookup
    pub name: String,

    /// State activated by `start`; empty means none
    pub default_state: String,

    /// Records kept by the transition journal; zero disables it
    pub journal_capacity: usize,

    /// Reject registering a name twice instead of replacing the mapping
    pub strict_registration: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LAYER_NAME.to_string(),
            default_state: String::new(),
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
            strict_registration: false,
        }
    }
}

impl LayerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn has_default_state(&self) -> bool {
        !self.default_state.is_empty()
    }

    /// Check the config against the names registered in a layer,
    /// accumulating ALL violations.
    pub fn validate<I, N>(&self, registered: I) -> Validation<(), NonEmptyVec<ConfigViolation>>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.name.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyLayerName)
        } else {
            Validation::success(())
        });

        if self.has_default_state() {
            if self.default_state.trim() != self.default_state {
                checks.push(Validation::fail(ConfigViolation::UntrimmedDefaultState {
                    name: self.default_state.clone(),
                }));
            }

            let known = registered
                .into_iter()
                .any(|name| name.as_ref() == self.default_state);
            if !known {
                checks.push(Validation::fail(ConfigViolation::UnknownDefaultState {
                    name: self.default_state.clone(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_an_unconfigured_layer() {
        let config = LayerConfig::default();
        assert_eq!(config.name, "New Layer");
        assert!(!config.has_default_state());
        assert_eq!(config.journal_capacity, DEFAULT_JOURNAL_CAPACITY);
        assert!(!config.strict_registration);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = LayerConfig::from_json(r#"{ "default_state": "Pause" }"#).unwrap();
        assert_eq!(config.name, DEFAULT_LAYER_NAME);
        assert_eq!(config.default_state, "Pause");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = LayerConfig::from_json("{ name: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = LayerConfig::new("Menus");
        config.strict_registration = true;

        let json = config.to_json().unwrap();
        assert_eq!(LayerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn empty_default_state_needs_no_registration() {
        let config = LayerConfig::new("Menus");
        assert!(config.validate(Vec::<String>::new()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = LayerConfig {
            name: "  ".to_string(),
            default_state: " Pause".to_string(),
            ..LayerConfig::default()
        };

        match config.validate(["Pause"]) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyLayerName)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UntrimmedDefaultState { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UnknownDefaultState { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
