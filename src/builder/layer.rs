//! Builder for constructing layers.

use crate::builder::error::BuildError;
use crate::config::LayerConfig;
use crate::core::State;
use crate::layer::StateMachineLayer;
use stillwater::validation::Validation;

/// Builder for constructing a [`StateMachineLayer`] with a fluent API.
///
/// Unlike registering states on a live layer, `build` validates the whole
/// configuration against the registered names and reports every problem.
pub struct LayerBuilder<C> {
    config: LayerConfig,
    states: Vec<(String, Box<dyn State<C>>)>,
}

impl<C> LayerBuilder<C> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: LayerConfig::default(),
            states: Vec::new(),
        }
    }

    /// Start from an existing configuration, e.g. one loaded from disk.
    pub fn from_config(config: LayerConfig) -> Self {
        Self {
            config,
            states: Vec::new(),
        }
    }

    /// Set the layer's label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the state activated on `start`.
    pub fn default_state(mut self, name: impl Into<String>) -> Self {
        self.config.default_state = name.into();
        self
    }

    /// Set how many transitions the journal keeps.
    pub fn journal_capacity(mut self, capacity: usize) -> Self {
        self.config.journal_capacity = capacity;
        self
    }

    /// Reject duplicate names instead of replacing them.
    pub fn strict(mut self) -> Self {
        self.config.strict_registration = true;
        self
    }

    /// Register a state. Registration happens in call order at build time.
    pub fn state<S>(mut self, name: impl Into<String>, state: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.states.push((name.into(), Box::new(state)));
        self
    }

    /// Build the layer.
    /// Returns an error if the config is invalid or a registration fails.
    pub fn build(self) -> Result<StateMachineLayer<C>, BuildError> {
        let names = self.states.iter().map(|(name, _)| name.as_str());
        if let Validation::Failure(violations) = self.config.validate(names) {
            return Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect(),
            ));
        }

        let mut layer = StateMachineLayer::with_config(self.config);
        for (name, state) in self.states {
            layer.register_boxed(name, state)?;
        }
        Ok(layer)
    }
}

impl<C> Default for LayerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
