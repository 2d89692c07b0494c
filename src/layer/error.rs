//! Layer errors.

use crate::core::StateId;
use thiserror::Error;

/// Errors raised by [`StateMachineLayer`] operations.
///
/// All of them point at wiring bugs (a state naming a peer that was never
/// registered, a handle from another layer) and are surfaced immediately.
///
/// [`StateMachineLayer`]: super::StateMachineLayer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayerError {
    #[error("State '{name}' is not registered in layer '{layer}'")]
    UnknownState { layer: String, name: String },

    #[error("State handle {id} does not belong to layer '{layer}'")]
    InvalidStateId { layer: String, id: StateId },

    #[error("State '{name}' is already registered in layer '{layer}'")]
    DuplicateState { layer: String, name: String },
}
