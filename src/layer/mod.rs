//! State machine layers.
//!
//! A layer owns a registry of named states and a history stack. It is the
//! only thing that runs state hooks and the only place transitions happen.

mod error;
mod machine;
mod registry;

pub use error::LayerError;
pub use machine::StateMachineLayer;
pub use registry::StateRegistry;
