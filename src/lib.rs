//! Statelayer: layered history-stack state machines
//!
//! A [`StateMachineLayer`] owns a set of named states and a stack of the
//! ones that are active. The top of the stack runs; the states beneath it
//! are suspended until everything above them is removed. That is exactly the
//! shape of game flow like "gameplay, with pause on top, with options on
//! top of that".
//!
//! # Core Concepts
//!
//! - **State**: the lifecycle contract (`enter`, `exit`, `handle_input`,
//!   `handle_should_change_state`, `logic_update`, `physics_update`)
//! - **Layer**: drives the current state each tick and performs every
//!   transition (`change_state`, `add_state`, `remove_state`)
//! - **Context**: whatever the driver injects into the hooks; states never
//!   reach for globals
//!
//! # Example
//!
//! ```rust
//! use statelayer::{State, StateMachineLayer, Transition};
//!
//! #[derive(Default)]
//! struct Input {
//!     cancel: bool,
//! }
//!
//! #[derive(Default)]
//! struct Pause {
//!     should_unpause: bool,
//! }
//!
//! impl State<Input> for Pause {
//!     fn enter(&mut self, _ctx: &mut Input) {}
//!     fn exit(&mut self, _ctx: &mut Input) {}
//!
//!     fn handle_input(&mut self, ctx: &mut Input) {
//!         self.should_unpause = ctx.cancel;
//!     }
//!
//!     fn handle_should_change_state(&mut self, _ctx: &mut Input) -> Transition {
//!         if self.should_unpause {
//!             Transition::Remove
//!         } else {
//!             Transition::None
//!         }
//!     }
//! }
//!
//! let mut input = Input::default();
//! let mut layer = StateMachineLayer::new("Menus");
//! layer.register_state("Pause", Pause::default()).unwrap();
//! layer.start(&mut input).unwrap();
//!
//! layer.add_state("Pause", &mut input).unwrap();
//! assert_eq!(layer.current_state_name(), Some("Pause"));
//!
//! input.cancel = true;
//! layer.update(&mut input).unwrap();
//! assert_eq!(layer.current_state(), None);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod events;
pub mod layer;
pub mod menu;

// Re-export commonly used types
pub use builder::{BuildError, LayerBuilder};
pub use config::LayerConfig;
pub use core::{HistoryStack, State, StateId, Transition};
pub use events::EventDispatcher;
pub use layer::{LayerError, StateMachineLayer};
