//! Builder API for ergonomic layer construction.
//!
//! # Example
//!
//! ```
//! use statelayer::builder::LayerBuilder;
//! use statelayer::core::{State, Transition};
//!
//! struct Idle;
//!
//! impl State<()> for Idle {
//!     fn enter(&mut self, _ctx: &mut ()) {}
//!     fn exit(&mut self, _ctx: &mut ()) {}
//!     fn handle_should_change_state(&mut self, _ctx: &mut ()) -> Transition {
//!         Transition::None
//!     }
//! }
//!
//! let mut layer = LayerBuilder::new()
//!     .name("World")
//!     .default_state("Idle")
//!     .state("Idle", Idle)
//!     .build()
//!     .unwrap();
//!
//! layer.start(&mut ()).unwrap();
//! assert_eq!(layer.current_state_name(), Some("Idle"));
//! ```

pub mod error;
pub mod layer;

pub use error::BuildError;
pub use layer::LayerBuilder;
