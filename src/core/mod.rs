//! Core state machine types.
//!
//! This module contains the building blocks a layer is made of:
//! - The `State` lifecycle contract and the `Transition` requests states return
//! - The `HistoryStack` of active and suspended states
//! - The `TransitionJournal` recording what a layer did

mod history;
mod journal;
mod state;

pub use history::HistoryStack;
pub use journal::{
    TransitionJournal, TransitionKind, TransitionRecord, DEFAULT_JOURNAL_CAPACITY,
};
pub use state::{State, StateId, Transition};
