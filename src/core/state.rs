//! The lifecycle contract every state implements.
//!
//! A state is driven exclusively by the [`StateMachineLayer`] that owns it.
//! Hooks receive the layer's injected context and never see the layer itself,
//! so a state cannot reach into its peers or trigger a transition from
//! `enter`/`exit`. The only way a state asks for a transition is by returning
//! a [`Transition`] from [`State::handle_should_change_state`].
//!
//! [`StateMachineLayer`]: crate::layer::StateMachineLayer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a state registered in a layer.
///
/// Two handles compare equal iff they refer to the same registered state
/// instance. Registering a second state under an existing name yields a new
/// handle; the old one stays valid for anything still holding it. A handle
/// carries the identity of the registry that issued it, so another layer
/// rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId {
    pub(crate) owner: u64,
    pub(crate) index: usize,
}

impl StateId {
    pub(crate) fn new(owner: u64, index: usize) -> Self {
        Self { owner, index }
    }

    /// Position of the state in its layer's storage.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Transition request returned by [`State::handle_should_change_state`].
///
/// The layer executes the request right after the hook returns and before
/// `logic_update` runs, so `logic_update` always sees the post-transition
/// current state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Stay in the current state.
    #[default]
    None,

    /// Replace the top of the history in place. An empty name clears the
    /// top, leaving no active state.
    Change(String),

    /// Push the named state, suspending the current one beneath it.
    Add(String),

    /// Pop the current state and resume the one beneath it.
    Remove,
}

impl Transition {
    /// Request a replacement of the current state.
    pub fn change(name: impl Into<String>) -> Self {
        Self::Change(name.into())
    }

    /// Request an overlay on top of the current state.
    pub fn add(name: impl Into<String>) -> Self {
        Self::Add(name.into())
    }

    /// Request that the top of the history be cleared.
    pub fn clear() -> Self {
        Self::Change(String::new())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A unit of behavior driven by a [`StateMachineLayer`].
///
/// `C` is the context injected by whoever drives the layer. It carries every
/// collaborator a state needs (input, UI toggles, event dispatch), so states
/// stay testable without any global services.
///
/// # Example
///
/// ```rust
/// use statelayer::core::{State, Transition};
///
/// #[derive(Default)]
/// struct Frames {
///     ticks: u32,
/// }
///
/// struct Countdown {
///     remaining: u32,
/// }
///
/// impl State<Frames> for Countdown {
///     fn enter(&mut self, _ctx: &mut Frames) {
///         self.remaining = 3;
///     }
///
///     fn exit(&mut self, _ctx: &mut Frames) {}
///
///     fn handle_should_change_state(&mut self, _ctx: &mut Frames) -> Transition {
///         if self.remaining == 0 {
///             Transition::Remove
///         } else {
///             Transition::None
///         }
///     }
///
///     fn logic_update(&mut self, ctx: &mut Frames) {
///         ctx.ticks += 1;
///         self.remaining = self.remaining.saturating_sub(1);
///     }
/// }
/// ```
///
/// [`StateMachineLayer`]: crate::layer::StateMachineLayer
pub trait State<C> {
    /// Activation hook. Runs once per activation, after the layer has made
    /// this state current and after the previous state's `exit`.
    fn enter(&mut self, ctx: &mut C);

    /// Deactivation hook. Runs once per deactivation, before the layer moves
    /// the current slot away from this state.
    fn exit(&mut self, ctx: &mut C);

    /// Sample input into internal flags. Must not decide transitions.
    fn handle_input(&mut self, _ctx: &mut C) {}

    /// Consume the flags set by `handle_input` and decide the transition.
    fn handle_should_change_state(&mut self, ctx: &mut C) -> Transition;

    /// Per-frame logic.
    fn logic_update(&mut self, _ctx: &mut C) {}

    /// Per-fixed-step logic.
    fn physics_update(&mut self, _ctx: &mut C) {}
}
