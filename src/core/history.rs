//! History stack of active and suspended states.
//!
//! The front of the stack is the current state. Every slot is an
//! `Option<StateId>`; an absent slot means "no active state". The stack is
//! never empty: popping the last slot heals it back to a single absent slot.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Ordered stack of state slots, top first.
///
/// # Example
///
/// ```rust
/// use statelayer::core::HistoryStack;
///
/// let history = HistoryStack::new();
/// assert_eq!(history.current(), None);
/// assert_eq!(history.depth(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<StateId>>", into = "Vec<Option<StateId>>")]
pub struct HistoryStack {
    slots: Vec<Option<StateId>>,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Option<StateId>>> for HistoryStack {
    fn from(slots: Vec<Option<StateId>>) -> Self {
        Self::from_slots(slots)
    }
}

impl From<HistoryStack> for Vec<Option<StateId>> {
    fn from(history: HistoryStack) -> Self {
        history.slots
    }
}

impl HistoryStack {
    /// A stack holding a single absent slot.
    pub fn new() -> Self {
        Self { slots: vec![None] }
    }

    /// Build a stack from slots listed top first. An empty list heals to a
    /// single absent slot.
    pub fn from_slots(slots: Vec<Option<StateId>>) -> Self {
        let mut history = Self { slots };
        history.heal();
        history
    }

    /// The state at the top, if any.
    pub fn current(&self) -> Option<StateId> {
        self.slots.first().copied().flatten()
    }

    /// Overwrite the top slot in place. Depth is unchanged.
    pub fn set_current(&mut self, slot: Option<StateId>) {
        self.heal();
        self.slots[0] = slot;
    }

    /// Insert a new top, keeping the old one beneath it.
    pub fn push(&mut self, id: StateId) {
        self.slots.insert(0, Some(id));
    }

    /// Remove the top slot and return it. Heals the stack if it would
    /// otherwise be left empty.
    pub fn pop(&mut self) -> Option<StateId> {
        if self.slots.is_empty() {
            self.heal();
            return None;
        }
        let top = self.slots.remove(0);
        self.heal();
        top
    }

    pub fn depth(&self) -> usize {
        self.slots.len()
    }

    /// All slots, top first.
    pub fn slots(&self) -> &[Option<StateId>] {
        &self.slots
    }

    /// Whether `id` appears anywhere in the stack.
    pub fn contains(&self, id: StateId) -> bool {
        self.slots.contains(&Some(id))
    }

    fn heal(&mut self) {
        if self.slots.is_empty() {
            trace!("history stack emptied, restoring absent slot");
            self.slots.push(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_has_single_absent_slot() {
        let history = HistoryStack::new();
        assert_eq!(history.slots(), &[None]);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn set_current_replaces_in_place() {
        let mut history = HistoryStack::new();
        history.set_current(Some(StateId::new(0, 1)));
        history.set_current(Some(StateId::new(0, 2)));

        assert_eq!(history.depth(), 1);
        assert_eq!(history.current(), Some(StateId::new(0, 2)));
    }

    #[test]
    fn push_keeps_previous_top_beneath() {
        let mut history = HistoryStack::new();
        history.set_current(Some(StateId::new(0, 1)));
        history.push(StateId::new(0, 2));

        assert_eq!(history.slots(), &[Some(StateId::new(0, 2)), Some(StateId::new(0, 1))]);
        assert!(history.contains(StateId::new(0, 1)));
    }

    #[test]
    fn pop_exposes_previous_top() {
        let mut history = HistoryStack::new();
        history.set_current(Some(StateId::new(0, 1)));
        history.push(StateId::new(0, 2));

        assert_eq!(history.pop(), Some(StateId::new(0, 2)));
        assert_eq!(history.current(), Some(StateId::new(0, 1)));
    }

    #[test]
    fn popping_last_slot_heals() {
        let mut history = HistoryStack::new();
        history.set_current(Some(StateId::new(0, 3)));

        assert_eq!(history.pop(), Some(StateId::new(0, 3)));
        assert_eq!(history.slots(), &[None]);
    }

    #[test]
    fn empty_slots_heal_on_construction() {
        let history = HistoryStack::from_slots(Vec::new());
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn absent_top_can_sit_above_suspended_states() {
        let history = HistoryStack::from_slots(vec![None, Some(StateId::new(0, 4))]);
        assert_eq!(history.current(), None);
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = HistoryStack::from_slots(vec![Some(StateId::new(0, 0)), None]);
        let json = serde_json::to_string(&history).unwrap();
        let back: HistoryStack = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }

    #[test]
    fn deserializing_empty_slots_heals() {
        let history: HistoryStack = serde_json::from_str("[]").unwrap();
        assert_eq!(history.slots(), &[None]);
    }
}
