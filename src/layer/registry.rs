//! Name to state registry.

use crate::core::{State, StateId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

struct Entry<C> {
    name: String,
    state: Box<dyn State<C>>,
}

/// Owns every state registered in a layer and maps names to them.
///
/// States are never dropped while the registry lives, so a [`StateId`] stays
/// valid even after its name has been given to another state. The flip side
/// is that storage only grows: a state replaced by re-registering its name
/// is kept until the registry itself is dropped.
///
/// Each registry has its own owner tag. Handles issued by a different
/// registry are rejected by every accessor.
pub struct StateRegistry<C> {
    owner: u64,
    entries: Vec<Entry<C>>,
    by_name: HashMap<String, StateId>,
}

impl<C> Default for StateRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> StateRegistry<C> {
    pub fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Store `state` under `name`. Returns the new handle and the handle the
    /// name pointed at before, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        state: Box<dyn State<C>>,
    ) -> (StateId, Option<StateId>) {
        let name = name.into();
        let id = StateId::new(self.owner, self.entries.len());
        self.entries.push(Entry {
            name: name.clone(),
            state,
        });
        let replaced = self.by_name.insert(name, id);
        (id, replaced)
    }

    pub fn lookup(&self, name: &str) -> Option<StateId> {
        self.by_name.get(name).copied()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn contains_id(&self, id: StateId) -> bool {
        self.entry(id).is_some()
    }

    /// Name the state was registered under.
    pub fn name_of(&self, id: StateId) -> Option<&str> {
        self.entry(id).map(|entry| entry.name.as_str())
    }

    pub fn get(&self, id: StateId) -> Option<&(dyn State<C> + 'static)> {
        self.entry(id).map(|entry| &*entry.state)
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut (dyn State<C> + 'static)> {
        if id.owner != self.owner {
            return None;
        }
        self.entries.get_mut(id.index).map(|entry| &mut *entry.state)
    }

    /// Names currently mapped, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Number of names currently mapped.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    fn entry(&self, id: StateId) -> Option<&Entry<C>> {
        if id.owner != self.owner {
            return None;
        }
        self.entries.get(id.index)
    }
}
