//! Named-event publish/subscribe.
//!
//! States announce things like `"OnPause"` without knowing who listens. The
//! dispatcher is an ordinary value owned by the layer's context, so every
//! test gets its own.

use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Handle returned by [`EventDispatcher::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut()>;

/// Dispatches named events to the listeners registered for them.
///
/// # Example
///
/// ```rust
/// use statelayer::events::EventDispatcher;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let paused = Rc::new(Cell::new(0));
/// let mut events = EventDispatcher::new();
///
/// let seen = Rc::clone(&paused);
/// events.add_listener("OnPause", move || seen.set(seen.get() + 1));
///
/// assert_eq!(events.dispatch("OnPause"), 1);
/// assert_eq!(events.dispatch("OnFlash"), 0);
/// assert_eq!(paused.get(), 1);
/// ```
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(event, listeners)| (event.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`. Listeners run in registration order.
    pub fn add_listener<F>(&mut self, event: impl Into<String>, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event.into())
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        self.listeners.retain(|_, listeners| {
            let before = listeners.len();
            listeners.retain(|(listener_id, _)| *listener_id != id);
            removed |= listeners.len() != before;
            !listeners.is_empty()
        });
        removed
    }

    /// Invoke every listener of `event` and return how many ran.
    ///
    /// Events nobody listens to are dropped silently.
    pub fn dispatch(&mut self, event: &str) -> usize {
        let Some(listeners) = self.listeners.get_mut(event) else {
            trace!(event, "no listeners");
            return 0;
        };
        for (_, listener) in listeners.iter_mut() {
            listener();
        }
        debug!(event, listeners = listeners.len(), "dispatched");
        listeners.len()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut events = EventDispatcher::new();

        let first = Rc::clone(&order);
        events.add_listener("OnPause", move || first.borrow_mut().push(1));
        let second = Rc::clone(&order);
        events.add_listener("OnPause", move || second.borrow_mut().push(2));

        assert_eq!(events.dispatch("OnPause"), 2);
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn unknown_event_is_a_no_op() {
        let mut events = EventDispatcher::new();
        assert_eq!(events.dispatch("OnFlash"), 0);
        assert_eq!(events.listener_count("OnFlash"), 0);
    }

    #[test]
    fn removed_listener_no_longer_runs() {
        let hits = Rc::new(RefCell::new(0));
        let mut events = EventDispatcher::new();

        let counter = Rc::clone(&hits);
        let id = events.add_listener("OnFlash", move || *counter.borrow_mut() += 1);

        assert!(events.remove_listener(id));
        assert!(!events.remove_listener(id));
        assert_eq!(events.dispatch("OnFlash"), 0);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn listeners_are_scoped_to_their_event() {
        let mut events = EventDispatcher::new();
        events.add_listener("OnPause", || {});
        events.add_listener("OnFlash", || {});
        events.add_listener("OnFlash", || {});

        assert_eq!(events.listener_count("OnPause"), 1);
        assert_eq!(events.listener_count("OnFlash"), 2);
    }
}
