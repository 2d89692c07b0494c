//! Journal of transitions performed by a layer.
//!
//! Every transition that actually changes the top of a layer is recorded with
//! the names involved and a timestamp. The journal is bounded; once full the
//! oldest record is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Which layer operation produced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    Change,
    Add,
    Remove,
}

/// A single transition as observed by the layer.
///
/// `from`/`to` are the names under which the states were registered at the
/// time of the transition; `None` stands for "no active state".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub kind: TransitionKind,
    pub from: Option<String>,
    pub to: Option<String>,
    /// History depth after the transition
    pub depth: usize,
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered journal of transitions.
///
/// # Example
///
/// ```rust
/// use statelayer::core::{TransitionJournal, TransitionKind, TransitionRecord};
/// use chrono::Utc;
///
/// let mut journal = TransitionJournal::with_capacity(8);
/// journal.record(TransitionRecord {
///     kind: TransitionKind::Add,
///     from: None,
///     to: Some("Pause".to_string()),
///     depth: 1,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.path(), vec![None, Some("Pause")]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionJournal {
    capacity: usize,
    records: VecDeque<TransitionRecord>,
}

impl Default for TransitionJournal {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }
}

/// Number of records a layer keeps unless configured otherwise.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 64;

impl TransitionJournal {
    /// A journal that keeps at most `capacity` records. A capacity of zero
    /// disables recording.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity.min(DEFAULT_JOURNAL_CAPACITY)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord) {
        if !self.is_enabled() {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The sequence of tops visited: the `from` of the oldest record, then
    /// the `to` of every record.
    pub fn path(&self) -> Vec<Option<&str>> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from.as_deref());
        }
        path.extend(self.records.iter().map(|r| r.to.as_deref()));
        path
    }

    /// Time between the oldest and newest record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: TransitionKind, from: Option<&str>, to: Option<&str>) -> TransitionRecord {
        TransitionRecord {
            kind,
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            depth: 1,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_journal_is_empty() {
        let journal = TransitionJournal::default();
        assert!(journal.is_empty());
        assert!(journal.path().is_empty());
        assert!(journal.duration().is_none());
        assert_eq!(journal.capacity(), DEFAULT_JOURNAL_CAPACITY);
    }

    #[test]
    fn path_follows_recorded_tops() {
        let mut journal = TransitionJournal::with_capacity(4);
        journal.record(record(TransitionKind::Add, None, Some("Pause")));
        journal.record(record(TransitionKind::Add, Some("Pause"), Some("Option")));
        journal.record(record(TransitionKind::Remove, Some("Option"), Some("Pause")));

        assert_eq!(
            journal.path(),
            vec![None, Some("Pause"), Some("Option"), Some("Pause")]
        );
        assert_eq!(journal.last().unwrap().kind, TransitionKind::Remove);
    }

    #[test]
    fn full_journal_drops_oldest() {
        let mut journal = TransitionJournal::with_capacity(2);
        journal.record(record(TransitionKind::Change, None, Some("A")));
        journal.record(record(TransitionKind::Change, Some("A"), Some("B")));
        journal.record(record(TransitionKind::Change, Some("B"), Some("C")));

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.path(), vec![Some("A"), Some("B"), Some("C")]);
    }

    #[test]
    fn zero_capacity_disables_recording() {
        let mut journal = TransitionJournal::with_capacity(0);
        journal.record(record(TransitionKind::Change, None, Some("A")));

        assert!(!journal.is_enabled());
        assert!(journal.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut journal = TransitionJournal::with_capacity(4);
        let start = Utc::now();
        let mut first = record(TransitionKind::Change, None, Some("A"));
        first.timestamp = start;
        let mut second = record(TransitionKind::Change, Some("A"), Some("B"));
        second.timestamp = start + chrono::Duration::milliseconds(25);

        journal.record(first);
        journal.record(second);

        assert_eq!(journal.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn journal_serializes_correctly() {
        let mut journal = TransitionJournal::with_capacity(4);
        journal.record(record(TransitionKind::Add, None, Some("Pause")));

        let json = serde_json::to_string(&journal).unwrap();
        let back: TransitionJournal = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.capacity(), 4);
    }
}
