//! Thread-safe handles over [`Originator`] and [`Caretaker`].
//!
//! Each handle guards its value with one `parking_lot::Mutex`, so every
//! push or pop on a history is a single critical section. When both locks
//! are needed they are always taken history first, then originator.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::caretaker::{Caretaker, RestoreOutcome};
use crate::config::HistoryConfig;
use crate::originator::Originator;
use crate::snapshot::Snapshot;

/// Cloneable, lock-protected [`Originator`].
#[derive(Debug)]
pub struct SharedOriginator<T> {
    inner: Arc<Mutex<Originator<T>>>,
}

impl<T> Clone for SharedOriginator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedOriginator<T> {
    /// Create a shared originator starting at `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Originator::new(initial))),
        }
    }

    /// Overwrite the current state.
    pub fn set_state(&self, value: T) {
        self.inner.lock().set_state(value);
    }

    /// Apply a snapshot directly, bypassing any caretaker.
    pub fn restore_state(&self, snapshot: Snapshot<T>) {
        self.inner.lock().restore_state(snapshot);
    }
}

impl<T: Clone> SharedOriginator<T> {
    /// A copy of the current state.
    #[must_use]
    pub fn state(&self) -> T {
        self.inner.lock().state().clone()
    }

    /// Capture the current state.
    #[must_use]
    pub fn save_state(&self) -> Snapshot<T> {
        self.inner.lock().save_state()
    }
}

/// Cloneable, lock-protected [`Caretaker`].
#[derive(Debug)]
pub struct SharedCaretaker<T> {
    inner: Arc<Mutex<Caretaker<T>>>,
}

impl<T> Clone for SharedCaretaker<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedCaretaker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedCaretaker<T> {
    /// Create an empty, unbounded shared caretaker.
    #[must_use]
    pub fn new() -> Self {
        Self::from_caretaker(Caretaker::new())
    }

    /// Create from the `[history]` config section.
    #[must_use]
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::from_caretaker(Caretaker::from_config(config))
    }

    /// Wrap an existing caretaker.
    #[must_use]
    pub fn from_caretaker(caretaker: Caretaker<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(caretaker)),
        }
    }

    /// Push a snapshot, returning the evicted oldest entry if any.
    pub fn save_memento(&self, snapshot: Snapshot<T>) -> Option<Snapshot<T>> {
        self.inner.lock().save_memento(snapshot)
    }

    /// Pop the most recent snapshot and apply it to `originator`.
    ///
    /// The history lock is held across the pop and the restore.
    pub fn restore_last_state(&self, originator: &SharedOriginator<T>) -> RestoreOutcome {
        let mut history = self.inner.lock();
        let mut target = originator.inner.lock();
        history.restore_last_state(&mut target)
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the history holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<T: Clone> SharedCaretaker<T> {
    /// Capture `originator` and push the snapshot in one history critical
    /// section.
    pub fn save_from(&self, originator: &SharedOriginator<T>) -> Option<Snapshot<T>> {
        let mut history = self.inner.lock();
        let snapshot = originator.inner.lock().save_state();
        history.save_memento(snapshot)
    }
}
