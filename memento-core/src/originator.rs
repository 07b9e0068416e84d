//! Originator — the owner of the state being captured and restored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// Holds one mutable value and converts it to and from [`Snapshot`]s.
///
/// The initial value is explicit; [`Originator::default`] starts from
/// `T::default()` (the empty string for `String`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Originator<T> {
    current: T,
}

impl<T> Originator<T> {
    /// Create an originator starting at `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { current: initial }
    }

    /// Overwrite the current state.
    pub fn set_state(&mut self, value: T) {
        self.current = value;
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &T {
        &self.current
    }

    /// Overwrite the current state with the snapshot's payload.
    ///
    /// Snapshots are trusted: there is no check that this originator
    /// produced it.
    pub fn restore_state(&mut self, snapshot: Snapshot<T>) {
        self.current = snapshot.into_state();
    }

    /// Consume the originator, yielding the current state.
    #[must_use]
    pub fn into_state(self) -> T {
        self.current
    }
}

impl<T: Clone> Originator<T> {
    /// Capture the current state. Does not modify it.
    #[must_use]
    pub fn save_state(&self) -> Snapshot<T> {
        Snapshot::new(self.current.clone())
    }
}

impl<T: fmt::Display> fmt::Display for Originator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current.fmt(f)
    }
}
