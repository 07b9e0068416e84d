//! Caretaker — LIFO history of snapshots.
//!
//! The caretaker pushes and pops [`Snapshot`]s as opaque units. It never
//! reads their payloads; restoring hands the popped snapshot straight to
//! [`Originator::restore_state`].
//!
//! Restoring from an empty history is an expected condition, not an error:
//! the originator is left untouched, a notice is logged and
//! [`RestoreOutcome::NothingToRestore`] is returned.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::HistoryConfig;
use crate::originator::Originator;
use crate::snapshot::{Snapshot, SnapshotId};

/// Result of [`Caretaker::restore_last_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The top snapshot was popped and applied.
    Restored {
        /// ID of the snapshot that was applied.
        id: SnapshotId,
    },
    /// History was empty; nothing changed.
    NothingToRestore,
}

impl RestoreOutcome {
    /// Whether a snapshot was applied.
    #[must_use]
    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored { .. })
    }
}

/// Stack of snapshots, optionally bounded in depth.
#[derive(Debug)]
pub struct Caretaker<T> {
    history: VecDeque<Snapshot<T>>,
    max_depth: Option<usize>,
}

impl<T> Default for Caretaker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Caretaker<T> {
    /// Create an empty, unbounded caretaker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: VecDeque::new(),
            max_depth: None,
        }
    }

    /// Create an empty caretaker keeping at most `max_depth` snapshots.
    /// A depth of 0 means unbounded.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self::from_config(&HistoryConfig { max_depth })
    }

    /// Create an empty caretaker from the `[history]` config section.
    ///
    /// The bound only drives eviction; storage grows with the history.
    #[must_use]
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self {
            history: VecDeque::new(),
            max_depth: config.depth_limit(),
        }
    }

    /// Push a snapshot onto the history.
    ///
    /// When the history is already at its depth bound, the oldest snapshot
    /// is evicted first and returned.
    pub fn save_memento(&mut self, snapshot: Snapshot<T>) -> Option<Snapshot<T>> {
        let evicted = match self.max_depth {
            Some(max) if self.history.len() >= max => self.history.pop_front(),
            _ => None,
        };
        if let Some(ref old) = evicted {
            debug!(snapshot = %old.id(), "Evicted oldest memento");
        }

        debug!(snapshot = %snapshot.id(), depth = self.history.len() + 1, "Saved memento");
        self.history.push_back(snapshot);
        evicted
    }

    /// Pop the most recent snapshot and restore `originator` from it.
    ///
    /// With an empty history this logs "No state to restore." and leaves
    /// `originator` unchanged.
    pub fn restore_last_state(&mut self, originator: &mut Originator<T>) -> RestoreOutcome {
        let Some(snapshot) = self.history.pop_back() else {
            info!("No state to restore.");
            return RestoreOutcome::NothingToRestore;
        };

        let id = snapshot.id();
        originator.restore_state(snapshot);
        debug!(snapshot = %id, depth = self.history.len(), "Restored memento");
        RestoreOutcome::Restored { id }
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Configured depth bound, or `None` when unbounded.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        debug!(dropped = self.history.len(), "Cleared memento history");
        self.history.clear();
    }
}
