//! Snapshot — an immutable capture of an originator's state.
//!
//! A [`Snapshot`] holds exactly one payload and never changes after it is
//! built. Everything outside the [`Originator`](crate::Originator) should
//! treat the payload as opaque and refer to snapshots by [`SnapshotId`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier attached to every snapshot at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    /// Create a new random snapshot ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable capture of state of type `T`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    id: SnapshotId,
    captured_at: DateTime<Utc>,
    state: T,
}

impl<T> Snapshot<T> {
    /// Capture `state` into a new snapshot.
    #[must_use]
    pub fn new(state: T) -> Self {
        Self {
            id: SnapshotId::new(),
            captured_at: Utc::now(),
            state,
        }
    }

    /// The captured state.
    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Consume the snapshot, yielding its payload.
    #[must_use]
    pub fn into_state(self) -> T {
        self.state
    }

    /// Identifier assigned at capture.
    #[must_use]
    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// Wall-clock time of capture.
    #[must_use]
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

// The payload is left out so logs never leak originator state.
impl<T> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("id", &self.id)
            .field("captured_at", &self.captured_at)
            .finish_non_exhaustive()
    }
}
