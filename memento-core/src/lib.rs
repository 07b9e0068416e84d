//! # Memento Core Library
//!
//! Generic implementation of the Memento behavioral pattern.
//!
//! - [`Originator`] — owns a mutable piece of state and can externalize it
//! - [`Snapshot`] — an immutable, opaque capture of that state
//! - [`Caretaker`] — a LIFO history of snapshots that restores them without
//!   looking inside
//!
//! ```
//! use memento_core::{Caretaker, Originator, RestoreOutcome};
//!
//! let mut originator = Originator::new(String::new());
//! let mut caretaker = Caretaker::new();
//!
//! originator.set_state("State 1".to_string());
//! caretaker.save_memento(originator.save_state());
//! originator.set_state("State 2".to_string());
//!
//! assert!(caretaker.restore_last_state(&mut originator).is_restored());
//! assert_eq!(originator.state(), "State 1");
//! assert_eq!(
//!     caretaker.restore_last_state(&mut originator),
//!     RestoreOutcome::NothingToRestore
//! );
//! ```
//!
//! The core types are single-threaded; [`shared`] wraps them in locks for
//! use across threads.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod caretaker;
pub mod config;
pub mod error;
pub mod originator;
pub mod shared;
pub mod snapshot;

pub use caretaker::{Caretaker, RestoreOutcome};
pub use config::MementoConfig;
pub use error::MementoError;
pub use originator::Originator;
pub use shared::{SharedCaretaker, SharedOriginator};
pub use snapshot::{Snapshot, SnapshotId};
