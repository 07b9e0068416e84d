//! # Memento Demo
//!
//! Drives [`memento_core`] through the classic walkthrough: set three
//! states, saving after each, then restore them newest first. The script
//! returns a [`Transcript`] of observed values instead of printing, so the
//! binary decides how to render it and tests can assert on it directly.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod script;
pub mod transcript;

pub use script::{restore_step, run_reference, run_script};
pub use transcript::{Transcript, TranscriptEntry};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Logs go to stderr so stdout
/// carries only the transcript.
///
/// # Errors
/// Returns an error if a global subscriber is already set.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
