//! The demo script: change and save each label, then roll back.

use memento_core::{Caretaker, MementoConfig, Originator, RestoreOutcome};
use tracing::{debug, info};

use crate::transcript::{Transcript, TranscriptEntry};

/// Apply and save each label in order, then restore once per label.
///
/// Every observed state is appended to the returned transcript.
pub fn run_script<S: AsRef<str>>(
    originator: &mut Originator<String>,
    caretaker: &mut Caretaker<String>,
    labels: &[S],
) -> Transcript {
    let mut transcript = Transcript::new();

    for label in labels {
        originator.set_state(label.as_ref().to_string());
        transcript.push(TranscriptEntry::Changed(originator.state().clone()));
        caretaker.save_memento(originator.save_state());
    }

    debug!(saved = caretaker.len(), "Rolling back");
    for _ in labels {
        restore_step(originator, caretaker, &mut transcript);
    }

    transcript
}

/// One restore attempt, recorded into `transcript`.
pub fn restore_step(
    originator: &mut Originator<String>,
    caretaker: &mut Caretaker<String>,
    transcript: &mut Transcript,
) -> RestoreOutcome {
    let outcome = caretaker.restore_last_state(originator);
    let current = originator.state().clone();
    transcript.push(match outcome {
        RestoreOutcome::Restored { .. } => TranscriptEntry::Restored(current),
        RestoreOutcome::NothingToRestore => TranscriptEntry::NothingToRestore { current },
    });
    outcome
}

/// The configured walkthrough plus one extra restore against the drained
/// history.
#[must_use]
pub fn run_reference(config: &MementoConfig) -> Transcript {
    info!(
        labels = config.demo.labels.len(),
        max_depth = config.history.max_depth,
        "Running memento demo"
    );

    let mut originator = Originator::new(config.demo.initial_state.clone());
    let mut caretaker = Caretaker::from_config(&config.history);

    let mut transcript = run_script(&mut originator, &mut caretaker, &config.demo.labels);
    restore_step(&mut originator, &mut caretaker, &mut transcript);
    transcript
}
