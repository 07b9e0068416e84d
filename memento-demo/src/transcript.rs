//! The ordered record of what the demo observed.

/// One observation made by the demo script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// State after an explicit change.
    Changed(String),
    /// State after a successful restore.
    Restored(String),
    /// A restore found no history; `current` is the unchanged state.
    NothingToRestore {
        /// State at the time of the failed restore.
        current: String,
    },
}

/// Observations in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observation.
    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// All observations.
    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Every state value seen, in order, regardless of how it was reached.
    #[must_use]
    pub fn observed_states(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| match entry {
                TranscriptEntry::Changed(s)
                | TranscriptEntry::Restored(s)
                | TranscriptEntry::NothingToRestore { current: s } => s.as_str(),
            })
            .collect()
    }

    /// States reached by explicit changes.
    #[must_use]
    pub fn changed_states(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Changed(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// States reached by successful restores.
    #[must_use]
    pub fn restored_states(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Restored(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of restores that found an empty history.
    #[must_use]
    pub fn empty_restores(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, TranscriptEntry::NothingToRestore { .. }))
            .count()
    }

    /// Console lines for this transcript.
    ///
    /// A blank line and a "Restoring to previous states..." header precede
    /// the first restore attempt.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        let mut restoring = false;

        for entry in &self.entries {
            if !restoring && !matches!(entry, TranscriptEntry::Changed(_)) {
                restoring = true;
                lines.push(String::new());
                lines.push("Restoring to previous states...".to_string());
            }
            match entry {
                TranscriptEntry::Changed(s) | TranscriptEntry::Restored(s) => {
                    lines.push(format!("Current State: {s}"));
                }
                TranscriptEntry::NothingToRestore { current } => {
                    lines.push("No state to restore.".to_string());
                    lines.push(format!("Current State: {current}"));
                }
            }
        }
        lines
    }
}
