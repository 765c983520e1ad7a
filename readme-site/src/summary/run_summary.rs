//! Run summary types.

use super::result::FetchOutcome;

/// Summary of a complete run.
///
/// `repositories_discovered` is what the final status line reports, even
/// when some repositories failed and `files_written` is smaller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories discovered.
    pub repositories_discovered: usize,

    /// Number of content files written.
    pub files_written: usize,

    /// Number of repositories whose fetch or write failed.
    pub fetches_failed: usize,
}

impl RunSummary {
    /// Creates a summary for a run that discovered `discovered` repositories.
    #[must_use]
    pub fn new(discovered: usize) -> Self {
        Self {
            repositories_discovered: discovered,
            ..Default::default()
        }
    }

    /// Updates the summary with a repository outcome.
    pub fn record_outcome(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Written { .. } => self.files_written += 1,
            FetchOutcome::Failed { .. } => self.fetches_failed += 1,
        }
    }

    /// Records a task that ended without producing an outcome.
    pub fn record_lost_task(&mut self) {
        self.fetches_failed += 1;
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fetches_failed > 0
    }
}
