//! Per-repository outcome types.

use std::path::PathBuf;

/// Result of fetching and writing one repository's README.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The content file was written.
    Written {
        /// Repository name.
        repository: String,
        /// Path of the content file.
        path: PathBuf,
    },

    /// The repository was skipped because a step failed.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl FetchOutcome {
    /// Returns the repository this outcome belongs to.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Written { repository, .. } | Self::Failed { repository, .. } => repository,
        }
    }
}
