//! Fetch task error types.

use crate::content::ContentError;
use crate::github::{ClientError, DecodeError};
use std::time::Duration;
use thiserror::Error;

/// Errors that abort the fetch of a single repository.
///
/// These never propagate beyond the task; they are reported and the
/// remaining repositories carry on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The README could not be retrieved.
    #[error("Failed to fetch README for {repository}: {source}")]
    Readme {
        repository: String,
        #[source]
        source: ClientError,
    },

    /// The README could not be decoded to text.
    #[error("Failed to decode README for {repository}: {source}")]
    Decode {
        repository: String,
        #[source]
        source: DecodeError,
    },

    /// The content file could not be produced.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The task exceeded its configured timeout.
    #[error("Fetching {repository} timed out after {timeout:?}")]
    TimedOut {
        repository: String,
        timeout: Duration,
    },
}
