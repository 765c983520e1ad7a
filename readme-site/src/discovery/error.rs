//! Repository discovery error types.

use crate::github::ClientError;
use thiserror::Error;

/// Errors that can occur during repository discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A listing page could not be fetched.
    #[error("Failed to list repositories (page {page}): {source}")]
    Page {
        page: u32,
        #[source]
        source: ClientError,
    },

    /// A response pointed back at a page already listed.
    #[error("Listing page {page} links to page {next_page}, which does not advance")]
    PageOrder { page: u32, next_page: u32 },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded while listing repositories (page {page}): {message}")]
    RateLimitExceeded { page: u32, message: String },
}

impl DiscoveryError {
    /// Wraps a client error raised while fetching `page`.
    pub(crate) fn from_page(page: u32, error: ClientError) -> Self {
        match error {
            ClientError::RateLimited { message } => Self::RateLimitExceeded { page, message },
            source => Self::Page { page, source },
        }
    }

    /// Returns the page that failed.
    #[must_use]
    pub fn page(&self) -> u32 {
        match self {
            Self::Page { page, .. }
            | Self::PageOrder { page, .. }
            | Self::RateLimitExceeded { page, .. } => *page,
        }
    }
}
