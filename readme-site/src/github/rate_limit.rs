//! Classification of GitHub API rejections.
//!
//! The pipeline never waits out or retries a rate limit; it only names the
//! cause so the reported error says why a page or README was refused.

use super::ClientError;

/// Statuses GitHub uses when rejecting over-limit requests.
const RATE_LIMIT_STATUSES: [u16; 2] = [403, 429];

/// Returns true if a rejection with this status and message is a rate limit.
pub(crate) fn is_rate_limited(status: u16, message: &str) -> bool {
    RATE_LIMIT_STATUSES.contains(&status) && message.to_lowercase().contains("rate limit")
}

/// Extracts the HTTP status and message of a GitHub API error response.
fn github_status(error: &octocrab::Error) -> Option<(u16, String)> {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            Some((source.status_code.as_u16(), source.message.clone()))
        }
        _ => None,
    }
}

/// Converts an error from a listing call.
pub(crate) fn classify_listing_error(error: octocrab::Error) -> ClientError {
    match github_status(&error) {
        Some((status, message)) => rejected(status, message),
        None => ClientError::GitHub(error),
    }
}

/// Converts an error from a README call.
pub(crate) fn classify_readme_error(error: octocrab::Error, owner: &str, repo: &str) -> ClientError {
    match github_status(&error) {
        Some((404, _)) => ClientError::ReadmeNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        },
        Some((status, message)) => rejected(status, message),
        None => ClientError::GitHub(error),
    }
}

/// Names an API rejection by its cause.
fn rejected(status: u16, message: String) -> ClientError {
    if is_rate_limited(status, &message) {
        ClientError::RateLimited { message }
    } else {
        ClientError::Status { status, message }
    }
}
