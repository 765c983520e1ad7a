//! Access to repositories hosted on GitHub.
//!
//! [`RepositoryClient`] is the seam the pipeline talks through;
//! [`GitHubClient`] implements it over the REST API with `octocrab`.

mod api;
mod auth;
mod client;
mod error;
pub(crate) mod rate_limit;
mod readme;

pub use api::GitHubClient;
pub use auth::{AccessToken, ACCESS_TOKEN_ENV};
pub use client::{ListRequest, RepositoryClient, RepositoryPage, Visibility};
pub use error::{ClientError, DecodeError};
pub use readme::Readme;

use crate::reporter::Reporter;
use tracing::info;
use url::Url;

/// Builds the GitHub client for a run.
///
/// Without a token the client is anonymous and a rate-limit advisory is
/// reported once, before any request is made.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be built.
pub fn build_client(
    token: Option<&AccessToken>,
    api_url: Option<&Url>,
    reporter: &dyn Reporter,
) -> Result<GitHubClient, ClientError> {
    match token {
        Some(_) => info!("Using authenticated GitHub client"),
        None => reporter.warn(
            "config",
            &format!(
                "Access Token Missing. Set {ACCESS_TOKEN_ENV}, else you might be rate limited by GitHub"
            ),
        ),
    }
    GitHubClient::new(token, api_url)
}
