//! [`RepositoryClient`] backed by the GitHub REST API.

use super::rate_limit::{classify_listing_error, classify_readme_error};
use super::{AccessToken, ClientError, ListRequest, Readme, RepositoryClient, RepositoryPage};
use crate::discovery::RepositoryRecord;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use url::Url;

/// Query string of the repository listing endpoints.
#[derive(Debug, Serialize)]
struct ListQuery {
    #[serde(rename = "type")]
    visibility: &'static str,
    per_page: u8,
    page: u32,
}

impl From<ListRequest> for ListQuery {
    fn from(request: ListRequest) -> Self {
        Self {
            visibility: request.visibility.as_str(),
            per_page: request.per_page,
            page: request.page,
        }
    }
}

/// GitHub client, authenticated or anonymous.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    authenticated: bool,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Builds a client; `token` selects authenticated mode.
    ///
    /// `api_url` overrides the API root, for GitHub Enterprise. Failed
    /// requests are never resent.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected or the HTTP client
    /// cannot be built.
    pub fn new(token: Option<&AccessToken>, api_url: Option<&Url>) -> Result<Self, ClientError> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        if let Some(url) = api_url {
            builder = builder.base_uri(url.as_str())?;
        }
        if let Some(token) = token {
            builder = builder.personal_token(token.expose().to_string());
        }

        Ok(Self {
            octocrab: builder.build()?,
            authenticated: token.is_some(),
        })
    }

    /// Returns whether requests carry a token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    async fn list(&self, route: String, request: ListRequest) -> Result<RepositoryPage, ClientError> {
        debug!(route = %route, page = request.page, "Listing repositories");
        let page: Page<RepositoryRecord> = self
            .octocrab
            .get(route, Some(&ListQuery::from(request)))
            .await
            .map_err(classify_listing_error)?;

        let next_page = next_page_number(&page);
        Ok(RepositoryPage {
            records: page.items,
            next_page,
        })
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    async fn list_org_repositories(
        &self,
        org: &str,
        request: ListRequest,
    ) -> Result<RepositoryPage, ClientError> {
        self.list(format!("/orgs/{org}/repos"), request).await
    }

    async fn list_user_repositories(
        &self,
        user: &str,
        request: ListRequest,
    ) -> Result<RepositoryPage, ClientError> {
        self.list(format!("/users/{user}/repos"), request).await
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<Readme, ClientError> {
        self.octocrab
            .get(format!("/repos/{owner}/{repo}/readme"), None::<&()>)
            .await
            .map_err(|e| classify_readme_error(e, owner, repo))
    }
}

/// Reads the next page number from the `rel="next"` link, 0 when absent.
fn next_page_number<T>(page: &Page<T>) -> u32 {
    page.next
        .as_ref()
        .and_then(|uri| page_param(&uri.to_string()))
        .unwrap_or(0)
}

/// Extracts the `page` query parameter from a link target.
fn page_param(link: &str) -> Option<u32> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
