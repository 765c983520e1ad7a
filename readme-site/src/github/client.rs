//! The remote repository capability consumed by the pipeline.

use super::{ClientError, Readme};
use crate::discovery::RepositoryRecord;
use async_trait::async_trait;

/// Repository visibility filter for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Publicly visible repositories only.
    #[default]
    Public,
}

impl Visibility {
    /// Returns the API's name for this filter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
        }
    }
}

/// Parameters of one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub per_page: u8,
    /// Visibility filter.
    pub visibility: Visibility,
}

/// One page of a repository listing.
#[derive(Debug, Clone, Default)]
pub struct RepositoryPage {
    /// Records on this page, in API order.
    pub records: Vec<RepositoryRecord>,
    /// Number of the next page, or 0 when this was the last one.
    pub next_page: u32,
}

/// Hosted git-forge operations used to discover repositories and fetch READMEs.
///
/// Implementations are shared across concurrently running fetch tasks and
/// must be safe to call from several tasks at once.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Lists one page of an organization's repositories.
    async fn list_org_repositories(
        &self,
        org: &str,
        request: ListRequest,
    ) -> Result<RepositoryPage, ClientError>;

    /// Lists one page of a user's repositories.
    async fn list_user_repositories(
        &self,
        user: &str,
        request: ListRequest,
    ) -> Result<RepositoryPage, ClientError>;

    /// Fetches the README of `owner/repo`.
    async fn get_readme(&self, owner: &str, repo: &str) -> Result<Readme, ClientError>;
}
