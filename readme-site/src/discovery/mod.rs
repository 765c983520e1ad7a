//! Repository discovery by exhaustive paginated listing.
//!
//! Discovery walks every page of the target's public repositories and
//! returns them as one collection in API order. Any failing page aborts
//! discovery; a partial collection is never returned.

mod error;
mod repository;

pub use error::DiscoveryError;
pub use repository::RepositoryRecord;

use crate::config::{FetchTarget, OwnerKind};
use crate::github::{ClientError, ListRequest, RepositoryClient, RepositoryPage, Visibility};
use tracing::{debug, info, info_span, Instrument};

/// Records requested per listing page.
pub const PAGE_SIZE: u8 = 50;

/// Discovers every public repository of `target`.
///
/// Pages are requested from page 1 onwards, following the next-page number
/// of each response until it is 0. User targets are listed through the user
/// endpoint, organizations through the organization endpoint.
///
/// # Errors
///
/// Returns [`DiscoveryError`] as soon as any page fails, or when a page
/// names a next page that is not after it.
pub async fn discover_repositories(
    client: &dyn RepositoryClient,
    target: &FetchTarget,
) -> Result<Vec<RepositoryRecord>, DiscoveryError> {
    let span = info_span!("discover", owner = %target.owner, user = target.is_user());

    async {
        info!("Starting repository discovery");

        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let request = ListRequest {
                page,
                per_page: PAGE_SIZE,
                visibility: Visibility::Public,
            };
            let response = list_page(client, target, request)
                .await
                .map_err(|e| DiscoveryError::from_page(page, e))?;

            debug!(
                page,
                count = response.records.len(),
                next_page = response.next_page,
                "Fetched repository page"
            );
            repositories.extend(response.records);

            if response.next_page == 0 {
                break;
            }
            if response.next_page <= page {
                return Err(DiscoveryError::PageOrder {
                    page,
                    next_page: response.next_page,
                });
            }
            page = response.next_page;
        }

        info!(count = repositories.len(), "Discovery complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Requests one page through the endpoint matching the target's kind.
async fn list_page(
    client: &dyn RepositoryClient,
    target: &FetchTarget,
    request: ListRequest,
) -> Result<RepositoryPage, ClientError> {
    match target.kind {
        OwnerKind::User => client.list_user_repositories(&target.owner, request).await,
        OwnerKind::Organization => client.list_org_repositories(&target.owner, request).await,
    }
}
