//! Concurrent README fetching.
//!
//! The dispatcher spawns one task per discovered repository and waits for
//! all of them. Each task fetches the README, decodes it and writes the
//! content file; a failure in any step is reported and ends only that task.

mod error;
mod options;

pub use error::FetchError;
pub use options::DispatchOptions;

use crate::content::ContentWriter;
use crate::discovery::RepositoryRecord;
use crate::github::RepositoryClient;
use crate::reporter::Reporter;
use crate::summary::{FetchOutcome, RunSummary};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info_span, Instrument};

/// Fans README fetches out over the runtime.
pub struct FetchDispatcher {
    client: Arc<dyn RepositoryClient>,
    reporter: Arc<dyn Reporter>,
    writer: Arc<ContentWriter>,
    options: DispatchOptions,
}

impl FetchDispatcher {
    /// Creates a dispatcher sharing `client` across all tasks.
    pub fn new(
        client: Arc<dyn RepositoryClient>,
        reporter: Arc<dyn Reporter>,
        writer: ContentWriter,
        options: DispatchOptions,
    ) -> Self {
        Self {
            client,
            reporter,
            writer: Arc::new(writer),
            options,
        }
    }

    /// Fetches and writes the README of every repository owned by `owner`.
    ///
    /// Returns once every task has finished. Individual failures are
    /// reported, counted in the summary and otherwise swallowed. The final
    /// status line reports the number of repositories discovered, not the
    /// number of files written.
    pub async fn dispatch(&self, owner: &str, repositories: &[RepositoryRecord]) -> RunSummary {
        let owner: Arc<str> = Arc::from(owner);
        let limiter = self
            .options
            .concurrency
            .map(|n| Arc::new(Semaphore::new(n.get())));
        let mut tasks = JoinSet::new();

        for repository in repositories {
            self.reporter.info(
                "sill",
                &format!("Fetching readme for repo {}", repository.name),
            );

            let task = FetchTask {
                client: Arc::clone(&self.client),
                reporter: Arc::clone(&self.reporter),
                writer: Arc::clone(&self.writer),
                owner: Arc::clone(&owner),
                repository: repository.name.clone(),
            };
            let limiter = limiter.clone();
            let timeout = self.options.task_timeout;
            let span = info_span!("fetch", repo = %repository.name);

            tasks.spawn(
                async move {
                    // Held until the task finishes; a closed semaphore never happens here.
                    let _permit = match limiter {
                        Some(limiter) => limiter.acquire_owned().await.ok(),
                        None => None,
                    };
                    task.run(timeout).await
                }
                .instrument(span),
            );
        }

        let mut summary = RunSummary::new(repositories.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => {
                    debug!(repo = outcome.repository(), "Fetch task finished");
                    summary.record_outcome(&outcome);
                }
                Err(e) => {
                    self.reporter
                        .error("enoent", &format!("fetch task ended abnormally: {e}"));
                    summary.record_lost_task();
                }
            }
        }

        self.reporter
            .info("sill", &format!("Fetched {} repos", repositories.len()));
        summary
    }
}

/// Everything one task needs; owned so it can move onto the runtime.
struct FetchTask {
    client: Arc<dyn RepositoryClient>,
    reporter: Arc<dyn Reporter>,
    writer: Arc<ContentWriter>,
    owner: Arc<str>,
    repository: String,
}

impl FetchTask {
    async fn run(self, timeout: Option<Duration>) -> FetchOutcome {
        let result = match timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetch_and_write())
                .await
                .unwrap_or_else(|_| {
                    Err(FetchError::TimedOut {
                        repository: self.repository.clone(),
                        timeout: limit,
                    })
                }),
            None => self.fetch_and_write().await,
        };

        match result {
            Ok(path) => {
                debug!(path = %path.display(), "Wrote content file");
                FetchOutcome::Written {
                    repository: self.repository,
                    path,
                }
            }
            Err(e) => {
                self.reporter.error("enoent", &e.to_string());
                FetchOutcome::Failed {
                    repository: self.repository,
                    error: e.to_string(),
                }
            }
        }
    }

    async fn fetch_and_write(&self) -> Result<PathBuf, FetchError> {
        let readme = self
            .client
            .get_readme(&self.owner, &self.repository)
            .await
            .map_err(|source| FetchError::Readme {
                repository: self.repository.clone(),
                source,
            })?;

        let body = readme.decode().map_err(|source| FetchError::Decode {
            repository: self.repository.clone(),
            source,
        })?;

        Ok(self.writer.write(&self.repository, &body).await?)
    }
}
