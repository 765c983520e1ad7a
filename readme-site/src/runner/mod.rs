//! Orchestrates a site build.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::clock::{Clock, SystemClock};
use crate::content::ContentWriter;
use crate::discovery::discover_repositories;
use crate::dispatch::FetchDispatcher;
use crate::github::{build_client, RepositoryClient};
use crate::reporter::Reporter;
use crate::summary::RunSummary;
use std::sync::Arc;
use tracing::info;

/// Runs discovery followed by the README fan-out.
///
/// Fatal errors are reported through the reporter before being returned;
/// per-repository failures are reported by their tasks and only show up in
/// the summary.
pub struct Runner {
    config: RunnerConfig,
    client: Arc<dyn RepositoryClient>,
    reporter: Arc<dyn Reporter>,
    clock: Arc<dyn Clock>,
}

impl Runner {
    /// Builds a runner with a GitHub client.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Client`] if the client cannot be built.
    pub fn new(config: RunnerConfig, reporter: Arc<dyn Reporter>) -> Result<Self, RunnerError> {
        reporter.info(
            "sill",
            &format!("fetching repos for '{}'", config.target().owner),
        );

        let client = match build_client(config.token(), config.api_url(), reporter.as_ref()) {
            Ok(client) => client,
            Err(e) => {
                reporter.error("config", &e.to_string());
                return Err(e.into());
            }
        };

        Ok(Self::with_client(config, Arc::new(client), reporter))
    }

    /// Builds a runner around an existing client.
    pub fn with_client(
        config: RunnerConfig,
        client: Arc<dyn RepositoryClient>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            config,
            client,
            reporter,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to stamp content files.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Executes the full build.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the output directory cannot be created or
    /// discovery fails. No README is fetched in either case.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let output_dir = self.config.output_dir();
        if let Err(e) = tokio::fs::create_dir_all(output_dir).await {
            let error = RunnerError::OutputDir {
                path: output_dir.display().to_string(),
                source: e,
            };
            self.reporter.error("enoent", &error.to_string());
            return Err(error);
        }

        let target = self.config.target();
        let repositories = match discover_repositories(self.client.as_ref(), target).await {
            Ok(repositories) => repositories,
            Err(e) => {
                self.reporter.error("enoent", &e.to_string());
                return Err(e.into());
            }
        };
        info!(count = repositories.len(), "Found repositories");

        let writer = ContentWriter::new(
            output_dir,
            Arc::clone(&self.clock),
            self.config.write_policy(),
        );
        let dispatcher = FetchDispatcher::new(
            Arc::clone(&self.client),
            Arc::clone(&self.reporter),
            writer,
            self.config.dispatch_options(),
        );

        Ok(dispatcher.dispatch(&target.owner, &repositories).await)
    }
}
