//! Runner configuration.

use crate::config::{ConfigError, FetchTarget, SiteConfig};
use crate::content::WritePolicy;
use crate::dispatch::DispatchOptions;
use crate::github::AccessToken;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Configuration for one site build.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Organization or user whose repositories are fetched.
    target: FetchTarget,
    /// Directory content files are written to.
    output_dir: PathBuf,
    /// GitHub API base URL override.
    api_url: Option<Url>,
    /// Access token; anonymous when absent.
    token: Option<AccessToken>,
    /// Fan-out limits.
    dispatch: DispatchOptions,
    /// Treatment of content write failures.
    write_policy: WritePolicy,
}

impl RunnerConfig {
    /// Creates a configuration with default limits and the default output directory.
    pub fn new(target: FetchTarget, token: Option<AccessToken>) -> Self {
        Self {
            target,
            output_dir: PathBuf::from(crate::config::DEFAULT_OUTPUT_DIR),
            api_url: None,
            token,
            dispatch: DispatchOptions::default(),
            write_policy: WritePolicy::default(),
        }
    }

    /// Builds a runner configuration from a validated site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the site configuration is invalid.
    pub fn from_site(site: &SiteConfig, token: Option<AccessToken>) -> Result<Self, ConfigError> {
        site.validate()?;

        let mut dispatch = DispatchOptions::default();
        if let Some(concurrency) = site.concurrency.and_then(NonZeroUsize::new) {
            dispatch = dispatch.with_concurrency(concurrency);
        }
        if let Some(secs) = site.task_timeout_secs {
            dispatch = dispatch.with_task_timeout(Duration::from_secs(secs));
        }

        let write_policy = if site.strict_writes {
            WritePolicy::Strict
        } else {
            WritePolicy::Lenient
        };

        Ok(Self {
            target: site.target(),
            output_dir: site.output_dir.clone(),
            api_url: site.api_url.clone(),
            token,
            dispatch,
            write_policy,
        })
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the fan-out limits.
    pub fn with_dispatch_options(mut self, dispatch: DispatchOptions) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Sets the write failure policy.
    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    /// Returns the fetch target.
    pub fn target(&self) -> &FetchTarget {
        &self.target
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the API base URL override.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }

    /// Returns the access token.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Returns the fan-out limits.
    pub fn dispatch_options(&self) -> DispatchOptions {
        self.dispatch
    }

    /// Returns the write failure policy.
    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }
}
