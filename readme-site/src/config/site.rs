//! Site configuration deserialization.

use super::{ConfigError, FetchTarget};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Default location of written content files.
pub const DEFAULT_OUTPUT_DIR: &str = "./content/readmes";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".readme-site.toml";

/// Parsed contents of the site configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Organization name or user login.
    #[serde(default)]
    pub site: String,

    /// Treat `site` as a user login rather than an organization.
    #[serde(default)]
    pub is_user: bool,

    /// GitHub API base URL, for GitHub Enterprise.
    #[serde(default)]
    pub api_url: Option<Url>,

    /// Directory content files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Upper bound on concurrently running fetch tasks. Unset means unbounded.
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// Per-task timeout in seconds. Unset means tasks may run indefinitely.
    #[serde(default)]
    pub task_timeout_secs: Option<u64>,

    /// Report content write failures instead of tolerating them.
    #[serde(default)]
    pub strict_writes: bool,
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: String::new(),
            is_user: false,
            api_url: None,
            output_dir: default_output_dir(),
            concurrency: None,
            task_timeout_secs: None,
            strict_writes: false,
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, or an
    /// I/O or parse error if it cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses configuration from TOML text; `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlError`] for malformed content.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSite`] for an empty site and
    /// [`ConfigError::ValidationError`] for a zero concurrency cap or timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.trim().is_empty() {
            return Err(ConfigError::MissingSite);
        }

        if self.concurrency == Some(0) {
            return Err(ConfigError::ValidationError {
                field: "concurrency".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.task_timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError {
                field: "task-timeout-secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the fetch target described by this configuration.
    #[must_use]
    pub fn target(&self) -> FetchTarget {
        if self.is_user {
            FetchTarget::user(self.site.trim())
        } else {
            FetchTarget::organization(self.site.trim())
        }
    }
}
