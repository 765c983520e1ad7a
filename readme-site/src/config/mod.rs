//! Site configuration loading.
//!
//! The configuration names the organization (or user) to build the site for
//! and tunes how the fetch pipeline runs. A typical file:
//!
//! ```toml
//! site = "acme"
//! is-user = false
//! concurrency = 8
//! ```

mod error;
mod site;
mod target;

pub use error::ConfigError;
pub use site::{SiteConfig, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR};
pub use target::{FetchTarget, OwnerKind};

use std::path::Path;
use tracing::{debug, info};

/// Loads the configuration file if it exists, otherwise returns defaults.
///
/// Defaults still fail [`SiteConfig::validate`] until a site is supplied,
/// so callers can layer command-line overrides on top before validating.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_or_default(path: &Path) -> Result<SiteConfig, ConfigError> {
    match SiteConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded configuration");
            Ok(config)
        }
        Err(ConfigError::MissingFile { .. }) => {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(SiteConfig::default())
        }
        Err(e) => Err(e),
    }
}
