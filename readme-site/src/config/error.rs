//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Missing configuration file.
    #[error("configuration not found! make sure you have a {path} file in the project dir.")]
    MissingFile { path: String },

    /// No organization or user was configured.
    #[error("no site configured; set `site` in the configuration file or pass --site")]
    MissingSite,

    /// A value was present but unusable.
    #[error("Invalid configuration value for `{field}`: {message}")]
    ValidationError { field: String, message: String },
}
