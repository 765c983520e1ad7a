//! Runner error types.

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Client(#[from] crate::github::ClientError),

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Repository discovery failed.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),
}
