//! Content file error types.

use thiserror::Error;

/// Errors that can occur while producing a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Front matter could not be rendered.
    #[error("Front matter rendering error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// The content file could not be created.
    #[error("Failed to create '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already created content file failed.
    ///
    /// Only surfaced under [`WritePolicy::Strict`](super::WritePolicy::Strict).
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
