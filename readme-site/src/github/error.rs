//! Remote client error types.

use thiserror::Error;

/// Errors returned by a [`RepositoryClient`](super::RepositoryClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed before GitHub produced an API response.
    #[error("GitHub request failed: {}", describe(.0))]
    GitHub(#[from] octocrab::Error),

    /// GitHub answered with an error status.
    #[error("GitHub API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The API rejected the request because the rate limit is exhausted.
    #[error("Rate limit exceeded: {message}")]
    RateLimited { message: String },

    /// The repository has no README.
    #[error("No README found for {owner}/{repo}")]
    ReadmeNotFound { owner: String, repo: String },

    /// The remote could not serve the request.
    #[error("Remote unavailable: {message}")]
    Unavailable { message: String },
}

/// Renders an octocrab error with its whole source chain; its own
/// `Display` only names the variant.
fn describe(error: &octocrab::Error) -> String {
    let mut text = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    text
}

/// Errors that can occur while decoding README content.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The API returned an encoding we do not understand.
    #[error("unsupported content encoding: {0}")]
    UnsupportedEncoding(String),

    /// Malformed base64 payload.
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 text.
    #[error("README is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
