//! Access token resolution.

use std::fmt;

/// Environment variable holding the GitHub access token.
pub const ACCESS_TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";

/// A non-empty GitHub access token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Normalizes a possibly-missing token; blank values count as absent.
    #[must_use]
    pub fn resolve(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    /// Reads the token from [`ACCESS_TOKEN_ENV`].
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::resolve(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
