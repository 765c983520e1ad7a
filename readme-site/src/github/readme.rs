//! README payloads as returned by the contents API.

use super::DecodeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

/// README representation before decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Readme {
    /// Encoded file content.
    #[serde(default)]
    pub content: String,

    /// Content encoding, `base64` for files served by the contents API.
    #[serde(default)]
    pub encoding: String,
}

impl Readme {
    /// Decodes the README body to text.
    ///
    /// Base64 payloads have their line breaks stripped before decoding; an
    /// empty encoding means the content is already text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for unknown encodings, malformed base64 or
    /// non-UTF-8 content.
    pub fn decode(&self) -> Result<String, DecodeError> {
        match self.encoding.as_str() {
            "base64" => {
                let compact: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD.decode(compact)?;
                Ok(String::from_utf8(bytes)?)
            }
            "" => Ok(self.content.clone()),
            other => Err(DecodeError::UnsupportedEncoding(other.to_string())),
        }
    }
}
