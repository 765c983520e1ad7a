//! Content files for the static-site generator.
//!
//! Every successfully fetched README becomes `<output-dir>/<repo>.md`: a
//! front matter block followed by the README body, byte for byte.

mod error;
mod front_matter;

pub use error::ContentError;
pub use front_matter::{create_handlebars_registry, FrontMatterRenderer, DATE_FORMAT};

use crate::clock::Clock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// How failures after a content file was created are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Write failures are logged at debug level and otherwise ignored.
    #[default]
    Lenient,
    /// Write failures fail the repository with [`ContentError::Write`].
    Strict,
}

/// Returns the content file path for a repository.
#[must_use]
pub fn content_path(output_dir: &Path, repository: &str) -> PathBuf {
    output_dir.join(format!("{repository}.md"))
}

/// Writes content files into one output directory.
pub struct ContentWriter {
    output_dir: PathBuf,
    renderer: FrontMatterRenderer,
    clock: Arc<dyn Clock>,
    policy: WritePolicy,
}

impl ContentWriter {
    /// Creates a writer for `output_dir`, stamping files with `clock`.
    pub fn new(output_dir: impl Into<PathBuf>, clock: Arc<dyn Clock>, policy: WritePolicy) -> Self {
        Self {
            output_dir: output_dir.into(),
            renderer: FrontMatterRenderer::new(),
            clock,
            policy,
        }
    }

    /// Writes the content file for `repository` and returns its path.
    ///
    /// The file is created (or truncated) only after the document has been
    /// rendered, so a rendering failure leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Create`] if the file cannot be created, and
    /// [`ContentError::Write`] for write failures under [`WritePolicy::Strict`].
    pub async fn write(&self, repository: &str, body: &str) -> Result<PathBuf, ContentError> {
        let document = self
            .renderer
            .render_document(repository, body, self.clock.now())?;
        let path = content_path(&self.output_dir, repository);

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| ContentError::Create {
                path: path.display().to_string(),
                source: e,
            })?;

        let mut written = file.write_all(document.as_bytes()).await;
        if written.is_ok() {
            written = file.flush().await;
        }

        if let Err(e) = written {
            match self.policy {
                WritePolicy::Lenient => {
                    debug!(path = %path.display(), error = %e, "Ignoring content write failure");
                }
                WritePolicy::Strict => {
                    return Err(ContentError::Write {
                        path: path.display().to_string(),
                        source: e,
                    });
                }
            }
        }

        Ok(path)
    }
}
