//! Front matter rendering.

use super::ContentError;
use chrono::{DateTime, Utc};
use handlebars::{no_escape, Handlebars};
use serde_json::json;

/// Timestamp format of the `date` field: ISO-8601 with a numeric offset.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Front matter block preceding each README body.
const FRONT_MATTER_TEMPLATE: &str = "---\ntitle: {{title}}\ndate: {{date}}\ndraft: false\n---\n";

/// Creates the Handlebars registry used for front matter.
///
/// Escaping is disabled so repository names are written as-is, and strict
/// mode turns a missing field into an error instead of an empty string.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders content documents for the static-site generator.
pub struct FrontMatterRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for FrontMatterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontMatterRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the front matter block for a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_front_matter(
        &self,
        title: &str,
        date: DateTime<Utc>,
    ) -> Result<String, ContentError> {
        let data = json!({
            "title": title,
            "date": date.format(DATE_FORMAT).to_string(),
        });
        Ok(self.handlebars.render_template(FRONT_MATTER_TEMPLATE, &data)?)
    }

    /// Renders the complete document: front matter followed by `body` verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_document(
        &self,
        title: &str,
        body: &str,
        date: DateTime<Utc>,
    ) -> Result<String, ContentError> {
        let mut document = self.render_front_matter(title, date)?;
        document.push_str(body);
        Ok(document)
    }
}
