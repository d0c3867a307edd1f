//! Post model and the projection from raw content records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ContentError;

/// HTML that was sanitized at authoring time and is emitted without escaping.
///
/// Values come from the markdown renderer, from [`project`], or from the site
/// configuration. Anything reaching a card through this type is written to
/// the page verbatim, so a content source that accepts third-party input must
/// sanitize before constructing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub(crate) fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A post record as it comes out of the content source, before fallbacks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPost {
    pub slug: Option<String>,
    pub title: Option<String>,
    /// Authored summary (HTML)
    pub description: Option<String>,
    /// Derived summary (HTML)
    pub excerpt: Option<String>,
    /// Display date
    pub date: Option<String>,
    /// Machine-sortable form of `date`, when the source could parse it
    pub sort_key: Option<String>,
    pub thumbnail: Option<String>,
    /// Rendered body (HTML)
    pub content: Option<String>,
    /// Where the record came from, for diagnostics
    pub origin: Option<String>,
}

/// A blog post ready for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Route of the post, e.g. `/hello-world/`
    pub slug: String,

    /// Display title, never empty
    pub title: String,

    /// Summary shown on cards
    pub description: TrustedHtml,

    /// Display date
    pub date: String,

    /// Sortable date, preferred over `date` when ordering
    pub sort_key: Option<String>,

    /// Thumbnail URL
    pub thumbnail: Option<String>,

    /// Rendered body
    pub content: TrustedHtml,
}

impl Post {
    /// Key used by [`sort_by_date_descending`](super::sort_by_date_descending)
    pub fn sort_key(&self) -> &str {
        self.sort_key.as_deref().unwrap_or(&self.date)
    }
}

/// Turn a raw record into a [`Post`].
///
/// `title` falls back to the slug and `description` to the excerpt, then to
/// the empty string. Blank strings count as missing. The only failure is a
/// record with no usable slug.
pub fn project(raw: &RawPost) -> Result<Post, ContentError> {
    let slug = present(&raw.slug).ok_or_else(|| ContentError::MissingSlug {
        origin: raw
            .origin
            .clone()
            .unwrap_or_else(|| "<unknown>".to_string()),
    })?;

    let title = present(&raw.title).unwrap_or(slug);
    let description = present(&raw.description)
        .or_else(|| present(&raw.excerpt))
        .unwrap_or_default();

    Ok(Post {
        slug: slug.to_string(),
        title: title.to_string(),
        description: TrustedHtml::new(description),
        date: raw.date.clone().unwrap_or_default(),
        sort_key: present(&raw.sort_key).map(str::to_string),
        thumbnail: present(&raw.thumbnail).map(str::to_string),
        content: TrustedHtml::new(raw.content.clone().unwrap_or_default()),
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}
