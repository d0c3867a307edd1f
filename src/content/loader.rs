//! Content loader - reads raw post records from the source directory

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

use super::{project, FrontMatter, MarkdownRenderer, Post, RawPost};
use crate::error::ContentError;
use crate::helpers::{encode_path, format_date, is_external, sortable_date};
use crate::page::BLOG_ROUTE;
use crate::Folio;

/// Directory under the source dir holding posts
pub const POSTS_DIR: &str = "_posts";

/// Routes written by the generator itself
const RESERVED_ROUTES: [&str; 2] = ["/", BLOG_ROUTE];

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        let renderer = MarkdownRenderer::with_theme(&folio.config.highlight_theme);
        Self { folio, renderer }
    }

    /// Load and normalize every published post.
    ///
    /// Fails on the first post without a slug, on a post routed to the home
    /// page or the blog index, or when two posts share one.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let raw_posts = self.load_raw_posts()?;
        let mut posts = Vec::with_capacity(raw_posts.len());
        let mut seen: HashMap<String, String> = HashMap::new();

        for raw in &raw_posts {
            let post = project(raw)?;
            let origin = raw.origin.clone().unwrap_or_default();
            if RESERVED_ROUTES.contains(&post.slug.as_str()) {
                return Err(ContentError::ReservedSlug {
                    slug: post.slug,
                    origin,
                }
                .into());
            }
            if let Some(first) = seen.insert(post.slug.clone(), origin.clone()) {
                return Err(ContentError::DuplicateSlug {
                    slug: post.slug,
                    first,
                    second: origin,
                }
                .into());
            }
            posts.push(post);
        }

        Ok(posts)
    }

    /// Load raw records from source/_posts, in path order
    pub fn load_raw_posts(&self) -> Result<Vec<RawPost>> {
        let posts_dir = self.folio.source_dir.join(POSTS_DIR);
        if !posts_dir.exists() {
            tracing::warn!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !(path.is_file() && is_markdown_file(path)) {
                continue;
            }

            let relative = path.strip_prefix(&posts_dir).unwrap_or(path);
            match self.load_raw_post(path, relative) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", relative),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        Ok(posts)
    }

    /// Load a single raw record; `None` for unpublished posts
    fn load_raw_post(&self, path: &Path, relative: &Path) -> Result<Option<RawPost>> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if !fm.published {
            return Ok(None);
        }

        let slug = match fm.slug.as_deref() {
            Some(explicit) => Some(normalize_slug(explicit)),
            None => derive_slug(relative),
        };

        let (date, sort_key) = match (fm.parse_date(), fm.date.as_ref()) {
            (Some(parsed), _) => (
                Some(format_date(&parsed, &self.folio.config.date_format)),
                Some(sortable_date(&parsed)),
            ),
            (None, Some(unparsed)) => {
                tracing::debug!("Keeping unparsed date {:?} for {:?}", unparsed, relative);
                (Some(unparsed.clone()), None)
            }
            (None, None) => (None, None),
        };

        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body);
        let content_html = self.renderer.render(&full_md)?;
        let excerpt = match fm.excerpt.as_deref().or(excerpt_md.as_deref()) {
            Some(md) => Some(self.renderer.render(md)?),
            None => MarkdownRenderer::prune_excerpt(&content_html, self.folio.config.excerpt_length),
        };

        let thumbnail = fm
            .thumbnail
            .as_deref()
            .map(|t| resolve_thumbnail(slug.as_deref().unwrap_or("/"), t));

        Ok(Some(RawPost {
            slug,
            title: fm.title,
            description: fm.description,
            excerpt,
            date,
            sort_key,
            thumbnail,
            content: Some(content_html),
            origin: Some(relative.to_string_lossy().to_string()),
        }))
    }
}

/// Route for a post file relative to `_posts`.
///
/// `hello.md` and `hello/index.md` both become `/hello/`. A bare
/// `index.md` at the top has no route.
pub fn derive_slug(relative: &Path) -> Option<String> {
    let without_ext = relative.with_extension("");
    let mut parts: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.last().map(String::as_str) == Some("index") {
        parts.pop();
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("/{}/", parts.join("/")))
    }
}

/// Wrap an authored slug in slashes; blank input stays blank.
///
/// `.` and `..` segments are dropped so the route stays inside the output
/// directory.
fn normalize_slug(slug: &str) -> String {
    let parts: Vec<&str> = slug
        .trim()
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Resolve a thumbnail relative to its post's route
fn resolve_thumbnail(slug: &str, thumbnail: &str) -> String {
    if is_external(thumbnail) {
        return thumbnail.to_string();
    }
    if thumbnail.starts_with('/') {
        return encode_path(thumbnail);
    }
    let relative = thumbnail.trim_start_matches("./");
    encode_path(&format!("{}/{}", slug.trim_end_matches('/'), relative))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
