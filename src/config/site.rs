//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::{PopularAllowlist, Project};

/// Main site configuration
///
/// Loaded once per process and treated as read-only input afterwards. The
/// project list and the popular-post allowlist live here so that they are
/// authored data rather than code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Writing
    /// Moment.js style display format for post dates
    pub date_format: String,
    /// Character budget for automatically derived excerpts
    pub excerpt_length: usize,
    pub highlight_theme: String,

    // Home page
    /// Number of posts shown in the home page preview
    pub preview_size: usize,
    pub hero: BannerConfig,
    pub intro: BannerConfig,
    pub projects_intro: BannerConfig,

    // Curated content
    pub popular_posts: PopularAllowlist,
    pub projects: Vec<Project>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            author: "John Doe".to_string(),
            description: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),
            excerpt_length: 140,
            highlight_theme: "base16-ocean.dark".to_string(),

            preview_size: 3,
            hero: BannerConfig {
                heading: "Hi!".to_string(),
                body: String::new(),
            },
            intro: BannerConfig::default(),
            projects_intro: BannerConfig {
                heading: "Projects".to_string(),
                body: String::new(),
            },

            popular_posts: PopularAllowlist::default(),
            projects: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Heading plus an optional paragraph, used for the hero and section intros
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BannerConfig {
    pub heading: String,
    pub body: String,
}

impl BannerConfig {
    pub fn is_empty(&self) -> bool {
        self.heading.is_empty() && self.body.is_empty()
    }
}
