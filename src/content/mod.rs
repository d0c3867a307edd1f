//! Content module - authored records and the pipeline that normalizes them

mod frontmatter;
pub mod list;
pub mod loader;
mod markdown;
mod post;
mod project;

pub use frontmatter::FrontMatter;
pub use list::{filter_by_allowlist, sort_by_date_descending, take_prefix, PopularAllowlist};
pub use markdown::MarkdownRenderer;
pub use post::{project, Post, RawPost, TrustedHtml};
pub use project::{Project, ProjectLayout};
