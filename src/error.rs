//! Domain errors raised while turning authored content into pages

use thiserror::Error;

/// Errors that abort a build
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// A post record carried no slug, so it has no route to link to
    #[error("post {origin} has no slug and cannot be routed")]
    MissingSlug { origin: String },

    /// Two posts resolved to the same route
    #[error("slug {slug} is used by both {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// A post claimed a route the site already uses for its own pages
    #[error("post {origin} uses the reserved route {slug}")]
    ReservedSlug { slug: String, origin: String },
}
