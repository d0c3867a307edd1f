//! Blog post card

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{Post, TrustedHtml};
use crate::helpers::{html_escape, is_external, url_for};

/// Summary card for a blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogCard {
    pub title: String,
    /// Root-prefixed link to the post
    pub href: String,
    pub thumbnail: Option<String>,
    pub description: TrustedHtml,
    pub date: String,
}

impl BlogCard {
    pub fn new(config: &SiteConfig, post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            href: url_for(config, &post.slug),
            thumbnail: post.thumbnail.as_deref().map(|t| {
                if is_external(t) {
                    t.to_string()
                } else {
                    url_for(config, t)
                }
            }),
            description: post.description.clone(),
            date: post.date.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(
            r#"<li class="blog-card"><article itemscope itemtype="http://schema.org/Article">"#,
        );

        html.push_str(&format!(
            r#"<header><h2><a href="{}" itemprop="url"><span itemprop="headline">{}</span></a></h2>"#,
            html_escape(&self.href),
            html_escape(&self.title)
        ));
        if !self.date.is_empty() {
            html.push_str(&format!("<small>{}</small>", html_escape(&self.date)));
        }
        html.push_str("</header>");

        if let Some(thumbnail) = &self.thumbnail {
            html.push_str(&format!(
                r#"<a href="{}"><img class="thumbnail" src="{}" alt="{}"></a>"#,
                html_escape(&self.href),
                html_escape(thumbnail),
                html_escape(&self.title)
            ));
        }

        // Trusted: authored or rendered from the post's own markdown
        html.push_str(&format!(
            r#"<section><div itemprop="description">{}</div></section>"#,
            self.description
        ));

        html.push_str("</article></li>");
        html
    }
}
