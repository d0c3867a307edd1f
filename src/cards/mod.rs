//! Card view models for posts and projects
//!
//! A card is the compact summary of one [`Post`] or [`Project`]. Both share
//! the [`Renderable`] capability; [`render_card`] dispatches on the
//! [`CardSource`] tag and never inspects optional fields to guess a variant.
//!
//! Descriptions are [`TrustedHtml`] and are written out unescaped. Titles,
//! URLs and every other field are escaped.

mod blog;
mod project;

use serde::Serialize;

pub use blog::BlogCard;
pub use project::{ProjectCard, ProjectCardLayout, TextAlign};

use crate::config::SiteConfig;
use crate::content::{Post, Project, TrustedHtml};

/// Fields every card can show
pub trait Renderable {
    fn title(&self) -> &str;
    fn description(&self) -> &TrustedHtml;
    /// Target of the card's main link
    fn link_target(&self) -> &str;
}

impl Renderable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &TrustedHtml {
        &self.description
    }

    fn link_target(&self) -> &str {
        &self.slug
    }
}

impl Renderable for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &TrustedHtml {
        &self.description
    }

    fn link_target(&self) -> &str {
        &self.link
    }
}

/// Something a card can be rendered from
#[derive(Debug, Clone, Copy)]
pub enum CardSource<'a> {
    Blog(&'a Post),
    Project(&'a Project),
}

impl Renderable for CardSource<'_> {
    fn title(&self) -> &str {
        match self {
            CardSource::Blog(post) => post.title(),
            CardSource::Project(project) => project.title(),
        }
    }

    fn description(&self) -> &TrustedHtml {
        match self {
            CardSource::Blog(post) => post.description(),
            CardSource::Project(project) => project.description(),
        }
    }

    fn link_target(&self) -> &str {
        match self {
            CardSource::Blog(post) => post.link_target(),
            CardSource::Project(project) => project.link_target(),
        }
    }
}

/// A rendered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardView {
    Blog(BlogCard),
    Project(ProjectCard),
}

impl CardView {
    pub fn title(&self) -> &str {
        match self {
            CardView::Blog(card) => &card.title,
            CardView::Project(card) => &card.title,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            CardView::Blog(card) => card.to_html(),
            CardView::Project(card) => card.to_html(),
        }
    }
}

/// Build the card for one source
pub fn render_card(config: &SiteConfig, source: CardSource<'_>) -> CardView {
    match source {
        CardSource::Blog(post) => CardView::Blog(BlogCard::new(config, post)),
        CardSource::Project(project) => CardView::Project(ProjectCard::new(config, project)),
    }
}

/// Cards for a list of posts, in order
pub fn blog_cards(config: &SiteConfig, posts: &[Post]) -> Vec<CardView> {
    posts
        .iter()
        .map(|p| render_card(config, CardSource::Blog(p)))
        .collect()
}

/// Cards for a list of projects, in order
pub fn project_cards(config: &SiteConfig, projects: &[Project]) -> Vec<CardView> {
    projects
        .iter()
        .map(|p| render_card(config, CardSource::Project(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{project as project_post, ProjectLayout, RawPost};

    fn post() -> Post {
        project_post(&RawPost {
            slug: Some("/foo/".to_string()),
            excerpt: Some("<p>Hi</p>".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn portfolio_entry() -> Project {
        Project {
            title: "Nitor Fitness".to_string(),
            description: TrustedHtml::new("Track <b>lifts</b>"),
            link: "https://nitorfitness.com".to_string(),
            logo: "/images/nitor.png".to_string(),
            tech: vec!["Clojure".to_string()],
            layout: ProjectLayout::Default,
        }
    }

    #[test]
    fn test_shared_capability() {
        let post = post();
        let project = portfolio_entry();

        let blog = CardSource::Blog(&post);
        assert_eq!(blog.title(), "/foo/");
        assert_eq!(blog.link_target(), "/foo/");
        assert_eq!(blog.description().as_str(), "<p>Hi</p>");

        let proj = CardSource::Project(&project);
        assert_eq!(proj.title(), "Nitor Fitness");
        assert_eq!(proj.link_target(), "https://nitorfitness.com");
    }

    #[test]
    fn test_render_dispatches_on_tag() {
        let config = SiteConfig::default();
        let post = post();
        let project = portfolio_entry();

        assert!(matches!(
            render_card(&config, CardSource::Blog(&post)),
            CardView::Blog(_)
        ));
        assert!(matches!(
            render_card(&config, CardSource::Project(&project)),
            CardView::Project(_)
        ));
    }

    #[test]
    fn test_excerpt_description_renders_unescaped() {
        let config = SiteConfig::default();
        let html = render_card(&config, CardSource::Blog(&post())).to_html();
        assert!(html.contains("<p>Hi</p>"));
        assert!(!html.contains("&lt;p&gt;"));
    }

    #[test]
    fn test_cards_preserve_order() {
        let config = SiteConfig::default();
        let mut second = portfolio_entry();
        second.title = "Mellow Golem Games".to_string();
        let cards = project_cards(&config, &[portfolio_entry(), second]);
        let titles: Vec<_> = cards.iter().map(CardView::title).collect();
        assert_eq!(titles, vec!["Nitor Fitness", "Mellow Golem Games"]);
    }

    #[test]
    fn test_card_view_serializes_with_kind() {
        let config = SiteConfig::default();
        let card = render_card(&config, CardSource::Blog(&post()));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["kind"], "blog");
        assert_eq!(json["href"], "/foo/");
    }
}
