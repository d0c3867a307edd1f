//! Page composition
//!
//! Pages are assembled from already selected content: the caller sorts and
//! slices posts, this module only arranges them. The footer year is read from
//! an injected [`Clock`] so the output of a build is reproducible in tests.

mod html;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

pub use html::render_page;

use crate::cards::{blog_cards, project_cards, CardView};
use crate::config::{BannerConfig, SiteConfig};
use crate::content::{Post, Project, TrustedHtml};
use crate::helpers::{is_external, url_for};

/// Route of the blog index
pub const BLOG_ROUTE: &str = "/blog/";

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    BlogIndex,
    Post,
}

impl PageKind {
    /// Only the home page draws its header over the hero
    pub fn filled_header(self) -> bool {
        !matches!(self, PageKind::Home)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub heading: String,
    pub body: String,
}

impl From<&BannerConfig> for Banner {
    fn from(config: &BannerConfig) -> Self {
        Self {
            heading: config.heading.clone(),
            body: config.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    /// Grid of blog cards
    List,
    /// Stacked project cards
    Showcase,
}

/// Link to the full list behind a truncated preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewAll {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSection {
    pub heading: String,
    pub intro: Option<String>,
    pub layout: SectionLayout,
    pub cards: Vec<CardView>,
    /// Size of the list the cards were taken from
    pub total: usize,
    pub view_all: Option<ViewAll>,
}

impl CardSection {
    /// `view_all` is only kept when the cards are a strict preview of `total`.
    /// Sections without a full listing to link to pass `None`.
    pub fn new(
        heading: &str,
        layout: SectionLayout,
        cards: Vec<CardView>,
        total: usize,
        view_all: Option<ViewAll>,
    ) -> Self {
        let truncated = total != cards.len();
        Self {
            heading: heading.to_string(),
            intro: None,
            layout,
            cards,
            total,
            view_all: view_all.filter(|_| truncated),
        }
    }

    pub fn with_intro(mut self, intro: &str) -> Self {
        if !intro.is_empty() {
            self.intro = Some(intro.to_string());
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub heading: String,
    pub links: Vec<SidebarLink>,
}

/// Full body of a single post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub date: String,
    pub thumbnail: Option<String>,
    pub content: TrustedHtml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub year: i32,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub kind: PageKind,
    /// Document title
    pub title: String,
    /// Route the page is served from, e.g. `/blog/`
    pub route: String,
    pub filled_header: bool,
    pub banner: Option<Banner>,
    pub intro: Option<Banner>,
    pub sections: Vec<CardSection>,
    pub sidebar: Option<Sidebar>,
    pub article: Option<Article>,
    pub footer: Footer,
}

/// Arranges banners, card sections and sidebars into pages
pub struct PageComposer<'a> {
    config: &'a SiteConfig,
    clock: &'a dyn Clock,
}

impl<'a> PageComposer<'a> {
    pub fn new(config: &'a SiteConfig, clock: &'a dyn Clock) -> Self {
        Self { config, clock }
    }

    /// Home page: hero, intro, post preview, projects and the popular panel.
    ///
    /// `preview` is the already truncated post list and `total` the length of
    /// the list it was cut from.
    pub fn home(
        &self,
        preview: &[Post],
        total: usize,
        projects: &[Project],
        popular: &[Post],
    ) -> Page {
        let recent = CardSection::new(
            "Recent Posts",
            SectionLayout::List,
            blog_cards(self.config, preview),
            total,
            Some(self.view_all_posts()),
        );

        let mut sections = vec![recent];
        if !projects.is_empty() {
            let intro = &self.config.projects_intro;
            sections.push(
                CardSection::new(
                    &intro.heading,
                    SectionLayout::Showcase,
                    project_cards(self.config, projects),
                    projects.len(),
                    None,
                )
                .with_intro(&intro.body),
            );
        }

        let title = if self.config.description.is_empty() {
            self.config.title.clone()
        } else {
            format!("{} | {}", self.config.title, self.config.description)
        };

        let mut page = self.compose(
            PageKind::Home,
            title,
            "/",
            Some(Banner::from(&self.config.hero)),
            sections,
            self.popular_sidebar(popular),
        );
        if !self.config.intro.is_empty() {
            page.intro = Some(Banner::from(&self.config.intro));
        }
        page
    }

    /// Blog index: every post plus the popular panel
    pub fn blog_index(&self, posts: &[Post], popular: &[Post]) -> Page {
        let section = CardSection::new(
            "Recent Blog Posts",
            SectionLayout::List,
            blog_cards(self.config, posts),
            posts.len(),
            Some(self.view_all_posts()),
        );

        self.compose(
            PageKind::BlogIndex,
            format!("{} | Blog", self.config.title),
            BLOG_ROUTE,
            None,
            vec![section],
            self.popular_sidebar(popular),
        )
    }

    /// Page for a single post
    pub fn post(&self, post: &Post) -> Page {
        let mut page = self.compose(
            PageKind::Post,
            format!("{} | {}", post.title, self.config.title),
            &post.slug,
            None,
            Vec::new(),
            None,
        );
        page.article = Some(Article {
            title: post.title.clone(),
            date: post.date.clone(),
            thumbnail: post.thumbnail.as_deref().map(|t| {
                if is_external(t) {
                    t.to_string()
                } else {
                    url_for(self.config, t)
                }
            }),
            content: post.content.clone(),
        });
        page
    }

    /// Assemble a page from its parts
    pub fn compose(
        &self,
        kind: PageKind,
        title: String,
        route: &str,
        banner: Option<Banner>,
        sections: Vec<CardSection>,
        sidebar: Option<Sidebar>,
    ) -> Page {
        Page {
            kind,
            title,
            route: route.to_string(),
            filled_header: kind.filled_header(),
            banner,
            intro: None,
            sections,
            sidebar,
            article: None,
            footer: Footer {
                year: self.clock.now().year(),
                author: self.config.author.clone(),
            },
        }
    }

    /// "Popular Posts" panel, absent when nothing matched the allowlist
    pub fn popular_sidebar(&self, popular: &[Post]) -> Option<Sidebar> {
        if popular.is_empty() {
            return None;
        }
        Some(Sidebar {
            heading: "Popular Posts".to_string(),
            links: popular
                .iter()
                .map(|p| SidebarLink {
                    title: p.title.clone(),
                    href: url_for(self.config, &p.slug),
                })
                .collect(),
        })
    }

    fn view_all_posts(&self) -> ViewAll {
        ViewAll {
            href: url_for(self.config, BLOG_ROUTE),
            label: "View all posts".to_string(),
        }
    }
}
