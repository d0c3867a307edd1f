//! HTML document rendering for composed pages

use super::{Article, Banner, CardSection, Page, PageKind, SectionLayout, Sidebar};
use crate::config::SiteConfig;
use crate::helpers::{css, full_url_for, html_escape, link_to, meta_generator};

/// Render a page as a complete HTML document
pub fn render_page(config: &SiteConfig, page: &Page) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("<title>{}</title>\n", html_escape(&page.title)));
    if !config.description.is_empty() {
        html.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            html_escape(&config.description)
        ));
    }
    if !config.url.is_empty() {
        html.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            html_escape(&full_url_for(config, &page.route))
        ));
    }
    html.push_str(&meta_generator());
    html.push('\n');
    html.push_str(&css(config, "style"));
    html.push_str("\n</head>\n<body>\n");

    html.push_str(&format!(
        "<div class=\"global-wrapper\" data-is-root-path=\"{}\">\n",
        page.kind == PageKind::Home
    ));
    html.push_str(&render_header(config, page.filled_header));
    html.push_str("<main>\n");

    if let Some(banner) = &page.banner {
        html.push_str(&render_banner(banner, "hero"));
    }
    if let Some(intro) = &page.intro {
        html.push_str(&render_banner(intro, "intro"));
    }

    if page.sidebar.is_some() {
        html.push_str("<div class=\"content with-sidebar\">\n<div class=\"main-column\">\n");
    } else {
        html.push_str("<div class=\"content\">\n");
    }
    for section in &page.sections {
        html.push_str(&render_section(section));
    }
    if let Some(article) = &page.article {
        html.push_str(&render_article(config, article));
    }
    if let Some(sidebar) = &page.sidebar {
        html.push_str("</div>\n");
        html.push_str(&render_sidebar(sidebar));
    }
    html.push_str("</div>\n</main>\n");

    html.push_str(&format!(
        "<footer class=\"site-footer\">© {}, {}</footer>\n",
        page.footer.year,
        html_escape(&page.footer.author)
    ));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_header(config: &SiteConfig, filled: bool) -> String {
    let class = if filled {
        "site-header filled"
    } else {
        "site-header"
    };
    format!(
        "<div class=\"{}\"><ul class=\"site-nav\"><li>{}</li><li>{}</li></ul></div>\n",
        class,
        link_to(config, "/", "Home", Some("header-link-home")),
        link_to(config, super::BLOG_ROUTE, "Blog", Some("header-link-home")),
    )
}

fn render_banner(banner: &Banner, class: &str) -> String {
    let mut html = format!("<div class=\"{}\">", class);
    if !banner.heading.is_empty() {
        html.push_str(&format!("<h1>{}</h1>", html_escape(&banner.heading)));
    }
    if !banner.body.is_empty() {
        html.push_str(&format!("<p>{}</p>", html_escape(&banner.body)));
    }
    html.push_str("</div>\n");
    html
}

fn render_section(section: &CardSection) -> String {
    let mut html = String::from("<section class=\"card-section\">");
    if !section.heading.is_empty() {
        html.push_str(&format!("<h2>{}</h2>", html_escape(&section.heading)));
    }
    if let Some(intro) = &section.intro {
        html.push_str(&format!("<p>{}</p>", html_escape(intro)));
    }

    let (open, close) = match section.layout {
        SectionLayout::List => ("<ol class=\"card-grid\">", "</ol>"),
        SectionLayout::Showcase => ("<div class=\"project-list\">", "</div>"),
    };
    html.push_str(open);
    for card in &section.cards {
        html.push_str(&card.to_html());
    }
    html.push_str(close);

    if let Some(view_all) = &section.view_all {
        html.push_str(&format!(
            "<p class=\"view-all\"><a href=\"{}\">{}</a></p>",
            html_escape(&view_all.href),
            html_escape(&view_all.label)
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_sidebar(sidebar: &Sidebar) -> String {
    let mut html = format!(
        "<aside class=\"sidebar\"><h3>{}</h3>",
        html_escape(&sidebar.heading)
    );
    for link in &sidebar.links {
        html.push_str(&format!(
            "<a href=\"{}\" itemprop=\"url\"><div class=\"popular-post\"><h4>{}</h4></div></a>",
            html_escape(&link.href),
            html_escape(&link.title)
        ));
    }
    html.push_str("</aside>\n");
    html
}

fn render_article(config: &SiteConfig, article: &Article) -> String {
    let mut html = String::from(
        "<article class=\"post\" itemscope itemtype=\"http://schema.org/Article\"><header>",
    );
    html.push_str(&format!(
        "<h1 itemprop=\"headline\">{}</h1>",
        html_escape(&article.title)
    ));
    if !article.date.is_empty() {
        html.push_str(&format!("<p class=\"post-date\">{}</p>", html_escape(&article.date)));
    }
    html.push_str("</header>");
    if let Some(thumbnail) = &article.thumbnail {
        html.push_str(&format!(
            "<img class=\"post-thumbnail\" src=\"{}\" alt=\"{}\">",
            html_escape(thumbnail),
            html_escape(&article.title)
        ));
    }
    // Rendered from the post's own markdown
    html.push_str(&format!(
        "<section itemprop=\"articleBody\">{}</section>",
        article.content
    ));
    html.push_str(&format!(
        "<nav class=\"post-nav\">{}</nav>",
        link_to(config, super::BLOG_ROUTE, "← All posts", None)
    ));
    html.push_str("</article>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::content::{project, take_prefix, PopularAllowlist, RawPost};
    use crate::page::{FixedClock, PageComposer};

    fn post(slug: &str, date: &str, excerpt: &str) -> crate::content::Post {
        project(&RawPost {
            slug: Some(slug.to_string()),
            date: Some(date.to_string()),
            excerpt: Some(excerpt.to_string()),
            content: Some("<p>Body</p>".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_render_home_is_reproducible() {
        let mut config = SiteConfig::default();
        config.author = "Peter Jewicz".to_string();
        config.hero.heading = "Hi! I'm Peter".to_string();
        let clock = clock();
        let composer = PageComposer::new(&config, &clock);

        let posts: Vec<_> = (1..=5)
            .map(|i| post(&format!("/p{}/", i), &format!("202{}", i), "<p>Hi</p>"))
            .collect();
        let preview = take_prefix(posts.clone(), 3);
        let page = composer.home(&preview, posts.len(), &[], &[]);

        let first = render_page(&config, &page);
        let second = render_page(&config, &page);
        assert_eq!(first, second);
        assert!(first.contains("© 2022, Peter Jewicz"));
        assert!(first.contains("<h1>Hi! I&#39;m Peter</h1>"));
        assert!(first.contains("<p>Hi</p>"));
        assert!(first.contains("class=\"view-all\""));
        assert!(first.contains("class=\"site-header\""));
        assert!(first.contains("data-is-root-path=\"true\""));
    }

    #[test]
    fn test_render_blog_index_with_sidebar() {
        let mut config = SiteConfig::default();
        config.popular_posts = PopularAllowlist::new(["/a/"]);
        let clock = clock();
        let composer = PageComposer::new(&config, &clock);

        let posts = vec![post("/a/", "2021", "A"), post("/b/", "2020", "B")];
        let popular = vec![posts[0].clone()];
        let html = render_page(&config, &composer.blog_index(&posts, &popular));

        assert!(html.contains("site-header filled"));
        assert!(html.contains("with-sidebar"));
        assert!(html.contains("<h3>Popular Posts</h3>"));
        assert!(!html.contains("view-all"));
    }

    #[test]
    fn test_render_post_page() {
        let config = SiteConfig::default();
        let clock = clock();
        let page = PageComposer::new(&config, &clock).post(&post("/a/", "2021", "A"));
        let html = render_page(&config, &page);
        assert!(html.contains("<section itemprop=\"articleBody\"><p>Body</p></section>"));
        assert!(html.contains("<p class=\"post-date\">2021</p>"));
        assert!(html.contains("href=\"/blog/\""));
    }

    #[test]
    fn test_canonical_link() {
        let mut config = SiteConfig::default();
        config.url = "https://peterjewicz.com".to_string();
        let clock = clock();
        let page = PageComposer::new(&config, &clock).post(&post("/a/", "2021", "A"));
        let html = render_page(&config, &page);
        assert!(html.contains(r#"<link rel="canonical" href="https://peterjewicz.com/a/">"#));
    }
}
