//! Project showcase card

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{Project, ProjectLayout, TrustedHtml};
use crate::helpers::{html_escape, is_external, url_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
        }
    }
}

/// Presentation flags derived from a [`ProjectLayout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectCardLayout {
    pub text_align: TextAlign,
    /// Text column placed before the logo
    pub text_first: bool,
    /// Tech badges pushed to the end of their row
    pub badges_end: bool,
    pub square_logo: bool,
}

impl From<ProjectLayout> for ProjectCardLayout {
    fn from(layout: ProjectLayout) -> Self {
        match layout {
            ProjectLayout::Default => Self {
                text_align: TextAlign::Right,
                text_first: false,
                badges_end: true,
                square_logo: false,
            },
            ProjectLayout::Alternate => Self {
                text_align: TextAlign::Left,
                text_first: true,
                badges_end: false,
                square_logo: false,
            },
            ProjectLayout::Square => Self {
                text_align: TextAlign::Right,
                text_first: false,
                badges_end: true,
                square_logo: true,
            },
        }
    }
}

/// Showcase card for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: TrustedHtml,
    pub link: String,
    pub logo: String,
    pub logo_alt: String,
    /// One `"{name} |"` entry per technology, in authored order
    pub tech_badges: Vec<String>,
    pub layout: ProjectCardLayout,
}

impl ProjectCard {
    pub fn new(config: &SiteConfig, project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            link: project.link.clone(),
            logo: if is_external(&project.logo) {
                project.logo.clone()
            } else {
                url_for(config, &project.logo)
            },
            logo_alt: format!("{} - Logo", project.title),
            tech_badges: project.tech.iter().map(|t| format!("{} |", t)).collect(),
            layout: project.layout.into(),
        }
    }

    pub fn to_html(&self) -> String {
        let logo_class = if self.layout.square_logo {
            "project-logo project-logo-square"
        } else {
            "project-logo"
        };
        let logo = format!(
            r#"<div class="project-image"><img class="{}" src="{}" alt="{}"></div>"#,
            logo_class,
            html_escape(&self.logo),
            html_escape(&self.logo_alt)
        );

        let mut text = format!(
            r#"<div class="project-text" style="text-align: {}">"#,
            self.layout.text_align.as_str()
        );
        text.push_str(&format!(
            r#"<h2><span itemprop="headline">{}</span></h2>"#,
            html_escape(&self.title)
        ));
        // Trusted: comes from the site configuration
        text.push_str(&format!(
            r#"<div class="project-description" itemprop="description">{}</div>"#,
            self.description
        ));
        if !self.tech_badges.is_empty() {
            let class = if self.layout.badges_end {
                "project-tech justify-end"
            } else {
                "project-tech"
            };
            text.push_str(&format!(r#"<div class="{}">"#, class));
            for badge in &self.tech_badges {
                text.push_str(&format!("<p>{}</p>", html_escape(badge)));
            }
            text.push_str("</div>");
        }
        text.push_str(&format!(
            r#"<div class="project-link"><a class="link" href="{}" target="_blank" rel="noopener">View Project</a></div>"#,
            html_escape(&self.link)
        ));
        text.push_str("</div>");

        let (first, second) = if self.layout.text_first {
            (text, logo)
        } else {
            (logo, text)
        };
        format!(r#"<div class="project-card">{}{}</div>"#, first, second)
    }
}
