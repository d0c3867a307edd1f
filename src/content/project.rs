//! Portfolio project entries

use serde::{Deserialize, Serialize};

use super::TrustedHtml;

/// Card arrangement for a project; never changes which data is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLayout {
    /// Logo on the left, text right-aligned
    #[default]
    Default,
    /// Text first and left-aligned, logo on the right
    Alternate,
    /// Default arrangement with a square, fixed-size logo
    Square,
}

/// A project shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: TrustedHtml,
    /// Outbound URL
    pub link: String,
    /// Logo image URL
    pub logo: String,
    /// Technologies in display order
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub layout: ProjectLayout,
}
