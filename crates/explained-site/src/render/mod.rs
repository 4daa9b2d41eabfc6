//! HTML templates.
//!
//! Every page is the shared [`layout`] shell around either the landing
//! page ([`home`]) or a topic page ([`topic`]). Topic bodies go through
//! [`explained_content::transform`] and are rendered by [`blocks`].
//!
//! Templates are maud macros, so all interpolated text is escaped: topic
//! content is shown literally, never interpreted as HTML.

pub mod blocks;
pub mod home;
pub mod icons;
pub mod layout;
pub mod topic;

use chrono::Datelike;
use explained_core::ConfigProvider;

use crate::ui::CategoryExpansion;

pub use blocks::render_blocks;
pub use home::home_page;
pub use topic::topic_page;

/// Site-wide inputs shared by every template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub site_title: String,
    pub tagline: String,
    pub github_url: Option<String>,
    pub expansion: CategoryExpansion,
    pub year: i32,
}

impl PageContext {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            site_title: config.site_title().to_string(),
            tagline: config.tagline().to_string(),
            github_url: config.github_url().map(str::to_string),
            expansion: CategoryExpansion::new(config.expanded_categories()),
            year: chrono::Local::now().year(),
        }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            site_title: "React Explained".to_string(),
            tagline: "Your interactive guide to learn React with clear explanations and practical examples.".to_string(),
            github_url: Some("https://github.com/facebook/react".to_string()),
            expansion: CategoryExpansion::default(),
            year: 2026,
        }
    }
}
