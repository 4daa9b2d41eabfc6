//! Topic and category records.

use serde::Serialize;

/// URL prefix under which every topic page lives.
pub const TOPIC_PATH_PREFIX: &str = "/topic/";

/// A single tutorial article.
///
/// All fields are compiled into the binary and live for the whole process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Human-readable title.
    pub title: &'static str,
    /// Unique, URL-safe identifier used for routing and lookup.
    pub slug: &'static str,
    /// One-line summary shown in cards and under the page title.
    pub description: &'static str,
    /// Raw body text, fed to [`transform`](crate::transform).
    #[serde(skip)]
    pub content: &'static str,
}

impl Topic {
    /// Path of this topic's page, e.g. `/topic/react-router`.
    pub fn href(&self) -> String {
        format!("{TOPIC_PATH_PREFIX}{}", self.slug)
    }
}

/// A named, ordered group of topics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Category key, e.g. `getting-started`.
    pub id: &'static str,
    /// Topics in display order.
    pub topics: &'static [Topic],
}

impl Category {
    /// Label shown in the sidebar: `getting-started` becomes `Getting Started`.
    pub fn display_name(&self) -> String {
        self.id
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns true if one of this category's topics has the given slug.
    pub fn contains(&self, slug: &str) -> bool {
        self.topics.iter().any(|t| t.slug == slug)
    }

    /// Summary of this category for listings.
    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            id: self.id.to_string(),
            name: self.display_name(),
            count: self.topics.len(),
        }
    }
}

/// Information about a content category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of topics in this category.
    pub count: usize,
}
