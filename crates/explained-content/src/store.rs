//! The content store: category-ordered topics and slug lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

use explained_core::{Error, Result};
use regex::Regex;

use crate::catalog::CATEGORIES;
use crate::topic::{Category, CategoryInfo, Topic};

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Read-only view over a static catalog.
///
/// `Copy`, so handlers and renderers can take it by value.
#[derive(Clone, Copy, Debug)]
pub struct ContentStore {
    categories: &'static [Category],
}

impl ContentStore {
    /// Store over an arbitrary static catalog.
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// The tutorial catalog compiled into this binary.
    pub const fn builtin() -> Self {
        Self::new(CATEGORIES)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Every topic, in category order then topic order.
    pub fn topics(&self) -> impl Iterator<Item = &'static Topic> + use<> {
        let categories: &'static [Category] = self.categories;
        categories.iter().flat_map(|c| c.topics.iter())
    }

    /// Total number of topics.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }

    /// Returns true if the catalog holds no topics.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First topic whose slug equals `slug` exactly (case-sensitive).
    pub fn find(&self, slug: &str) -> Option<&'static Topic> {
        let found = self.topics().find(|t| t.slug == slug);
        if found.is_none() {
            log::debug!("no topic with slug '{slug}'");
        }
        found
    }

    /// Like [`find`](Self::find), but a miss is an [`Error::NotFound`].
    pub fn get(&self, slug: &str) -> Result<&'static Topic> {
        self.find(slug)
            .ok_or_else(|| Error::not_found(format!("topic '{slug}'")))
    }

    /// Category containing the topic with `slug`.
    pub fn category_of(&self, slug: &str) -> Option<&'static Category> {
        let categories: &'static [Category] = self.categories;
        categories.iter().find(|c| c.contains(slug))
    }

    /// Category by id.
    pub fn category(&self, id: &str) -> Option<&'static Category> {
        let categories: &'static [Category] = self.categories;
        categories.iter().find(|c| c.id == id)
    }

    /// Summaries of every category, in display order.
    pub fn category_infos(&self) -> Vec<CategoryInfo> {
        self.categories.iter().map(Category::info).collect()
    }

    /// Check catalog invariants: unique, URL-safe slugs and non-empty titles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContent`] naming the first offending entry.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut category_ids = HashSet::new();

        for category in self.categories {
            if !category_ids.insert(category.id) {
                return Err(Error::invalid_content(format!(
                    "duplicate category '{}'",
                    category.id
                )));
            }
            for topic in category.topics {
                if !SLUG.is_match(topic.slug) {
                    return Err(Error::invalid_content(format!(
                        "slug '{}' in '{}' is not URL-safe",
                        topic.slug, category.id
                    )));
                }
                if !seen.insert(topic.slug) {
                    return Err(Error::invalid_content(format!(
                        "duplicate slug '{}' in '{}'",
                        topic.slug, category.id
                    )));
                }
                if topic.title.trim().is_empty() {
                    return Err(Error::invalid_content(format!(
                        "topic '{}' has an empty title",
                        topic.slug
                    )));
                }
            }
        }

        log::debug!(
            "validated {} topics in {} categories",
            seen.len(),
            category_ids.len()
        );
        Ok(())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Block, fence_count, transform};

    const fn topic(slug: &'static str, title: &'static str) -> Topic {
        Topic {
            title,
            slug,
            description: "",
            content: "",
        }
    }

    static SMALL: &[Category] = &[
        Category {
            id: "basics",
            topics: &[topic("intro", "Intro"), topic("setup", "Setup")],
        },
        Category {
            id: "more",
            topics: &[topic("hooks", "Hooks")],
        },
    ];

    static DUPLICATE: &[Category] = &[
        Category {
            id: "a",
            topics: &[topic("same", "One")],
        },
        Category {
            id: "b",
            topics: &[topic("same", "Two")],
        },
    ];

    static UNSAFE_SLUG: &[Category] = &[Category {
        id: "a",
        topics: &[topic("Not Safe", "Title")],
    }];

    static EMPTY_TITLE: &[Category] = &[Category {
        id: "a",
        topics: &[topic("ok", "  ")],
    }];

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = ContentStore::builtin();
        store.validate().unwrap();
        assert_eq!(store.len(), 9);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_builtin_category_order() {
        let ids: Vec<_> = ContentStore::builtin()
            .categories()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "getting-started",
                "core-concepts",
                "advanced-topics",
                "practical-guides",
                "ecosystem"
            ]
        );
    }

    #[test]
    fn test_builtin_content_is_embedded() {
        let store = ContentStore::builtin();
        for t in store.topics() {
            assert!(!t.content.trim().is_empty(), "{} has no body", t.slug);
            assert_eq!(fence_count(t.content) % 2, 0, "{} has an open fence", t.slug);
        }
    }

    #[test]
    fn test_builtin_intro_starts_with_heading() {
        let intro = ContentStore::builtin().get("introduction-to-react").unwrap();
        let blocks = transform(intro.content);
        assert!(matches!(
            &blocks[0],
            Block::Heading { text, .. } if text == "Introduction to React"
        ));
        assert!(blocks.iter().any(|b| b.is_code()));
    }

    #[test]
    fn test_find_in_any_category() {
        let store = ContentStore::new(SMALL);
        assert_eq!(store.find("intro").unwrap().title, "Intro");
        assert_eq!(store.find("hooks").unwrap().title, "Hooks");
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        let store = ContentStore::new(SMALL);
        assert!(store.find("Intro").is_none());
        assert!(store.find("intro ").is_none());
        assert!(store.find("").is_none());
    }

    #[test]
    fn test_get_not_found() {
        let err = ContentStore::new(SMALL).get("missing").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_find_returns_first_match() {
        let store = ContentStore::new(DUPLICATE);
        assert_eq!(store.find("same").unwrap().title, "One");
    }

    #[test]
    fn test_topics_order() {
        let slugs: Vec<_> = ContentStore::new(SMALL).topics().map(|t| t.slug).collect();
        assert_eq!(slugs, vec!["intro", "setup", "hooks"]);
    }

    #[test]
    fn test_category_of_and_by_id() {
        let store = ContentStore::new(SMALL);
        assert_eq!(store.category_of("setup").unwrap().id, "basics");
        assert_eq!(store.category_of("hooks").unwrap().id, "more");
        assert!(store.category_of("nope").is_none());
        assert_eq!(store.category("more").unwrap().topics.len(), 1);
        assert!(store.category("none").is_none());
    }

    #[test]
    fn test_category_infos() {
        let infos = ContentStore::new(SMALL).category_infos();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name, "Basics");
        assert_eq!(infos[0].count, 2);
    }

    #[test]
    fn test_validate_rejects_duplicate_slug() {
        let err = ContentStore::new(DUPLICATE).validate().unwrap_err();
        assert!(err.to_string().contains("duplicate slug 'same'"));
    }

    #[test]
    fn test_validate_rejects_unsafe_slug() {
        let err = ContentStore::new(UNSAFE_SLUG).validate().unwrap_err();
        assert!(err.to_string().contains("not URL-safe"));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = ContentStore::new(EMPTY_TITLE).validate().unwrap_err();
        assert!(err.to_string().contains("empty title"));
    }

    #[test]
    fn test_empty_store() {
        let store = ContentStore::new(&[]);
        assert!(store.is_empty());
        assert!(store.find("x").is_none());
        store.validate().unwrap();
    }
}
