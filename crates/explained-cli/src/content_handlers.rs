//! Catalog commands: `topics`, `show`, and `check`.
//!
//! Handlers build the output as a `String`; [`crate::app`] prints it.

use crate::cli::ShowFormat;
use explained_content::{Block, CategoryInfo, ContentStore, Topic, transform};
use explained_core::{Error, Result};
use explained_site::render::{self, PageContext};
use serde::Serialize;

/// A category with its topics, as emitted by `topics --json`.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    #[serde(flatten)]
    pub info: CategoryInfo,
    pub topics: Vec<Topic>,
}

/// A topic with its parsed body, as emitted by `show --format json`.
#[derive(Debug, Serialize)]
pub struct TopicDocument {
    #[serde(flatten)]
    pub topic: Topic,
    pub category: String,
    pub href: String,
    pub blocks: Vec<Block>,
}

// ============================================================================
// topics
// ============================================================================

/// List categories and topics, optionally restricted to one category.
pub fn list_topics(store: &ContentStore, category: Option<&str>, json: bool) -> Result<String> {
    let categories = match category {
        Some(id) => {
            let found = store
                .category(id)
                .ok_or_else(|| Error::not_found(format!("category '{id}'")))?;
            std::slice::from_ref(found)
        }
        None => store.categories(),
    };

    if json {
        let listings: Vec<CategoryListing> = categories
            .iter()
            .map(|c| CategoryListing {
                info: c.info(),
                topics: c.topics.to_vec(),
            })
            .collect();
        return serde_json::to_string_pretty(&listings)
            .map_err(|e| Error::invalid_content(e.to_string()));
    }

    let width = categories
        .iter()
        .flat_map(|c| c.topics)
        .map(|t| t.slug.len())
        .max()
        .unwrap_or(0);

    let sections: Vec<String> = categories
        .iter()
        .map(|category| {
            let mut lines = vec![format!(
                "{} ({})",
                category.display_name(),
                category.topics.len()
            )];
            lines.extend(
                category
                    .topics
                    .iter()
                    .map(|topic| format!("  {:<width$}  {}", topic.slug, topic.title)),
            );
            lines.join("\n") + "\n"
        })
        .collect();
    Ok(sections.join("\n"))
}

// ============================================================================
// show
// ============================================================================

/// Render one topic in the requested format.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no topic has `slug`.
pub fn show_topic(
    store: &ContentStore,
    ctx: &PageContext,
    slug: &str,
    format: ShowFormat,
) -> Result<String> {
    let topic = store.get(slug)?;
    match format {
        ShowFormat::Html => Ok(render::topic_page(store, topic, ctx).into_string()),
        ShowFormat::Json => {
            let doc = TopicDocument {
                topic: *topic,
                category: store
                    .category_of(slug)
                    .map(|c| c.id.to_string())
                    .unwrap_or_default(),
                href: topic.href(),
                blocks: transform(topic.content),
            };
            serde_json::to_string_pretty(&doc).map_err(|e| Error::invalid_content(e.to_string()))
        }
        ShowFormat::Text => Ok(plain_text(topic)),
    }
}

/// Topic as terminal-friendly text.
pub fn plain_text(topic: &Topic) -> String {
    let mut out = format!("{}\n{}\n", topic.title, topic.description);
    for block in transform(topic.content) {
        out.push('\n');
        let text = match block {
            Block::Heading { level, text } => {
                format!("{} {text}\n", "#".repeat(level.as_u8() as usize))
            }
            Block::List { items } => items.iter().map(|item| format!("  * {item}\n")).collect(),
            Block::Paragraph { text } => format!("{text}\n"),
            Block::Code { language, code } => format!("```{language}\n{code}\n```\n"),
        };
        out.push_str(&text);
    }
    out
}

// ============================================================================
// check
// ============================================================================

/// Validate the catalog and every topic body.
///
/// Besides [`ContentStore::validate`], each body must have balanced code
/// fences and produce at least one block.
pub fn check_catalog(store: &ContentStore) -> Result<String> {
    store.validate()?;

    let mut blocks = 0;
    let mut code_blocks = 0;
    for topic in store.topics() {
        let fences = explained_content::transform::fence_count(topic.content);
        if fences % 2 != 0 {
            return Err(Error::invalid_content(format!(
                "topic '{}' has an unclosed code fence",
                topic.slug
            )));
        }
        let parsed = transform(topic.content);
        if parsed.is_empty() {
            return Err(Error::invalid_content(format!(
                "topic '{}' has no content",
                topic.slug
            )));
        }
        blocks += parsed.len();
        code_blocks += parsed.iter().filter(|b| b.is_code()).count();
        log::debug!("checked {} ({} blocks)", topic.slug, parsed.len());
    }

    Ok(format!(
        "OK: {} categories, {} topics, {} blocks ({} code)",
        store.categories().len(),
        store.len(),
        blocks,
        code_blocks
    ))
}

// ============================================================================
// Tests
// ============================================================================
