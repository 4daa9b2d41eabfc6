//! Topic page: title, description, and transformed body.

use explained_content::{ContentStore, Topic, transform};
use maud::{Markup, html};

use crate::render::{PageContext, layout, render_blocks};

/// Full document for one topic, highlighted in the sidebar.
pub fn topic_page(store: &ContentStore, topic: &Topic, ctx: &PageContext) -> Markup {
    let blocks = transform(topic.content);
    let main = html! {
        article.topic {
            h1.topic-title { (topic.title) }
            p.topic-description { (topic.description) }
            div.prose {
                (render_blocks(&blocks))
            }
        }
    };
    layout::page(store, ctx, topic.title, Some(topic), main)
}
