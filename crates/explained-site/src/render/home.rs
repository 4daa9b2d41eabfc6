//! Landing page: hero banner and featured-topic grid.

use explained_content::{ContentStore, Topic};
use maud::{Markup, html};

use crate::render::icons::{self, CardIcon};
use crate::render::{PageContext, layout};
use crate::route::topic_href;

/// Slug the "Start Learning" button points at.
pub const START_SLUG: &str = "introduction-to-react";

/// Slug the "Explore Topics" button points at.
pub const EXPLORE_SLUG: &str = "react-ecosystem";

/// Topics on the landing grid, in display order.
pub const FEATURED: &[(&str, CardIcon)] = &[
    ("introduction-to-react", CardIcon::Puzzle),
    ("understanding-hooks", CardIcon::Refresh),
    ("component-patterns", CardIcon::Layers),
    ("state-management", CardIcon::Database),
    ("react-router", CardIcon::Globe),
    ("styling-in-react", CardIcon::Layout),
    ("react-ecosystem", CardIcon::Code),
    ("performance-optimization", CardIcon::Zap),
];

/// Landing page: hero and featured-topic grid.
pub fn home_page(store: &ContentStore, ctx: &PageContext) -> Markup {
    let main = html! {
        (hero(ctx))
        (topic_grid(store))
    };
    layout::page(store, ctx, &ctx.site_title, None, main)
}

/// Site title, tagline, and the two entry links.
pub fn hero(ctx: &PageContext) -> Markup {
    html! {
        section.hero {
            div.hero-logo { (icons::react_logo()) }
            h1.hero-title { (ctx.site_title) }
            p.hero-tagline { (ctx.tagline) }
            div.hero-actions {
                a.button.button-primary href=(topic_href(START_SLUG)) { "Start Learning" }
                a.button.button-outline href=(topic_href(EXPLORE_SLUG)) { "Explore Topics" }
            }
        }
    }
}

/// Featured topics that exist in `store`, with their icons.
pub fn featured_topics(store: &ContentStore) -> Vec<(&'static Topic, CardIcon)> {
    FEATURED
        .iter()
        .filter_map(|&(slug, icon)| match store.find(slug) {
            Some(topic) => Some((topic, icon)),
            None => {
                tracing::warn!(slug, "featured topic missing from catalog, skipping");
                None
            }
        })
        .collect()
}

/// Card grid over [`featured_topics`].
pub fn topic_grid(store: &ContentStore) -> Markup {
    html! {
        section.topic-grid-section {
            div.topic-grid {
                @for (topic, icon) in featured_topics(store) {
                    (topic_card(topic, icon))
                }
            }
        }
    }
}

fn topic_card(topic: &Topic, icon: CardIcon) -> Markup {
    html! {
        a.topic-card href=(topic.href()) {
            div.topic-card-icon { (icon.render()) }
            h3.topic-card-title { (topic.title) }
            p.topic-card-description { (topic.description) }
        }
    }
}
