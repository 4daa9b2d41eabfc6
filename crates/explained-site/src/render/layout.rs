//! Page shell: sidebar, navbar, main column, footer.

use explained_content::{Category, ContentStore, Topic};
use maud::{DOCTYPE, Markup, html};

use crate::assets::{SCRIPT, STYLESHEET};
use crate::render::{PageContext, icons};
use crate::route::topic_href;
use crate::ui::{COPY_RESET_MS, CategoryExpansion, SidebarState};

/// Navbar shortcuts: label and target slug.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Tutorials", "introduction-to-react"),
    ("Hooks", "understanding-hooks"),
    ("Components", "component-patterns"),
];

/// Wrap `main` in the full HTML document.
///
/// `active` is the topic being viewed, if any; it is highlighted in the
/// sidebar and its category starts expanded.
pub fn page(
    store: &ContentStore,
    ctx: &PageContext,
    title: &str,
    active: Option<&Topic>,
    main: Markup,
) -> Markup {
    let full_title = if title == ctx.site_title {
        title.to_string()
    } else {
        format!("{title} · {}", ctx.site_title)
    };
    let active_category = active
        .and_then(|t| store.category_of(t.slug))
        .map(|c| c.id);
    let expansion = ctx.expansion.clone().with_active(active_category);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title) }
                link rel="stylesheet" href=(STYLESHEET.href());
            }
            body data-copy-reset-ms=(COPY_RESET_MS) {
                div.layout {
                    aside.layout-sidebar {
                        (sidebar(store, ctx, &expansion, SidebarState::default(), active.map(|t| t.slug)))
                    }
                    div.layout-main {
                        (navbar(ctx))
                        main.content {
                            (main)
                        }
                        (footer(ctx))
                    }
                }
                script src=(SCRIPT.href()) defer {}
            }
        }
    }
}

/// Category tree with the mobile drawer controls.
pub fn sidebar(
    store: &ContentStore,
    ctx: &PageContext,
    expansion: &CategoryExpansion,
    state: SidebarState,
    active_slug: Option<&str>,
) -> Markup {
    html! {
        button.sidebar-toggle type="button"
            aria-label=(state.toggle_label())
            aria-expanded=(if state.is_open() { "true" } else { "false" })
            data-sidebar-toggle {
            (icons::menu())
            (icons::close())
        }
        div.sidebar.open[state.is_open()] #sidebar {
            div.sidebar-header {
                a.brand href="/" data-sidebar-close {
                    span.brand-logo { (icons::react_logo()) }
                    span.brand-name { (ctx.site_title) }
                }
                button.sidebar-close type="button"
                    aria-label=(SidebarState::default().toggle().toggle_label())
                    data-sidebar-toggle {
                    (icons::close())
                }
            }
            nav.sidebar-nav {
                ul.category-list {
                    @for category in store.categories() {
                        (category_item(category, expansion.is_expanded(category.id), active_slug))
                    }
                }
            }
        }
        div.sidebar-backdrop.open[state.is_open()] data-sidebar-toggle aria-hidden="true" {}
    }
}

fn category_item(category: &Category, expanded: bool, active_slug: Option<&str>) -> Markup {
    html! {
        li.category.expanded[expanded] data-category=(category.id) {
            button.category-toggle type="button"
                aria-expanded=(if expanded { "true" } else { "false" })
                data-category-toggle=(category.id) {
                span.category-name { (category.display_name()) }
                (icons::chevron())
            }
            ul.topic-list {
                @for topic in category.topics {
                    @let is_active = active_slug == Some(topic.slug);
                    li {
                        a.topic-link.active[is_active] href=(topic_href(topic.slug))
                            aria-current=[is_active.then_some("page")]
                            data-sidebar-close {
                            (topic.title)
                        }
                    }
                }
            }
        }
    }
}

/// Top bar with the brand, shortcut links, and the repository link.
pub fn navbar(ctx: &PageContext) -> Markup {
    html! {
        header.navbar {
            div.navbar-inner {
                a.navbar-brand href="/" {
                    span.brand-logo { (icons::react_logo()) }
                    span.brand-name { (ctx.site_title) }
                }
                nav.navbar-links {
                    @for (label, slug) in NAV_LINKS {
                        a href=(topic_href(slug)) { (label) }
                    }
                }
                @if let Some(url) = &ctx.github_url {
                    a.navbar-github href=(url) target="_blank" rel="noreferrer" {
                        (icons::github())
                        span.sr-only { "GitHub" }
                    }
                }
            }
        }
    }
}

/// Copyright line for the configured site title.
pub fn footer(ctx: &PageContext) -> Markup {
    html! {
        footer.footer {
            p { "© " (ctx.year) " " (ctx.site_title) ". All rights reserved." }
            p { "Built with Rust" }
        }
    }
}
