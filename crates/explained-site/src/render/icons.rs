//! Inline SVG icons.

use maud::{Markup, PreEscaped, html};

const REACT_LOGO: &str = r#"<svg viewBox="-11.5 -10.23 23 20.46" xmlns="http://www.w3.org/2000/svg" class="logo-svg" aria-hidden="true"><circle r="2.05" fill="currentColor"/><g stroke="currentColor" stroke-width="1" fill="none"><ellipse rx="11" ry="4.2"/><ellipse rx="11" ry="4.2" transform="rotate(60)"/><ellipse rx="11" ry="4.2" transform="rotate(120)"/></g></svg>"#;

fn stroke_icon(class: &str, paths: &str) -> Markup {
    html! {
        svg.icon.(class) viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(paths))
        }
    }
}

/// React atom used as the brand mark.
pub fn react_logo() -> Markup {
    PreEscaped(REACT_LOGO.to_string())
}

/// Category expand indicator.
pub fn chevron() -> Markup {
    stroke_icon("chevron", r#"<path d="m9 18 6-6-6-6"/>"#)
}

/// Drawer open button.
pub fn menu() -> Markup {
    stroke_icon("menu-open", r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#)
}

/// Drawer close button.
pub fn close() -> Markup {
    stroke_icon("menu-close", r#"<path d="M18 6 6 18M6 6l12 12"/>"#)
}

/// Copy button, idle.
pub fn copy() -> Markup {
    stroke_icon(
        "copy-idle",
        r#"<rect width="14" height="14" x="8" y="8" rx="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#,
    )
}

/// Copy button, copied.
pub fn check() -> Markup {
    stroke_icon("copy-done", r#"<path d="M20 6 9 17l-5-5"/>"#)
}

/// Copy button, failed.
pub fn alert() -> Markup {
    stroke_icon(
        "copy-failed",
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4M12 16h.01"/>"#,
    )
}

/// Repository link.
pub fn github() -> Markup {
    stroke_icon(
        "github",
        r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
    )
}

/// Icon shown on a featured-topic card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIcon {
    Puzzle,
    Refresh,
    Layers,
    Database,
    Globe,
    Layout,
    Code,
    Zap,
}

impl CardIcon {
    pub fn render(self) -> Markup {
        let paths = match self {
            Self::Puzzle => {
                r#"<path d="M19.44 7.85c-.5.5-1.2.7-1.9.6-1.3-.2-2.5.8-2.5 2.1v1.9h-2a2 2 0 1 1 0 4h2v2a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2a2 2 0 1 1 4 0h2a2 2 0 0 1 2 2"/>"#
            }
            Self::Refresh => {
                r#"<path d="M3 12a9 9 0 0 1 15-6.7L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-15 6.7L3 16"/><path d="M8 16H3v5"/>"#
            }
            Self::Layers => {
                r#"<path d="m12 2 10 5-10 5L2 7z"/><path d="m2 17 10 5 10-5"/><path d="m2 12 10 5 10-5"/>"#
            }
            Self::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14a9 3 0 0 0 18 0V5"/><path d="M3 12a9 3 0 0 0 18 0"/>"#
            }
            Self::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15.3 15.3 0 0 1 0 20 15.3 15.3 0 0 1 0-20"/>"#
            }
            Self::Layout => {
                r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M3 9h18M9 21V9"/>"#
            }
            Self::Code => r#"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"#,
            Self::Zap => r#"<path d="M13 2 3 14h9l-1 8 10-12h-9z"/>"#,
        };
        stroke_icon("card-icon", paths)
    }
}
