//! Blocks to HTML.

use explained_content::{Block, HeadingLevel};
use maud::{Markup, html};

use crate::render::icons;
use crate::ui::CopyIndicator;

/// Render a block sequence. Code blocks are numbered in order so each copy
/// button can address its own `<code>` element.
pub fn render_blocks(blocks: &[Block]) -> Markup {
    let mut code_index = 0;
    let rendered: Vec<Markup> = blocks
        .iter()
        .map(|block| match block {
            Block::Code { language, code } => {
                let markup = code_block(code_index, language, code);
                code_index += 1;
                markup
            }
            _ => render_block(block),
        })
        .collect();
    html! {
        @for markup in &rendered {
            (markup)
        }
    }
}

/// Render a single block. A code block rendered this way gets index 0; use
/// [`render_blocks`] for whole documents.
pub fn render_block(block: &Block) -> Markup {
    match block {
        Block::Heading { level, text } => match level {
            HeadingLevel::H1 => html! { h1.doc-h1 { (text) } },
            HeadingLevel::H2 => html! { h2.doc-h2 { (text) } },
            HeadingLevel::H3 => html! { h3.doc-h3 { (text) } },
        },
        Block::List { items } => html! {
            ul.doc-list {
                @for item in items {
                    li { (item) }
                }
            }
        },
        Block::Paragraph { text } => html! { p.doc-p { (text) } },
        Block::Code { language, code } => code_block(0, language, code),
    }
}

/// A code block with its language label and copy button.
pub fn code_block(index: usize, language: &str, code: &str) -> Markup {
    let code_id = format!("code-{index}");
    let idle = CopyIndicator::Idle;
    html! {
        div.code-block data-language=(language) {
            @if !language.is_empty() {
                div.code-header {
                    span.code-language { (language) }
                }
            }
            pre {
                code id=(code_id) class=(format!("language-{}", if language.is_empty() { "text" } else { language })) {
                    (code)
                }
            }
            button.copy-button type="button"
                data-copy-target=(code_id)
                data-state=(idle.as_str())
                data-label-idle=(CopyIndicator::Idle.label())
                data-label-copied=(CopyIndicator::Copied.label())
                data-label-failed=(CopyIndicator::Failed.label())
                aria-label=(idle.label()) {
                (icons::copy())
                (icons::check())
                (icons::alert())
                span.sr-only.copy-label { (idle.label()) }
            }
        }
    }
}
