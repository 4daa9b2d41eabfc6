//! Raw topic text to renderable blocks.
//!
//! The input is split on triple-backtick fences. Even segments are prose,
//! odd segments are fenced code. Prose is split on blank lines and each
//! paragraph candidate is classified exactly once, as a whole:
//!
//! | Candidate starts with / matches | Block |
//! |---------------------------------|-------|
//! | `# `                            | [`Block::Heading`] level 1 |
//! | `## `                           | [`Block::Heading`] level 2 |
//! | `### `                          | [`Block::Heading`] level 3 |
//! | any line `^\s*[-*]\s+`          | [`Block::List`] |
//! | anything else                   | [`Block::Paragraph`] |
//!
//! There is no inline markup: `**bold**`, backtick spans, and links inside a
//! paragraph are carried through as literal text. `####` and deeper are
//! paragraphs with their `#` prefix intact. A line without a bullet marker
//! that shares a paragraph with bullet lines becomes a list item verbatim.
//!
//! The transform is total: any string, including one with an unclosed
//! fence, yields a block sequence.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Delimiter that opens and closes a code block.
pub const FENCE: &str = "```";

static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+").expect("list pattern is valid"));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").expect("bullet pattern is valid"));

/// Recognised heading depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level, 1 through 3.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Self::H1 => "# ",
            Self::H2 => "## ",
            Self::H3 => "### ",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// One renderable unit of a topic body, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    List { items: Vec<String> },
    Paragraph { text: String },
    Code { language: String, code: String },
}

impl Block {
    fn heading(level: HeadingLevel, text: &str) -> Self {
        Self::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> Self {
        Self::Paragraph {
            text: text.to_string(),
        }
    }

    /// Returns true for [`Block::Code`].
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }
}

/// Transform a topic's raw body into blocks.
pub fn transform(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (index, segment) in content.split(FENCE).enumerate() {
        if index % 2 == 0 {
            prose_blocks(segment, &mut blocks);
        } else {
            blocks.push(code_block(segment));
        }
    }
    blocks
}

/// Number of fence delimiters in `content`.
pub fn fence_count(content: &str) -> usize {
    content.matches(FENCE).count()
}

fn code_block(segment: &str) -> Block {
    let (language, body) = segment.split_once('\n').unwrap_or((segment, ""));
    // The newline before the closing fence terminates the last code line.
    let code = body.strip_suffix('\n').unwrap_or(body);
    Block::Code {
        language: language.trim().to_string(),
        code: code.to_string(),
    }
}

fn prose_blocks(segment: &str, blocks: &mut Vec<Block>) {
    for candidate in segment.split("\n\n") {
        let candidate = candidate.trim_matches(['\n', '\r']);
        if candidate.trim().is_empty() {
            continue;
        }
        blocks.push(classify(candidate));
    }
}

fn classify(candidate: &str) -> Block {
    for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
        if let Some(text) = candidate.strip_prefix(level.marker()) {
            return Block::heading(level, text);
        }
    }

    if LIST_LINE.is_match(candidate) {
        let items = candidate
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| BULLET_MARKER.replace(line, "").into_owned())
            .collect();
        return Block::List { items };
    }

    Block::paragraph(candidate)
}
