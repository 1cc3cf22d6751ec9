use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters that mark a list item line.
pub const BULLETS: &[char] = &['•', '-'];

/// The two-character bold marker.
pub const BOLD_MARKER: &str = "**";

// A newline, any run of whitespace (including further blank lines), a newline.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// Closes at the nearest following `**`. The first content character is not a
// `*` so that `***x***` opens on the inner pair.
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n][^\n]*?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+?)`").unwrap());

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// One render-ready unit of a formatted advice message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// A paragraph wrapped entirely in bold markers, markers removed.
    Heading { text: String },
    /// Bullet lines with their markers stripped. Items carry no inline markup.
    List { items: Vec<String> },
    /// Plain paragraph with `<strong>`, `<em>` and `<code>` spans substituted in.
    Paragraph { markup: String },
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paragraph(markup: impl Into<String>) -> Self {
        Block::Paragraph {
            markup: markup.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::List { .. } => "list",
            Block::Paragraph { .. } => "paragraph",
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Convert an advice message into blocks, one per non-blank paragraph, in
/// source order.
///
/// Never fails: stray or unpaired markers are kept as literal text.
pub fn format(message: &str) -> Vec<Block> {
    paragraphs(message).map(classify).collect()
}

/// Split on blank lines, dropping whitespace-only paragraphs.
pub fn paragraphs(message: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK
        .split(message)
        .filter(|p| !p.trim().is_empty())
}

/// Classify a single paragraph. Heading wins over list, list wins over
/// paragraph.
pub fn classify(paragraph: &str) -> Block {
    let trimmed = paragraph.trim();

    if is_heading(trimmed) {
        return Block::heading(trimmed.replace(BOLD_MARKER, "").trim());
    }

    if trimmed.contains(BULLETS) {
        return Block::List {
            items: list_items(trimmed),
        };
    }

    Block::paragraph(inline_markup(trimmed))
}

fn is_heading(trimmed: &str) -> bool {
    trimmed.starts_with(BOLD_MARKER) && trimmed.ends_with(BOLD_MARKER)
}

fn list_items(paragraph: &str) -> Vec<String> {
    paragraph
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_bullet(line).to_string())
        .collect()
}

/// Remove one leading bullet marker and at most one whitespace character
/// after it. Lines without a marker are returned unchanged.
pub fn strip_bullet(line: &str) -> &str {
    let Some(rest) = line.strip_prefix(BULLETS) else {
        return line;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

/// Substitute strong, emphasis and code spans, in that order.
///
/// Each pass is non-overlapping, left to right and non-greedy: an opening
/// marker pairs with the nearest following closing marker. Spans are never
/// empty and never cross a line break, so an unpaired marker is never
/// consumed. Single stars inside a strong span are paired by the emphasis
/// pass afterwards.
pub fn inline_markup(text: &str) -> String {
    let strong = STRONG.replace_all(text, "<strong>$1</strong>");
    let emphasis = EMPHASIS.replace_all(&strong, "<em>$1</em>");
    CODE.replace_all(&emphasis, "<code>$1</code>").into_owned()
}
