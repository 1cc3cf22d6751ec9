use clap::ValueEnum;
use colored::*;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formatter::Block;

static STRONG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<strong>(.*?)</strong>").unwrap());
static EM_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<em>(.*?)</em>").unwrap());
static CODE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<code>(.*?)</code>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?(?:strong|em|code)>").unwrap());

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Presentation knobs shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// `N` in `<hN>` for headings. Expected in `1..=6`.
    pub heading_level: u8,
    /// Glyph printed before each list item in terminal output.
    pub bullet: String,
    /// Style terminal output. When off, inline tags are stripped.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            heading_level: 3,
            bullet: "•".to_string(),
            color: true,
        }
    }
}

pub fn render(blocks: &[Block], format: OutputFormat, opts: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(terminal(blocks, opts)),
        OutputFormat::Html => Ok(html(blocks, opts)),
        OutputFormat::Json => json(blocks),
    }
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

/// Heading → emphasized header, List → `<ul>`, Paragraph → `<p>` holding the
/// already-substituted markup. Text is inserted as is, without escaping.
pub fn html(blocks: &[Block], opts: &RenderOptions) -> String {
    let level = opts.heading_level;
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { text } => {
                lines.push(format!("<h{level}><strong>{text}</strong></h{level}>"));
            }
            Block::List { items } => {
                lines.push("<ul>".to_string());
                lines.extend(items.iter().map(|item| format!("<li>{item}</li>")));
                lines.push("</ul>".to_string());
            }
            Block::Paragraph { markup } => lines.push(format!("<p>{markup}</p>")),
        }
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

pub fn terminal(blocks: &[Block], opts: &RenderOptions) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Heading { text } => {
                if opts.color {
                    text.bold().underline().to_string()
                } else {
                    text.clone()
                }
            }
            Block::List { items } => items
                .iter()
                .map(|item| format!("  {} {}", opts.bullet, item))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Paragraph { markup } => style_inline(markup, opts.color),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Turn inline tags into terminal styles, or drop them when `color` is off.
pub fn style_inline(markup: &str, color: bool) -> String {
    if !color {
        return ANY_TAG.replace_all(markup, "").into_owned();
    }
    let s = STRONG_TAG.replace_all(markup, |c: &Captures| c[1].bold().to_string());
    let s = EM_TAG.replace_all(&s, |c: &Captures| c[1].italic().to_string());
    CODE_TAG
        .replace_all(&s, |c: &Captures| c[1].bright_yellow().to_string())
        .into_owned()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}
