//! Turning a language-model reply into a list of findings.
//!
//! The model is asked for a bare JSON array of strings but often wraps it in
//! a code fence or answers with a bulleted list instead; both are accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

static ITEM_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[•\-*]|\d+\.)\s+").unwrap());
static ITEM_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-*\d.]+\s+").unwrap());

/// Parse a model reply into findings. Never fails; an unstructured reply
/// comes back as a single finding, and a blank one as none.
pub fn parse_model_reply(reply: &str) -> Vec<String> {
    let body = strip_code_fence(reply);
    match serde_json::from_str::<Vec<String>>(body) {
        Ok(items) => {
            info!(count = items.len(), "parsed findings from model reply");
            items
        }
        Err(e) => {
            warn!("model reply is not a JSON array ({e}), falling back to line parsing");
            fallback_items(reply)
        }
    }
}

/// Strip a leading ```` ```json ```` or ```` ``` ```` and a trailing ```` ``` ````.
pub fn strip_code_fence(reply: &str) -> &str {
    let mut s = reply.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

fn fallback_items(reply: &str) -> Vec<String> {
    let mut items: Vec<String> = reply
        .lines()
        .map(str::trim)
        .filter(|line| ITEM_LINE.is_match(line))
        .map(|line| ITEM_PREFIX.replace(line, "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    let trimmed = reply.trim();
    if items.is_empty() && !trimmed.is_empty() {
        items.push(trimmed.to_string());
    }
    items
}
