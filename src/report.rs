use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::detector::Finding;

/// What was analyzed. Worded into the advice message.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    #[default]
    TextInput,
    TextFile,
    /// Text extracted from an image.
    ImageText,
    /// An image analyzed without extracted text.
    Image,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::TextInput => write!(f, "text input"),
            ContentKind::TextFile => write!(f, "text file"),
            ContentKind::ImageText => write!(f, "image text"),
            ContentKind::Image => write!(f, "image"),
        }
    }
}

/// Detector hits first, then model findings.
pub fn combine(local: &[Finding], model: &[String]) -> Vec<String> {
    local
        .iter()
        .map(ToString::to_string)
        .chain(model.iter().cloned())
        .collect()
}

/// Build the advice message for `findings`.
///
/// The output is shaped for `formatter::format`: a bold heading paragraph,
/// an intro paragraph, then (when anything was found) a `- ` bullet list.
pub fn compose(findings: &[String], kind: ContentKind) -> String {
    let mut out = String::new();
    if findings.is_empty() {
        out.push_str("**No sensitive information detected**\n\n");
        match kind {
            ContentKind::Image => out.push_str("The image appears"),
            _ => out.push_str(&format!("Your {kind} appears")),
        }
        out.push_str(" to be clear of personally identifiable information.");
        return out;
    }

    match kind {
        ContentKind::Image => {
            out.push_str("**SENSITIVE INFORMATION DETECTED IN IMAGE**\n\n");
            out.push_str("The following sensitive information was found in the image:\n\n");
        }
        _ => {
            out.push_str("**SENSITIVE INFORMATION DETECTED**\n\n");
            out.push_str(&format!(
                "The following sensitive information was found in your {kind}:\n\n"
            ));
        }
    }
    for item in findings {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::SensitiveKind;

    #[test]
    fn test_compose_with_findings() {
        let msg = compose(&["Email".to_string(), "Phone".to_string()], ContentKind::TextFile);
        assert_eq!(
            msg,
            "**SENSITIVE INFORMATION DETECTED**\n\n\
             The following sensitive information was found in your text file:\n\n\
             - Email\n- Phone\n"
        );
    }

    #[test]
    fn test_compose_clear() {
        assert_eq!(
            compose(&[], ContentKind::TextInput),
            "**No sensitive information detected**\n\n\
             Your text input appears to be clear of personally identifiable information."
        );
    }

    #[test]
    fn test_compose_image_with_findings() {
        let msg = compose(&["A face".to_string()], ContentKind::Image);
        assert!(msg.starts_with("**SENSITIVE INFORMATION DETECTED IN IMAGE**\n\n"));
        assert!(msg.contains("found in the image:"));
        assert!(msg.ends_with("- A face\n"));
    }

    #[test]
    fn test_compose_image_clear() {
        assert!(compose(&[], ContentKind::Image)
            .ends_with("The image appears to be clear of personally identifiable information."));
    }

    #[test]
    fn test_content_kind_display() {
        assert_eq!(ContentKind::TextInput.to_string(), "text input");
        assert_eq!(ContentKind::TextFile.to_string(), "text file");
        assert_eq!(ContentKind::ImageText.to_string(), "image text");
        assert_eq!(ContentKind::Image.to_string(), "image");
    }

    #[test]
    fn test_combine_local_first() {
        let local = vec![Finding {
            line: 1,
            kind: SensitiveKind::Email,
            matched: "a@b.io".to_string(),
        }];
        let model = vec!["A full name".to_string()];
        assert_eq!(
            combine(&local, &model),
            vec![
                "Line 1: Email Address detected -> 'a@b.io'".to_string(),
                "A full name".to_string(),
            ]
        );
    }
}
