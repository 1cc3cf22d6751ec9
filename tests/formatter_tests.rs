//! Tests for the formatter public API — paragraph classification, inline
//! markup, and properties that must hold for any message.

use antidoxx::formatter::{inline_markup, paragraphs};
use antidoxx::{format, Block};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Documented examples
// ---------------------------------------------------------------------------

#[test]
fn test_empty_message() {
    assert_eq!(format(""), Vec::<Block>::new());
}

#[test]
fn test_title_only() {
    assert_eq!(format("**Title**"), vec![Block::heading("Title")]);
}

#[test]
fn test_two_item_list() {
    assert_eq!(format("- one\n- two"), vec![Block::list(["one", "two"])]);
}

#[test]
fn test_all_inline_spans() {
    let blocks = format("Some *italic* and **bold** and `code`.");
    assert_eq!(
        blocks,
        vec![Block::paragraph(
            "Some <em>italic</em> and <strong>bold</strong> and <code>code</code>."
        )]
    );
}

#[test]
fn test_heading_body_list() {
    assert_eq!(
        format("**H**\n\nBody text.\n\n- a\n- b"),
        vec![
            Block::heading("H"),
            Block::paragraph("Body text."),
            Block::list(["a", "b"]),
        ]
    );
}

// ---------------------------------------------------------------------------
// Realistic advice replies
// ---------------------------------------------------------------------------

#[test]
fn test_detected_reply() {
    let msg = "**SENSITIVE INFORMATION DETECTED**\n\n\
               The following sensitive information was found in your text input:\n\n\
               - Line 1: Email Address detected -> 'a@b.io'\n\
               - A home address\n";
    let blocks = format(msg);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], Block::heading("SENSITIVE INFORMATION DETECTED"));
    assert!(matches!(&blocks[1], Block::Paragraph { .. }));
    assert_eq!(
        blocks[2],
        Block::list(["Line 1: Email Address detected -> 'a@b.io'", "A home address"])
    );
}

#[test]
fn test_model_style_reply_with_bullets_and_emphasis() {
    let msg = "**Summary**\n\n\
               Your text contains *two* items; rotate the `API_KEY` soon.\n\n\
               • Phone number\n\
               • Street address";
    assert_eq!(
        format(msg),
        vec![
            Block::heading("Summary"),
            Block::paragraph(
                "Your text contains <em>two</em> items; rotate the <code>API_KEY</code> soon."
            ),
            Block::list(["Phone number", "Street address"]),
        ]
    );
}

#[test]
fn test_paragraph_with_hyphen_is_list() {
    // Any bullet character anywhere makes a list, including hyphenated words.
    assert_eq!(
        format("Use a e-mail alias."),
        vec![Block::list(["Use a e-mail alias."])]
    );
}

#[test]
fn test_unclosed_bold_is_literal() {
    assert_eq!(
        format("Beware **this is not closed"),
        vec![Block::paragraph("Beware **this is not closed")]
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn marked_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z *`•\\-\n\t]{0,120}").unwrap()
}

proptest! {
    #[test]
    fn prop_format_is_deterministic(msg in any::<String>()) {
        prop_assert_eq!(format(&msg), format(&msg));
    }

    #[test]
    fn prop_one_block_per_paragraph(msg in marked_text()) {
        prop_assert_eq!(format(&msg).len(), paragraphs(&msg).count());
    }

    #[test]
    fn prop_paragraph_count_matches_construction(
        parts in proptest::collection::vec(
            ("[a-z][a-z *\\-]{0,20}", "\n[ \t]{0,3}\n\n?"),
            0..8,
        )
    ) {
        let msg: String = parts.iter().map(|(chunk, sep)| format!("{chunk}{sep}")).collect();
        prop_assert_eq!(format(&msg).len(), parts.len());
    }

    #[test]
    fn prop_bold_pair_opens_strong(inner in "[a-z ][a-z *`]{0,20}") {
        prop_assume!(!inner.contains("**"));
        let markup = inline_markup(&format!("**{inner}**"));
        prop_assert!(markup.starts_with("<strong>"), "{}", markup);
    }

    #[test]
    fn prop_blank_messages_have_no_blocks(msg in "[ \t\r\n]{0,40}") {
        prop_assert!(format(&msg).is_empty());
    }

    #[test]
    fn prop_headings_have_no_bold_markers(msg in marked_text()) {
        for block in format(&msg) {
            if let Block::Heading { text } = block {
                prop_assert!(!text.contains("**"));
            }
        }
    }

    #[test]
    fn prop_list_items_are_non_empty_lines(msg in marked_text()) {
        for block in format(&msg) {
            if let Block::List { items } = block {
                prop_assert!(!items.is_empty());
                for item in items {
                    prop_assert!(!item.contains('\n'));
                }
            }
        }
    }

    #[test]
    fn prop_plain_text_is_unchanged(text in "[A-Za-z0-9 .,;:!?]{0,80}") {
        prop_assert_eq!(inline_markup(&text), text);
    }
}
