//! Block segmentation and classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utilities::{clean_lines, normalize_line_endings};

static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}[ \t]+.+$").unwrap());

static CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_+#-]*\n(?:[\s\S]*\n)?```$").unwrap());

static BULLET_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s+.+").unwrap());

static NUMBERED_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+.+").unwrap());

/// Block types, in the order they are tested by [`classify_block`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into cleaned, non-empty blocks.
///
/// Blocks are separated by blank lines. Inside a block every line is trimmed
/// and empty lines are removed.
pub fn segment_blocks(markdown: &str) -> Vec<String> {
    normalize_line_endings(markdown)
        .split("\n\n")
        .filter_map(clean_lines)
        .collect()
}

/// Determine the kind of a block. Falls back to [`BlockKind::Paragraph`].
pub fn classify_block(block: &str) -> BlockKind {
    if is_heading(block) {
        BlockKind::Heading
    } else if is_code(block) {
        BlockKind::Code
    } else if is_quote(block) {
        BlockKind::Quote
    } else if is_unordered_list(block) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

fn is_heading(block: &str) -> bool {
    HEADING_REGEX.is_match(block.trim())
}

fn is_code(block: &str) -> bool {
    CODE_REGEX.is_match(block.trim())
}

fn is_quote(block: &str) -> bool {
    every_line(block, |line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    every_line(block, |line| BULLET_ITEM_REGEX.is_match(line))
}

fn is_ordered_list(block: &str) -> bool {
    let mut previous: Option<u64> = None;

    every_line(block, |line| {
        let Some(number) = NUMBERED_ITEM_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
        else {
            return false;
        };

        let in_sequence = match previous {
            None => true,
            Some(prev) => prev.checked_add(1) == Some(number),
        };
        previous = Some(number);
        in_sequence
    })
}

/// True when the block has at least one line and every trimmed line is
/// non-empty and satisfies `predicate`
fn every_line(block: &str, mut predicate: impl FnMut(&str) -> bool) -> bool {
    let block = block.trim();
    if block.is_empty() {
        return false;
    }

    block.split('\n').map(str::trim).all(|line| !line.is_empty() && predicate(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_segment_blocks() {
        let md = "This is **bolded** paragraph\n\nThis is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line\n\n- This is a list\n- with items";
        assert_eq!(
            segment_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_segment_blocks_collapses_extra_blank_lines() {
        let md = "\n\n  first  \n\n\n\n\nsecond\n   \n  third line\n\n";
        assert_eq!(segment_blocks(md), vec!["first", "second\nthird line"]);
    }

    #[test]
    fn test_segment_blocks_crlf() {
        assert_eq!(segment_blocks("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_segment_blocks_empty() {
        assert!(segment_blocks("").is_empty());
        assert!(segment_blocks(" \n\n \t \n").is_empty());
    }

    #[test]
    fn test_segment_blocks_idempotent() {
        let md = "  # Title \n\n\n para one\n  para two \n\n- a\n- b\n";
        let blocks = segment_blocks(md);
        assert_eq!(segment_blocks(&blocks.join("\n\n")), blocks);
    }

    #[rstest]
    #[case("# Heading 1")]
    #[case("## Heading 2")]
    #[case("### Heading 3")]
    #[case("#### Heading 4")]
    #[case("##### Heading 5")]
    #[case("###### Heading 6")]
    #[case("  # Padded heading  ")]
    #[case("#\tTabbed heading")]
    fn test_heading_detection(#[case] block: &str) {
        assert_eq!(classify_block(block), BlockKind::Heading);
    }

    #[rstest]
    #[case("```\nprint('Hello')\n```")]
    #[case("```python\ndef test():\n    pass\n```")]
    #[case("\n   ```\nsome code\n```   \n")]
    #[case("```\n```")]
    fn test_code_block_detection(#[case] block: &str) {
        assert_eq!(classify_block(block), BlockKind::Code);
    }

    #[rstest]
    #[case("> This is a quote.")]
    #[case("> Line 1\n> Line 2\n> > Nested maybe (still quote)\n>")]
    #[case(">no space")]
    fn test_quote_block_detection(#[case] block: &str) {
        assert_eq!(classify_block(block), BlockKind::Quote);
    }

    #[rstest]
    #[case("* Item 1\n* Item 2")]
    #[case("- Item A\n- Item B")]
    #[case("+ Item X\n+ Item Y")]
    #[case("* Star\n- Dash\n+ Plus")]
    fn test_unordered_list_detection(#[case] block: &str) {
        assert_eq!(classify_block(block), BlockKind::UnorderedList);
    }

    #[rstest]
    #[case("1. Item 1\n2. Item 2\n3. Item 3")]
    #[case("5. Item 5\n6. Item 6")]
    #[case("0. zero\n1. one")]
    #[case("18446744073709551615. last")]
    fn test_ordered_list_detection(#[case] block: &str) {
        assert_eq!(classify_block(block), BlockKind::OrderedList);
    }

    #[rstest]
    #[case::too_many_hashes("####### Heading 7")]
    #[case::no_space_after_hash("#Heading 1")]
    #[case::multi_line_heading("# Heading\nmore")]
    #[case::hash_newline("#\nfoo")]
    #[case::unclosed_fence("```\ncode")]
    #[case::unopened_fence("code\n```")]
    #[case::quote_missing_marker("> Line 1\nLine 2")]
    #[case::quote_blank_line("> line1\n\n> line3")]
    #[case::list_missing_marker("* Item 1\nItem 2")]
    #[case::list_no_space("*Item 1\n* Item 2")]
    #[case::list_blank_line("- a\n\n- b")]
    #[case::ordered_skip("1. Item 1\n3. Item 3")]
    #[case::ordered_repeat("1. Item 1\n1. Item 1")]
    #[case::ordered_missing_marker("1. Item 1\nItem 2")]
    #[case::ordered_wrong_format("1 Item 1\n2. Item 2")]
    #[case::ordered_descending("2. b\n1. a")]
    #[case::ordered_overflow("18446744073709551615. a\n5. b")]
    #[case::ordered_overflow_repeat("18446744073709551615. a\n18446744073709551615. b")]
    #[case::plain("This is just a simple paragraph.")]
    #[case::two_lines("Line one.\nLine two.")]
    #[case::almost_list("-Not a list")]
    #[case::almost_quote(">Not really a quote\nJust text")]
    #[case::empty("")]
    #[case::whitespace("   \n   \t ")]
    fn test_paragraph_detection(#[case] block: &str) {
        assert_eq!(classify_block(block), BlockKind::Paragraph);
    }

    #[test]
    fn test_priority_heading_before_paragraph_text() {
        assert_eq!(classify_block("# - not a list"), BlockKind::Heading);
    }

    #[test]
    fn test_priority_code_before_quote() {
        assert_eq!(classify_block("```\n> quoted\n```"), BlockKind::Code);
    }

    #[test]
    fn test_priority_quote_before_list() {
        assert_eq!(classify_block("> - item\n> - item"), BlockKind::Quote);
    }
}
