//! Inline span tokenizer.
//!
//! Text is split into [`TextNode`]s by a fixed sequence of flat passes: bold,
//! italic, code, image, link. Each pass only looks at the plain-text spans left
//! by the previous one, so delimiters never nest.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::SpanErrorPolicy;
use crate::text::{TextKind, TextNode};
use crate::{Result, SitegenError};

pub const BOLD_DELIMITER: &str = "**";
pub const ITALIC_DELIMITER: &str = "_";
pub const CODE_DELIMITER: &str = "`";

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// No lookbehind in `regex`: capture the optional `!` and drop image matches.
static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A `[text](url)` style match inside a larger string
struct SpanMatch<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

/// Tokenize a line or paragraph, failing on unmatched delimiters
pub fn text_to_textnodes(text: &str) -> Result<Vec<TextNode>> {
    text_to_textnodes_with(text, SpanErrorPolicy::Abort)
}

/// Tokenize a line or paragraph with an explicit recovery policy
pub fn text_to_textnodes_with(text: &str, policy: SpanErrorPolicy) -> Result<Vec<TextNode>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let nodes = vec![TextNode::plain(text)];
    let nodes = split_delimited(nodes, BOLD_DELIMITER, &TextKind::Bold, policy)?;
    let nodes = split_delimited(nodes, ITALIC_DELIMITER, &TextKind::Italic, policy)?;
    let nodes = split_delimited(nodes, CODE_DELIMITER, &TextKind::Code, policy)?;
    let nodes = split_nodes_image(nodes);
    Ok(split_nodes_link(nodes))
}

/// Split plain-text spans on `delimiter`, turning every odd segment into `kind`.
///
/// Non-plain spans pass through untouched. Empty segments are dropped.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextNode>> {
    split_delimited(nodes, delimiter, &kind, SpanErrorPolicy::Abort)
}

fn split_delimited(
    nodes: Vec<TextNode>,
    delimiter: &str,
    kind: &TextKind,
    policy: SpanErrorPolicy,
) -> Result<Vec<TextNode>> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            result.push(node);
            continue;
        }

        match split_text(&node.text, delimiter, kind) {
            Ok(parts) => result.extend(parts),
            Err(err) => match policy {
                SpanErrorPolicy::Abort => return Err(err),
                SpanErrorPolicy::Literal => {
                    warn!("keeping unmatched '{}' as plain text: {:?}", delimiter, node.text);
                    result.push(node);
                }
            },
        }
    }

    Ok(result)
}

fn split_text(text: &str, delimiter: &str, kind: &TextKind) -> Result<Vec<TextNode>> {
    let parts: Vec<&str> = text.split(delimiter).collect();

    if parts.len() == 1 {
        return Ok(if text.is_empty() {
            Vec::new()
        } else {
            vec![TextNode::plain(text)]
        });
    }

    // n delimiters produce n + 1 parts, so an even part count means one is unclosed
    if parts.len() % 2 == 0 {
        return Err(SitegenError::UnmatchedDelimiter {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        });
    }

    Ok(parts
        .into_iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 0 {
                TextNode::plain(part)
            } else {
                TextNode::new(part, kind.clone())
            }
        })
        .collect())
}

/// All `![alt](url)` occurrences as `(alt, url)` pairs, left to right
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    image_matches(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// All `[text](url)` occurrences not preceded by `!`, left to right
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    link_matches(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Replace image syntax in plain-text spans with image spans
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_matches(nodes, image_matches, TextNode::image)
}

/// Replace link syntax in plain-text spans with link spans
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_matches(nodes, link_matches, TextNode::link)
}

fn image_matches(text: &str) -> Vec<SpanMatch<'_>> {
    IMAGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(SpanMatch {
                start: whole.start(),
                end: whole.end(),
                text: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn link_matches(text: &str) -> Vec<SpanMatch<'_>> {
    LINK_REGEX
        .captures_iter(text)
        .filter(|caps| caps.get(1).is_some_and(|bang| bang.as_str().is_empty()))
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(SpanMatch {
                start: whole.start(),
                end: whole.end(),
                text: caps.get(2)?.as_str(),
                url: caps.get(3)?.as_str(),
            })
        })
        .collect()
}

fn split_matches(
    nodes: Vec<TextNode>,
    find: fn(&str) -> Vec<SpanMatch<'_>>,
    make: fn(&str, &str) -> TextNode,
) -> Vec<TextNode> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            result.push(node);
            continue;
        }

        let matches = find(&node.text);
        if matches.is_empty() {
            result.push(node);
            continue;
        }

        let mut last = 0;
        for m in &matches {
            let before = &node.text[last..m.start];
            if !before.is_empty() {
                result.push(TextNode::plain(before));
            }
            result.push(make(m.text, m.url));
            last = m.end;
        }

        let rest = &node.text[last..];
        if !rest.is_empty() {
            result.push(TextNode::plain(rest));
        }
    }

    result
}
