//! Convert Markdown blocks into an HTML tree
//!
//! Each block kind has one conversion routine. Inline content goes through the
//! span tokenizer and each span becomes a leaf of the block's element.

use log::{debug, trace};
use sitegen_core::HtmlNode;

use crate::blocks::{classify_block, segment_blocks, BlockKind};
use crate::inline::text_to_textnodes_with;
use crate::options::ConvertOptions;
use crate::utilities::{
    strip_bullet_marker, strip_number_marker, strip_one_whitespace, strip_quote_marker,
};
use crate::Result;

/// Convert a whole Markdown document into a `div` wrapping one node per block.
///
/// Fails without a partial tree if any block fails.
pub fn convert_document(markdown: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    let blocks = segment_blocks(markdown);
    trace!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| convert_block(block, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Classify a single block and convert it
pub fn convert_block(block: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    let kind = classify_block(block);
    debug!("converting {:?} block", kind);

    match kind {
        BlockKind::Heading => heading_to_html(block, options),
        BlockKind::Code => Ok(code_to_html(block, options)),
        BlockKind::Quote => Ok(quote_to_html(block)),
        BlockKind::UnorderedList => list_to_html(block, "ul", strip_bullet_marker, options),
        BlockKind::OrderedList => list_to_html(block, "ol", strip_number_marker, options),
        BlockKind::Paragraph => paragraph_to_html(block, options),
    }
}

fn heading_to_html(block: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    let block = block.trim();
    let level = block.chars().take_while(|&c| c == '#').count();
    let content = strip_one_whitespace(&block[level..]);

    Ok(HtmlNode::parent(
        &format!("h{}", level),
        inline_children(content, options)?,
    ))
}

fn code_to_html(block: &str, options: &ConvertOptions) -> HtmlNode {
    let lines: Vec<&str> = block.trim().split('\n').collect();
    let body = match lines.len() {
        0..=2 => &[][..],
        n => &lines[1..n - 1],
    };

    let code = body
        .iter()
        .filter(|line| !line.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let mut node = HtmlNode::leaf("code", &code);
    if options.code_language_class {
        let language = lines
            .first()
            .map(|fence| fence.trim_start_matches('`').trim())
            .unwrap_or("");
        if !language.is_empty() {
            node = node.with_attribute("class", &format!("language-{}", language));
        }
    }

    HtmlNode::parent("pre", vec![node])
}

fn quote_to_html(block: &str) -> HtmlNode {
    let content = block
        .trim()
        .split('\n')
        .map(strip_quote_marker)
        .collect::<Vec<_>>()
        .join("\n");

    HtmlNode::leaf("blockquote", &content)
}

fn list_to_html(
    block: &str,
    tag: &str,
    strip_marker: fn(&str) -> &str,
    options: &ConvertOptions,
) -> Result<HtmlNode> {
    let items = block
        .trim()
        .split('\n')
        .map(|line| -> Result<HtmlNode> {
            let children = inline_children(strip_marker(line), options)?;
            Ok(HtmlNode::parent("li", children))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent(tag, items))
}

fn paragraph_to_html(block: &str, options: &ConvertOptions) -> Result<HtmlNode> {
    let text = block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(HtmlNode::parent("p", inline_children(&text, options)?))
}

fn inline_children(text: &str, options: &ConvertOptions) -> Result<Vec<HtmlNode>> {
    Ok(text_to_textnodes_with(text, options.span_errors)?
        .iter()
        .map(|node| node.to_html_node())
        .collect())
}
