//! Inline text spans produced by the tokenizer.

use sitegen_core::HtmlNode;

/// Formatting kind of an inline span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKind {
    /// Unformatted text
    Text,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link { url: String },
    /// `![alt](url)`, the span text holds the alt text
    Image { url: String },
}

/// A run of inline text carrying one formatting kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub kind: TextKind,
}

impl TextNode {
    pub fn new(text: &str, kind: TextKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }

    /// Create a plain text span
    pub fn plain(text: &str) -> Self {
        Self::new(text, TextKind::Text)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self::new(
            text,
            TextKind::Link {
                url: url.to_string(),
            },
        )
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self::new(
            alt,
            TextKind::Image {
                url: url.to_string(),
            },
        )
    }

    /// Check if this is an unformatted span
    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Text
    }

    /// Target URL of a link or image span
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TextKind::Link { url } | TextKind::Image { url } => Some(url.as_str()),
            _ => None,
        }
    }

    /// Convert this span into an HTML leaf
    pub fn to_html_node(&self) -> HtmlNode {
        match &self.kind {
            TextKind::Text => HtmlNode::text(&self.text),
            TextKind::Bold => HtmlNode::leaf("b", &self.text),
            TextKind::Italic => HtmlNode::leaf("i", &self.text),
            TextKind::Code => HtmlNode::leaf("code", &self.text),
            TextKind::Link { url } => HtmlNode::leaf("a", &self.text).with_attribute("href", url),
            TextKind::Image { url } => HtmlNode::leaf("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", &self.text),
        }
    }
}
