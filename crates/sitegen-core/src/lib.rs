//! sitegen-core - HTML node tree and serialization
//!
//! This crate provides the HTML tree produced by the `sitegen` Markdown
//! pipeline and the serializer that turns it into HTML text.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──blocks──▶ ┌───────────┐
//!                      │           │
//!                      │ HtmlNode  │ ──render──▶ HTML String
//! TextNodes ──leaves──▶│   tree    │
//!                      └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sitegen_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(tree.render(), "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode};

/// Error raised when a node is assembled from an invalid combination of parts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Construction error: parent node must have a tag")]
    MissingTag,

    #[error("Construction error: parent node must have children")]
    MissingChildren,

    #[error("Construction error: leaf node must have a value")]
    MissingValue,

    #[error("Construction error: node cannot hold both a value and children")]
    AmbiguousPayload,
}

pub type Result<T> = std::result::Result<T, NodeError>;
