//! # sitegen
//!
//! Convert a constrained Markdown dialect to HTML.
//!
//! The pipeline runs in one direction: raw Markdown is segmented into blocks,
//! each block is classified and converted into an [`HtmlNode`] subtree (inline
//! text goes through the span tokenizer first), and the subtrees are wrapped in
//! a top-level `div` that renders to an HTML string.
//!
//! ## Design
//!
//! - **Pure conversions**: every step maps its input to a new value, so pages
//!   can be converted from any number of threads without coordination.
//! - **Atomic failure**: a malformed span aborts the whole document by
//!   default. [`SpanErrorPolicy::Literal`] keeps malformed spans as plain text
//!   instead.
//! - **No escaping**: text and attribute values are emitted verbatim.
//!
//! ## Example
//!
//! ```rust
//! use sitegen::Converter;
//!
//! let converter = Converter::new();
//! let html = converter.to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```
//!
//! ## Example (page template)
//!
//! ```rust
//! use sitegen::Converter;
//!
//! let template = "<title>{{ Title }}</title><body>{{ Content }}</body>";
//! let page = Converter::new().render_page("# Home\n\nWelcome", template).unwrap();
//! assert_eq!(
//!     page,
//!     "<title>Home</title><body><div><h1>Home</h1><p>Welcome</p></div></body>"
//! );
//! ```

pub mod blocks;
mod convert;
pub mod inline;
mod options;
pub mod page;
mod service;
pub mod text;
mod title;
mod utilities;

use std::path::PathBuf;

pub use blocks::{classify_block, segment_blocks, BlockKind};
pub use convert::{convert_block, convert_document};
pub use inline::{text_to_textnodes, text_to_textnodes_with};
pub use options::{ConvertOptions, SpanErrorPolicy};
pub use service::Converter;
pub use sitegen_core::{Attributes, HtmlNode, NodeError};
pub use text::{TextKind, TextNode};
pub use title::extract_title;

/// Error type for sitegen operations
#[derive(Debug, thiserror::Error)]
pub enum SitegenError {
    #[error(transparent)]
    Construction(#[from] NodeError),

    #[error("Invalid Markdown syntax: unmatched delimiter '{delimiter}' in text '{text}'")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("No title found: expected a line starting with '# '")]
    MissingTitle,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SitegenError>;
