//! Configuration options for Markdown conversion

/// What to do with a plain-text segment holding an odd number of a delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanErrorPolicy {
    /// Fail the whole conversion with [`crate::SitegenError::UnmatchedDelimiter`]
    #[default]
    Abort,
    /// Keep the malformed segment as plain text and continue
    Literal,
}

/// Options for Markdown conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Recovery policy for unmatched `**`, `_` and `` ` `` delimiters
    pub span_errors: SpanErrorPolicy,

    /// Add `class="language-<token>"` to the `code` element of a fenced
    /// block whose opening fence names a language
    pub code_language_class: bool,
}
