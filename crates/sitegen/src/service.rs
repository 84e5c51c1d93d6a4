//! Converter - the main entry point for Markdown to HTML conversion.

use sitegen_core::HtmlNode;

use crate::convert::convert_document;
use crate::options::ConvertOptions;
use crate::page;
use crate::Result;

/// Converts Markdown documents with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown to an HTML tree
    pub fn convert(&self, markdown: &str) -> Result<HtmlNode> {
        convert_document(markdown, &self.options)
    }

    /// Convert Markdown straight to an HTML string
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        Ok(self.convert(markdown)?.render())
    }

    /// Convert Markdown and place it, with its title, into `template`
    pub fn render_page(&self, markdown: &str, template: &str) -> Result<String> {
        page::render_page(markdown, template, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}
