//! HTML serialization
//!
//! Converts an [`HtmlNode`] tree into HTML text. Text content and attribute
//! values are written as-is, without escaping.

use std::fmt;

use crate::node::{Attributes, HtmlNode};

impl HtmlNode {
    /// Serialize this node and its descendants to an HTML string
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(256);
        render_node(self, &mut output);
        output
    }

    /// Serialize the attributes as ` name="value"` pairs in insertion order.
    ///
    /// Returns an empty string when there are no attributes.
    pub fn attributes_to_html(&self) -> String {
        let mut output = String::new();
        render_attributes(self.attributes(), &mut output);
        output
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_node(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => out.push_str(value),

        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            open_tag(tag, attributes, out);
            for child in children {
                render_node(child, out);
            }
            close_tag(tag, out);
        }
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
