//! HTML node tree.
//!
//! A node is either a leaf carrying text content or a parent carrying ordered
//! children. The two payload shapes are separate variants, so a built node can
//! never hold both or neither. Trees are assembled bottom-up and are not
//! modified after construction.

use indexmap::IndexMap;

use crate::{NodeError, Result};

/// Attributes keyed by name, serialized in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text-bearing node. Without a tag the value is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },

    /// Element wrapping ordered children. An empty child list is valid.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged leaf that renders as raw text
    pub fn text(value: &str) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    /// Create a parent element
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a leaf from optional parts.
    ///
    /// Fails with [`NodeError::MissingValue`] when `value` is absent. An empty
    /// string is a valid value.
    pub fn try_leaf(tag: Option<&str>, value: Option<&str>) -> Result<Self> {
        let value = value.ok_or(NodeError::MissingValue)?;
        Ok(HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attributes: Attributes::new(),
        })
    }

    /// Create a parent from optional parts.
    ///
    /// The tag is checked before the children, so a call missing both reports
    /// [`NodeError::MissingTag`].
    pub fn try_parent(tag: Option<&str>, children: Option<Vec<HtmlNode>>) -> Result<Self> {
        let tag = tag.ok_or(NodeError::MissingTag)?;
        let children = children.ok_or(NodeError::MissingChildren)?;
        Ok(HtmlNode::parent(tag, children))
    }

    /// Assemble a node from the full set of optional parts.
    ///
    /// Exactly one of `value` and `children` must be present: a value makes a
    /// leaf, children make a parent (which then also requires a tag).
    pub fn from_parts(
        tag: Option<&str>,
        value: Option<&str>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    ) -> Result<Self> {
        match (value, children) {
            (Some(_), Some(_)) => Err(NodeError::AmbiguousPayload),
            (Some(value), None) => Ok(HtmlNode::Leaf {
                tag: tag.map(str::to_string),
                value: value.to_string(),
                attributes,
            }),
            (None, Some(children)) => {
                let tag = tag.ok_or(NodeError::MissingTag)?;
                Ok(HtmlNode::Parent {
                    tag: tag.to_string(),
                    children,
                    attributes,
                })
            }
            (None, None) => Err(NodeError::MissingValue),
        }
    }

    /// Set an attribute, keeping the position of an existing one
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Tag name, absent for raw text leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Text content of a leaf
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => Some(value.as_str()),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Children of a parent
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf { .. } => None,
            HtmlNode::Parent { children, .. } => Some(children.as_slice()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, HtmlNode::Parent { .. })
    }
}
