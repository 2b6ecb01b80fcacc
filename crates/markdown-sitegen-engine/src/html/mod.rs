//! # HTML Node Model
//!
//! The generic output tree produced by the document assembler.
//!
//! ## Node Shapes
//!
//! - **Leaf**: literal text content, no children. A leaf without a tag renders
//!   its value verbatim (plain inline text).
//! - **Parent**: an element wrapping one or more child nodes.
//!
//! ## Key Invariants
//!
//! - Attributes render in insertion order as ` key="value"`
//! - Values are substituted literally: the tree carries trusted strings
//! - Rendering never inserts whitespace between children
//! - Tagged nodes always render an explicit closing tag (no self-closing)

pub mod invariants;

use indexmap::IndexMap;

use crate::error::RenderError;

/// Element attributes, rendered in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A text-bearing node with no children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A children-bearing node with no text of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

/// A node of the HTML output tree: either a leaf or a parent, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Creates a tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Creates a tagless leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Creates a parent element wrapping `children`.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Appends an attribute. Re-inserting an existing key keeps its original position.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key.into(), value.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Leaf text, if this is a leaf with a value.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attributes,
            HtmlNode::Parent(parent) => &mut parent.attributes,
        }
    }

    /// Renders the attribute list as ` key="value"` pairs in insertion order.
    ///
    /// Returns an empty string when there are no attributes.
    pub fn render_attributes(&self) -> String {
        render_attributes(self.attributes())
    }

    /// Serializes this node and its subtree to an HTML string.
    ///
    /// # Errors
    /// - [`RenderError::MissingValue`] for a leaf without a value
    /// - [`RenderError::MissingTag`] for a parent without a tag
    /// - [`RenderError::EmptyChildren`] for a parent without children
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl LeafNode {
    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(value) = self.value.as_deref() else {
            return Err(RenderError::MissingValue {
                tag: self.tag.clone(),
            });
        };
        match self.tag.as_deref() {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(out, tag, &self.attributes);
                out.push_str(value);
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

impl ParentNode {
    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(tag) = self.tag.as_deref() else {
            return Err(RenderError::MissingTag);
        };
        if self.children.is_empty() {
            return Err(RenderError::EmptyChildren {
                tag: tag.to_string(),
            });
        }
        open_tag(out, tag, &self.attributes);
        for child in &self.children {
            child.render_into(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

fn render_attributes(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&render_attributes(attributes));
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
