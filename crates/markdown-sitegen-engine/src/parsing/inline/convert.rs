use crate::html::HtmlNode;

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::InlineNode,
};

impl From<InlineNode> for HtmlNode {
    /// Maps an inline node onto a leaf. Plain text becomes a tagless leaf;
    /// images carry their alt text as an attribute and an empty value.
    fn from(node: InlineNode) -> Self {
        match node {
            InlineNode::Text(text) => HtmlNode::text(text),
            InlineNode::Bold(text) => HtmlNode::leaf(Bold::TAG, text),
            InlineNode::Italic(text) => HtmlNode::leaf(Italic::TAG, text),
            InlineNode::Code(text) => HtmlNode::leaf(CodeSpan::TAG, text),
            InlineNode::Link { text, url } => HtmlNode::leaf(Link::TAG, text).with_attribute("href", url),
            InlineNode::Image { alt, url } => HtmlNode::leaf(Image::TAG, "")
                .with_attribute("src", url)
                .with_attribute("alt", alt),
        }
    }
}

/// Converts parsed inline nodes into HTML leaves, preserving order.
pub fn inline_to_html(nodes: Vec<InlineNode>) -> Vec<HtmlNode> {
    nodes.into_iter().map(HtmlNode::from).collect()
}
