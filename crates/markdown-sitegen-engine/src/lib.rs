//! Markdown to HTML rendering core for markdown-sitegen.
//!
//! The pipeline runs in one direction:
//!
//! raw text → blocks ([`parsing::blocks`]) → inline nodes ([`parsing::inline`])
//! → [`HtmlNode`] tree ([`document`]) → rendered string ([`HtmlNode::render`]).
//!
//! Every call is a pure function of its input; nothing is shared between calls.

pub mod document;
pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use document::*;
pub use error::{Error, ParseError, RenderError};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parsing::{
    blocks::{BlockType, classify, split_blocks},
    inline::{InlineKind, InlineNode, parse_inline},
    parse_document,
};
