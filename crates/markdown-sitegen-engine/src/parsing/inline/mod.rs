//! # Inline Parsing
//!
//! Delimiter-driven inline parsing over the text of a single block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the stripped
//! content of inline-eligible blocks (paragraphs, headings, quotes, list items).
//! Code blocks never reach this module.
//!
//! Parsing is a pipeline of passes over a `Vec<InlineNode>`, starting from a
//! single text node. Each pass subdivides the remaining `Text` nodes only:
//!
//! 1. `**` → Bold
//! 2. `_` → Italic
//! 3. `` ` `` → Code
//! 4. `![alt](url)` → Image
//! 5. `[text](url)` → Link
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters and tags
//! - **`parser`**: `parse_inline()` main entry point with `split_nodes_*` passes
//! - **`convert`**: `InlineNode` → `HtmlNode` mapping
//!
//! ## Precedence
//!
//! Delimiters are not nested: the earliest pass to claim a run of text wins.
//! `` `**x**` `` parses as bold `x` wrapped in stray backticks, which then fails
//! the code pass as unmatched.

pub mod convert;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::inline_to_html;
pub use parser::{
    extract_markdown_images, extract_markdown_links, parse_inline, split_nodes_delimiter,
    split_nodes_image, split_nodes_link,
};
pub use types::{DelimitedKind, InlineKind, InlineNode};
