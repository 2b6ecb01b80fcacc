//! # Block Parsing
//!
//! Splitting a document into blocks and classifying each one.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): The document is cut on blank lines (`\n\n`) into
//!    trimmed, non-empty block strings
//!
//! 2. **Classification** (`classify`): Each block is classified independently
//!    into a `BlockType` by an ordered decision list
//!
//! ## Modules
//!
//! - **`types`**: `BlockType` enum
//! - **`kinds`**: Block-specific types with owned markers and stripping rules
//!   (Heading, CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `classify`
//!
//! ## Key Invariants
//!
//! - Block order is source order
//! - Classification is total: malformed quote/list markers fall back to Paragraph
//! - Code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::{BLOCK_SEPARATOR, split_blocks};
pub use types::BlockType;
