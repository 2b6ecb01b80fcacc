//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and output tags.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`, renders as `<b>`
//! - **`Italic`**: `DELIMITER = "_"`, renders as `<i>`
//! - **`CodeSpan`**: a single backtick, renders as `<code>`
//! - **`Image`**: `![alt](url)`, renders as `<img src alt>`
//! - **`Link`**: `[text](url)`, renders as `<a href>`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use image::Image;
pub use link::Link;
