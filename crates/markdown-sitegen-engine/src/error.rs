/// Errors raised while turning Markdown text into nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unmatched delimiter `{delimiter}` in text: {text:?}")]
    UnmatchedDelimiter { delimiter: String, text: String },
}

/// Errors raised while serializing an [`HtmlNode`](crate::html::HtmlNode) tree.
///
/// These indicate a malformed tree (a construction bug), not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Parent node has no tag")]
    MissingTag,
    #[error("Leaf node has no value (tag: {tag:?})")]
    MissingValue { tag: Option<String> },
    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}

/// Any failure of the full Markdown to HTML string conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
