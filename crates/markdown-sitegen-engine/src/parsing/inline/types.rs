/// A parsed inline node.
///
/// Only [`InlineNode::Link`] and [`InlineNode::Image`] carry a URL target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// Text between `**` delimiters.
    Bold(String),
    /// Text between `_` delimiters.
    Italic(String),
    /// Text between backticks.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

/// The kind of an [`InlineNode`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// Inline kinds produced by splitting text on a paired delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedKind {
    Bold,
    Italic,
    Code,
}

impl DelimitedKind {
    /// Wraps the text found between a pair of delimiters.
    pub fn wrap(self, content: impl Into<String>) -> InlineNode {
        let content = content.into();
        match self {
            DelimitedKind::Bold => InlineNode::Bold(content),
            DelimitedKind::Italic => InlineNode::Italic(content),
            DelimitedKind::Code => InlineNode::Code(content),
        }
    }
}

impl InlineNode {
    pub fn kind(&self) -> InlineKind {
        match self {
            InlineNode::Text(_) => InlineKind::Text,
            InlineNode::Bold(_) => InlineKind::Bold,
            InlineNode::Italic(_) => InlineKind::Italic,
            InlineNode::Code(_) => InlineKind::Code,
            InlineNode::Link { .. } => InlineKind::Link,
            InlineNode::Image { .. } => InlineKind::Image,
        }
    }

    /// The visible text: alt text for images, link text for links.
    pub fn content(&self) -> &str {
        match self {
            InlineNode::Text(s) | InlineNode::Bold(s) | InlineNode::Italic(s) | InlineNode::Code(s) => {
                s
            }
            InlineNode::Link { text, .. } => text,
            InlineNode::Image { alt, .. } => alt,
        }
    }

    /// The URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        match self {
            InlineNode::Link { url, .. } | InlineNode::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_only_for_links_and_images() {
        let link = InlineNode::Link {
            text: "Click here".into(),
            url: "https://example.com".into(),
        };
        assert_eq!(link.kind(), InlineKind::Link);
        assert_eq!(link.content(), "Click here");
        assert_eq!(link.target(), Some("https://example.com"));

        let image = InlineNode::Image {
            alt: "logo".into(),
            url: "/logo.png".into(),
        };
        assert_eq!(image.content(), "logo");
        assert_eq!(image.target(), Some("/logo.png"));

        for node in [
            InlineNode::Text("Hello world".into()),
            InlineNode::Bold("b".into()),
            InlineNode::Italic("i".into()),
            InlineNode::Code("c".into()),
        ] {
            assert_eq!(node.target(), None, "{node:?}");
        }
    }

    #[test]
    fn delimited_kind_wraps() {
        assert_eq!(DelimitedKind::Bold.wrap("x"), InlineNode::Bold("x".into()));
        assert_eq!(
            DelimitedKind::Italic.wrap("x"),
            InlineNode::Italic("x".into())
        );
        assert_eq!(DelimitedKind::Code.wrap("x"), InlineNode::Code("x".into()));
    }
}
