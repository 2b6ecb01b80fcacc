use std::ops::Range;

use regex::Captures;

use crate::error::ParseError;

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{DelimitedKind, InlineNode},
};

/// Parses inline markup into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Passes run in a fixed order: bold, italic, code, image, link. Each pass
/// only subdivides nodes that are still [`InlineNode::Text`], so the first
/// delimiter to claim a run of text wins. `**a _b_**` yields a single Bold
/// node with content `a _b_`.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] if any text run has an odd number of
/// `**`, `_` or `` ` `` delimiters.
///
/// # Returns
/// Nodes in source order. Empty input yields an empty vector; zero-length
/// nodes are never emitted.
pub fn parse_inline(text: &str) -> Result<Vec<InlineNode>, ParseError> {
    let nodes = vec![InlineNode::Text(text.to_string())];
    let nodes = split_nodes_delimiter(nodes, Bold::DELIMITER, DelimitedKind::Bold)?;
    let nodes = split_nodes_delimiter(nodes, Italic::DELIMITER, DelimitedKind::Italic)?;
    let nodes = split_nodes_delimiter(nodes, CodeSpan::DELIMITER, DelimitedKind::Code)?;
    let nodes = split_nodes_image(nodes);
    let nodes = split_nodes_link(nodes);
    Ok(nodes)
}

/// Splits every text node on `delimiter`, wrapping odd-indexed parts as `kind`.
///
/// Non-text nodes pass through untouched.
pub fn split_nodes_delimiter(
    nodes: Vec<InlineNode>,
    delimiter: &str,
    kind: DelimitedKind,
) -> Result<Vec<InlineNode>, ParseError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let InlineNode::Text(text) = node else {
            out.push(node);
            continue;
        };

        // An odd delimiter count splits into an even number of parts.
        if text.matches(delimiter).count() % 2 == 1 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text,
            });
        }

        for (i, part) in text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineNode::Text(part.to_string()));
            } else {
                out.push(kind.wrap(part));
            }
        }
    }
    log::trace!("split on {delimiter:?} produced {} nodes", out.len());
    Ok(out)
}

/// Splits `![alt](url)` references out of every text node.
pub fn split_nodes_image(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split_nodes_references(nodes, find_images, |alt, url| InlineNode::Image {
        alt,
        url,
    })
}

/// Splits `[text](url)` references out of every text node.
///
/// Image syntax is never claimed as a link.
pub fn split_nodes_link(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split_nodes_references(nodes, find_links, |text, url| InlineNode::Link {
        text,
        url,
    })
}

/// Returns `(alt, url)` for every image reference in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text).into_iter().map(Reference::into_pair).collect()
}

/// Returns `(text, url)` for every link reference in `text`, excluding images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text).into_iter().map(Reference::into_pair).collect()
}

/// A `[label](url)`-shaped match inside a text run.
struct Reference<'a> {
    /// Byte range of the whole reference, markers included.
    range: Range<usize>,
    label: &'a str,
    url: &'a str,
}

impl<'a> Reference<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let full = caps.get(0)?;
        Some(Reference {
            range: full.range(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }

    fn into_pair(self) -> (String, String) {
        (self.label.to_string(), self.url.to_string())
    }
}

fn find_images(text: &str) -> Vec<Reference<'_>> {
    Image::pattern()
        .captures_iter(text)
        .filter_map(|caps| Reference::from_captures(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<Reference<'_>> {
    Link::pattern()
        .captures_iter(text)
        .filter_map(|caps| Reference::from_captures(&caps))
        .filter(|r| !text[..r.range.start].ends_with(Image::MARKER))
        .collect()
}

fn split_nodes_references(
    nodes: Vec<InlineNode>,
    find: fn(&str) -> Vec<Reference<'_>>,
    make: fn(String, String) -> InlineNode,
) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::Text(text) => split_references(&text, find, make, &mut out),
            other => out.push(other),
        }
    }
    out
}

fn split_references(
    text: &str,
    find: fn(&str) -> Vec<Reference<'_>>,
    make: fn(String, String) -> InlineNode,
    out: &mut Vec<InlineNode>,
) {
    let mut text_start = 0;
    for reference in find(text) {
        if reference.range.start > text_start {
            out.push(InlineNode::Text(
                text[text_start..reference.range.start].to_string(),
            ));
        }
        text_start = reference.range.end;
        out.push(make(reference.label.to_string(), reference.url.to_string()));
    }
    if text_start < text.len() {
        out.push(InlineNode::Text(text[text_start..].to_string()));
    }
}
