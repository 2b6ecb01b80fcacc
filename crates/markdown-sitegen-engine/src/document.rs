//! # Document Assembly
//!
//! Turns classified blocks into a single HTML node tree.
//!
//! | Block | Output |
//! |---|---|
//! | Paragraph | `<p>` with inline children |
//! | Heading | `<h1>`..`<h6>` with inline children |
//! | Quote | `<blockquote>` with inline children |
//! | Code | `<pre><code>` with the literal body |
//! | UnorderedList / OrderedList | `<ul>`/`<ol>` of `<li>` with inline children |
//!
//! Any inline parse error aborts the whole build; no partial tree is returned.

use crate::{
    error::{Error, ParseError},
    html::HtmlNode,
    parsing::{
        Block, parse_document,
        blocks::{
            BlockType,
            kinds::{BlockQuote, CodeFence, Heading, ITEM_TAG, OrderedList, Paragraph, UnorderedList},
        },
        inline::{inline_to_html, parse_inline},
    },
};

/// Root element used when none is configured.
pub const DEFAULT_ROOT_TAG: &str = "div";

/// Options for [`build_document_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Tag of the element wrapping every block.
    pub root_tag: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
        }
    }
}

/// Converts Markdown into a `<div>` node wrapping one node per block.
pub fn build_document(markdown: &str) -> Result<HtmlNode, ParseError> {
    build_document_with_options(markdown, &DocumentOptions::default())
}

/// Converts Markdown into a node tree with custom options.
pub fn build_document_with_options(
    markdown: &str,
    options: &DocumentOptions,
) -> Result<HtmlNode, ParseError> {
    let doc = parse_document(markdown);
    let children = doc
        .blocks
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "assembled <{}> with {} block nodes",
        options.root_tag,
        children.len()
    );
    Ok(HtmlNode::parent(options.root_tag.as_str(), children))
}

/// Converts Markdown straight to an HTML string using default options.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    markdown_to_html_with_options(markdown, &DocumentOptions::default())
}

/// Converts Markdown straight to an HTML string with custom options.
pub fn markdown_to_html_with_options(
    markdown: &str,
    options: &DocumentOptions,
) -> Result<String, Error> {
    let node = build_document_with_options(markdown, options)?;
    Ok(node.render()?)
}

fn block_to_html(block: &Block<'_>) -> Result<HtmlNode, ParseError> {
    match block.kind {
        BlockType::Paragraph => paragraph_to_html(block.text),
        BlockType::Heading => heading_to_html(block.text),
        BlockType::Code => Ok(code_to_html(block.text)),
        BlockType::Quote => quote_to_html(block.text),
        BlockType::UnorderedList => {
            list_to_html(UnorderedList::TAG, UnorderedList::items(block.text))
        }
        BlockType::OrderedList => list_to_html(OrderedList::TAG, OrderedList::items(block.text)),
    }
}

/// Inline-parses `text` and maps each inline node to an HTML leaf.
///
/// Content with no inline nodes (an empty list item, a bare `>`, `****`)
/// yields a single empty text leaf so the enclosing parent is never childless.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    let children = inline_to_html(parse_inline(text)?);
    if children.is_empty() {
        return Ok(vec![HtmlNode::text("")]);
    }
    Ok(children)
}

fn paragraph_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let children = text_to_children(&Paragraph::content(block))?;
    Ok(HtmlNode::parent(Paragraph::TAG, children))
}

fn heading_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let Some((level, text)) = Heading::strip(block) else {
        return paragraph_to_html(block);
    };
    Ok(HtmlNode::parent(Heading::tag(level), text_to_children(text)?))
}

fn code_to_html(block: &str) -> HtmlNode {
    let Some(body) = CodeFence::body(block) else {
        return HtmlNode::parent(
            CodeFence::PRE_TAG,
            vec![HtmlNode::leaf(CodeFence::CODE_TAG, block)],
        );
    };
    let mut code = HtmlNode::leaf(CodeFence::CODE_TAG, body.code);
    if let Some(language) = body.language {
        code = code.with_attribute("class", format!("language-{language}"));
    }
    HtmlNode::parent(CodeFence::PRE_TAG, vec![code])
}

fn quote_to_html(block: &str) -> Result<HtmlNode, ParseError> {
    let children = text_to_children(&BlockQuote::content(block))?;
    Ok(HtmlNode::parent(BlockQuote::TAG, children))
}

fn list_to_html<'a>(
    tag: &str,
    items: impl Iterator<Item = &'a str>,
) -> Result<HtmlNode, ParseError> {
    let items = items
        .map(|item| -> Result<HtmlNode, ParseError> {
            Ok(HtmlNode::parent(ITEM_TAG, text_to_children(item)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}
