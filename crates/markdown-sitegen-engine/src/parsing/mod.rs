pub mod blocks;
pub mod inline;

use blocks::{BlockType, classify, split_blocks};

/// A block of source text together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockType,
    /// Trimmed block text, markers included.
    pub text: &'a str,
}

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Splits a document into blocks and classifies each one.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let blocks = split_blocks(markdown)
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let kind = classify(text);
            log::debug!("block {index} classified as {kind:?}");
            Block { kind, text }
        })
        .collect();

    ParsedDoc { blocks }
}
