use markdown_sitegen_engine::{
    BlockType, Error, HtmlNode, ParseError, build_document, html::invariants, markdown_to_html,
    parse_document,
};
use pretty_assertions::assert_eq;

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_code_fence() {
    assert_fixture("code_fence");
}

#[test]
fn fixture_blog_post() {
    assert_fixture("blog_post");
}

#[test]
fn fixture_degraded_blocks() {
    assert_fixture("degraded_blocks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let node = build_document(&md).unwrap();
    invariants::check(&node);

    assert_eq!(node.render().unwrap(), expected.trim_end());
}

#[test]
fn heading_then_paragraph() {
    let node = build_document("# Hi\n\nThis is **bold** text.").unwrap();
    invariants::check(&node);

    let children = node.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag(), Some("h1"));
    assert_eq!(children[1].tag(), Some("p"));

    insta::assert_snapshot!(
        node.render().unwrap(),
        @"<div><h1>Hi</h1><p>This is <b>bold</b> text.</p></div>"
    );
}

#[test]
fn every_block_kind_in_one_document() {
    let md = "## Kinds\n\n> a _quote_\n\n- `one`\n- two\n\n1. three\n2. ![four](4.png)\n\n```raw **five**```";
    let kinds: Vec<_> = parse_document(md).blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockType::Heading,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
            BlockType::Code,
        ]
    );

    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @r#"<div><h2>Kinds</h2><blockquote>a <i>quote</i></blockquote><ul><li><code>one</code></li><li>two</li></ul><ol><li>three</li><li><img src="4.png" alt="four"></img></li></ol><pre><code>raw **five**</code></pre></div>"#
    );
}

#[test]
fn unmatched_delimiter_fails_whole_document() {
    let md = "# Fine\n\nAlso fine\n\nBut _this is not";
    assert!(matches!(
        markdown_to_html(md),
        Err(Error::Parse(ParseError::UnmatchedDelimiter { .. }))
    ));
}

#[test]
fn conversions_are_independent_across_threads() {
    let inputs = ["# One", "- two\n- three", "**four**"];
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|md| std::thread::spawn(move || build_document(md).unwrap()))
        .collect();

    let trees: Vec<HtmlNode> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (md, tree) in inputs.iter().zip(&trees) {
        assert_eq!(tree, &build_document(md).unwrap());
    }
}
