// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and `code`.\n\n- Bullet point with a [link](https://example.com)\n- Another item\n\n1. First\n2. Second\n\n> A quote with ![an image](/img.png)\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraph(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        match i % 4 {
            0 => content.push_str("**bold** "),
            1 => content.push_str("_italic_ "),
            2 => content.push_str("`code` "),
            _ => content.push_str("plain "),
        }
    }
    content
}
