// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n|a|b|\n|:-|-:|\n|1|2|\n\n> quoted\n>> deeper\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize, items_per_level: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let indent = "  ".repeat(level);
        for i in 0..items_per_level {
            content.push_str(&format!("{indent}- item {i} at __level__ {level}\n"));
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "text **bold __italic ~~strike~~__** `code` [link](https://x.y) ".repeat(repeats)
}
