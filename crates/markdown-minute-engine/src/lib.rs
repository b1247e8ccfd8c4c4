//! # markdown-minute-engine
//!
//! Converts Markdown to an HTML string in three stages:
//!
//! ```text
//! markdown → lexer::analyze → [Block] → parser::parse → [Forest] → generator::generate → html
//! ```
//!
//! Every stage is total: malformed input degrades to text, never to an error.

pub mod generator;
pub mod lexer;
pub mod models;
pub mod options;
pub mod parser;

pub use lexer::{Block, BlockKind};
pub use models::{Attribute, Element, ElementKind, Forest, MergedNode, NodeId};
pub use options::Options;

/// Converts `markdown` to HTML with default [`Options`].
pub fn convert_to_html_string(markdown: &str) -> String {
    convert_to_html_string_with(markdown, &Options::default())
}

/// Converts `markdown` to HTML.
pub fn convert_to_html_string_with(markdown: &str, options: &Options) -> String {
    let blocks = lexer::analyze(markdown, options);
    let forests: Vec<Forest> = blocks.iter().map(parser::parse).collect();
    let html = generator::generate(&forests);
    log::debug!(
        "converted {} bytes of markdown in {} blocks to {} bytes of html",
        markdown.len(),
        blocks.len(),
        html.len()
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# h1 test", "<h1>h1 test</h1>")]
    #[case("## h2 test", "<h2>h2 test</h2>")]
    #[case("### h3 test", "<h3>h3 test</h3>")]
    #[case("#### h4 test", "<h4>h4 test</h4>")]
    #[case("# h1 with **bold**", "<h1>h1 with <strong>bold</strong></h1>")]
    #[case("#### h4 with **bold**", "<h4>h4 with <strong>bold</strong></h4>")]
    #[case("##### h5", "<p>##### h5</p>")]
    fn headings(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case(
        "[example](https://example.com)",
        r#"<p><a href="https://example.com">example</a></p>"#
    )]
    #[case("[](https://example.com)", r#"<p><a href="https://example.com"></a></p>"#)]
    #[case("[no-link]()", r#"<p><a href="">no-link</a></p>"#)]
    #[case(
        "[link with **bold**](https://example.com)",
        r#"<p><a href="https://example.com">link with <strong>bold</strong></a></p>"#
    )]
    #[case(
        "![example](https://example.com/img.jpg)",
        r#"<p><img src="https://example.com/img.jpg" alt="example" /></p>"#
    )]
    #[case(
        "![](https://example.com/img.jpg)",
        r#"<p><img src="https://example.com/img.jpg" alt="" /></p>"#
    )]
    fn links_and_images(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case("**bold**", "<p><strong>bold</strong></p>")]
    #[case("normal**bold**normal", "<p>normal<strong>bold</strong>normal</p>")]
    #[case("__italic__", "<p><i>italic</i></p>")]
    #[case("normal__italic__normal", "<p>normal<i>italic</i>normal</p>")]
    #[case("~~si~~", "<p><strike>si</strike></p>")]
    #[case("normal~~si~~normal", "<p>normal<strike>si</strike>normal</p>")]
    #[case("`code`", "<p><code>code</code></p>")]
    #[case("`code**test**`", "<p><code>code**test**</code></p>")]
    #[case("`code**test**`test", "<p><code>code**test**</code>test</p>")]
    #[case(
        "<strong>bold</strong>**bold**",
        "<p><strong>bold</strong><strong>bold</strong></p>"
    )]
    #[case("__a**b__c**d__e**", "<p><i>a**b</i>c<strong>d__e</strong></p>")]
    fn inline_formatting(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case("* a", "<ul><li>a</li></ul>")]
    #[case("* a\n* b", "<ul><li>a</li><li>b</li></ul>")]
    #[case("* a\n  * nested", "<ul><li>a<ul><li>nested</li></ul></li></ul>")]
    #[case("- a\n- b", "<ul><li>a</li><li>b</li></ul>")]
    #[case("+ a\n  + nested", "<ul><li>a<ul><li>nested</li></ul></li></ul>")]
    #[case(
        "* **bold**\n  * __nested__",
        "<ul><li><strong>bold</strong><ul><li><i>nested</i></li></ul></li></ul>"
    )]
    #[case(
        "* **bold**\n  * __nested__\n  * ~~nested~~\n* indent",
        "<ul><li><strong>bold</strong><ul><li><i>nested</i></li><li><strike>nested</strike></li></ul><li>indent</li></li></ul>"
    )]
    #[case(
        "* a\n* b\n  * c\n* d",
        "<ul><li>a</li><li>b<ul><li>c</li></ul><li>d</li></li></ul>"
    )]
    #[case("1. a", "<ol><li>a</li></ol>")]
    #[case("1. a\n2. b", "<ol><li>a</li><li>b</li></ol>")]
    #[case("1. a\n  1. b", "<ol><li>a<ol><li>b</li></ol></li></ol>")]
    #[case(
        "1. a\n  1. b**bold**",
        "<ol><li>a<ol><li>b<strong>bold</strong></li></ol></li></ol>"
    )]
    fn lists(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[test]
    fn bold_nests_inside_list_items_at_any_depth() {
        let html = convert_to_html_string("- a\n  - b\n    - **deep**");
        assert!(html.contains("<li><strong>deep</strong></li>"), "{html}");
    }

    #[rstest]
    #[case(
        "|a|b|\n|:-|-:|\n|1|2|",
        r#"<table><thead><tr><th align="left">a</th><th align="right">b</th></tr></thead><tbody><tr><td align="left">1</td><td align="right">2</td></tr></tbody></table>"#
    )]
    #[case(
        "|left|center|right|\n|:-|:-:|-:|\n|left|center|right|\n",
        r#"<table><thead><tr><th align="left">left</th><th align="center">center</th><th align="right">right</th></tr></thead><tbody><tr><td align="left">left</td><td align="center">center</td><td align="right">right</td></tr></tbody></table>"#
    )]
    #[case(
        "|left|center|right|\n|:-|:-:|-:|\n|**left**|[center](https://example.com)|right|",
        r#"<table><thead><tr><th align="left">left</th><th align="center">center</th><th align="right">right</th></tr></thead><tbody><tr><td align="left"><strong>left</strong></td><td align="center"><a href="https://example.com">center</a></td><td align="right">right</td></tr></tbody></table>"#
    )]
    #[case(
        "|a|\n|-|\n|1|2|",
        "<table><thead><tr><th>a</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    )]
    #[case(
        "x |a| y\n|-|-|-|\n|1|2|3|",
        "<table><thead><tr><th>x</th><th>a</th><th>y</th></tr></thead><tbody><tr><td>1</td><td>2</td><td>3</td></tr></tbody></table>"
    )]
    fn tables(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case("|a|b|\nnext", "<p>|a|b|</p><p>next</p>")]
    #[case("|a|b|\n|:-|-:|\nnext", "<p>|a|b|</p><p>|:-|-:|</p><p>next</p>")]
    #[case("|a|b|\n|:-|-:|", "<p>|a|b|</p><p>|:-|-:|</p>")]
    #[case(
        "|a|b|\n|:-|-:|\n- item",
        "<p>|a|b|</p><p>|:-|-:|</p><ul><li>item</li></ul>"
    )]
    fn incomplete_table_opening_is_plain_text(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[test]
    fn pipes_inside_a_quote_stay_in_the_quote() {
        assert_eq!(
            convert_to_html_string("> |a| b"),
            "<blockquote>|a| b</blockquote>"
        );
    }

    #[rstest]
    #[case("```\ncodeblock\n```", "<pre><code>codeblock\n</code></pre>")]
    #[case(
        "```\ncodeblock**bold**\n```",
        "<pre><code>codeblock**bold**\n</code></pre>"
    )]
    #[case(
        "```\ncodeblock**bold**\n\na\n```",
        "<pre><code>codeblock**bold**\n\na\n</code></pre>"
    )]
    #[case(
        "```html\n<p class=\"x\">a & b</p>\n```",
        "<pre><code class=\"language-html\">&lt;p class=&quot;x&quot;&gt;a &amp; b&lt;/p&gt;\n</code></pre>"
    )]
    #[case("```\n&amp;\n```", "<pre><code>&amp;amp;\n</code></pre>")]
    fn preformatted(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case("> quote", "<blockquote>quote</blockquote>")]
    #[case("> quote\n", "<blockquote>quote</blockquote>")]
    #[case(
        "> quote\n>> quote",
        "<blockquote>quote<blockquote>quote</blockquote></blockquote>"
    )]
    #[case(
        "> a\n> > b\n> c",
        "<blockquote>a<blockquote>b</blockquote>c</blockquote>"
    )]
    #[case(
        ">>> deep",
        "<blockquote><blockquote><blockquote>deep</blockquote></blockquote></blockquote>"
    )]
    fn blockquotes(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case("plain text")]
    #[case("a sentence, with punctuation; and (parens)!")]
    #[case("single * star and _ underscore")]
    fn plain_text_is_one_paragraph(#[case] markdown: &str) {
        assert_eq!(convert_to_html_string(markdown), format!("<p>{markdown}</p>"));
    }

    #[rstest]
    #[case("", "")]
    #[case("\n", "")]
    #[case("a\nb\n", "<p>a</p><p>b</p>")]
    #[case("a\n\nb", "<p>a</p><p>b</p>")]
    fn blank_lines_render_nothing_by_default(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(convert_to_html_string(markdown), expected);
    }

    #[rstest]
    #[case("\n", "<br />")]
    #[case("a\nb\n", "<p>a</p><p>b</p>")]
    #[case("\n\n", "<br /><br />")]
    #[case("\n\na", "<br /><br /><p>a</p>")]
    #[case("a\n\nb", "<p>a</p><br /><p>b</p>")]
    #[case("> quote\n\n", "<blockquote>quote</blockquote><br />")]
    fn blank_lines_render_breaks_when_enabled(#[case] markdown: &str, #[case] expected: &str) {
        let options = Options {
            blank_line_breaks: true,
        };
        assert_eq!(convert_to_html_string_with(markdown, &options), expected);
    }

    #[test]
    fn mixed_document_keeps_block_order() {
        let markdown = "# Title\n\nIntro with [a link](https://x.y).\n\n- one\n- two\n\n> quoted\n\n```\nx < y\n```";
        assert_eq!(
            convert_to_html_string(markdown),
            concat!(
                "<h1>Title</h1>",
                r#"<p>Intro with <a href="https://x.y">a link</a>.</p>"#,
                "<ul><li>one</li><li>two</li></ul>",
                "<blockquote>quoted</blockquote>",
                "<pre><code>x &lt; y\n</code></pre>",
            )
        );
    }
}
