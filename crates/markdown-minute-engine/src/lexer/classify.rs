use super::kinds::{BlockQuote, CodeFence, FenceSig, ListItem, TableRow};

/// Local facts about a single line, gathered without looking at its
/// neighbours. The builder combines these with its current state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    pub text: &'a str,
    /// Empty or whitespace only.
    pub is_blank: bool,
    pub is_list_item: bool,
    /// Set when the line is a code fence (opening or closing).
    pub fence: Option<FenceSig>,
    pub is_table_row: bool,
    pub is_alignment_row: bool,
    /// Number of leading `>` markers; 0 for non-quote lines.
    pub quote_depth: usize,
}

impl LineClass<'_> {
    pub fn closes_fence(&self) -> bool {
        self.fence.as_ref().is_some_and(FenceSig::is_closing)
    }
}

/// Classifies individual lines for the block lexer.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let quote_depth = BlockQuote::depth(line);
        LineClass {
            text: line,
            is_blank: line.trim().is_empty(),
            is_list_item: ListItem::matches(line),
            fence: CodeFence::sig(line),
            // pipes inside a quoted line belong to the quote
            is_table_row: quote_depth == 0 && TableRow::is_row(line),
            is_alignment_row: TableRow::is_alignment(line),
            quote_depth,
        }
    }
}
