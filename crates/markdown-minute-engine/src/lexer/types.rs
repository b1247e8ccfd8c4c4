/// The kind of a lexed block, which selects its tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A single line of inline text.
    Text,
    /// Consecutive bullet or ordered list lines.
    List,
    /// Fenced code. The content is already entity-escaped.
    Pre {
        /// Language tag from the opening fence.
        language: Option<String>,
    },
    /// Header row, alignment row, then body rows.
    Table,
    BlockQuote,
    /// A blank line, only produced when blank-line breaks are enabled.
    Break,
}

/// A run of source lines classified as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Raw lines of the block joined with `\n`.
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}
