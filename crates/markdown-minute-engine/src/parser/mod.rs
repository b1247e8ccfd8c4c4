//! # Block Tokenizer
//!
//! Turns one lexed [`Block`] into a [`Forest`] of elements.
//!
//! ## Modules
//!
//! - **`inline`**: the shared recursive inline tokenizer (also the text-block
//!   tokenizer)
//! - **`kinds`**: the ordered inline pattern table and leftmost-match search
//! - **`cursor`**: scan position inside the text being tokenized
//! - **`list`**, **`table`**, **`blockquote`**, **`pre`**: structural
//!   tokenizers that build containers and hand cell/item/line text to
//!   `inline`
//!
//! ## Raw Zones
//!
//! Code spans, image alt text and fenced code are never re-tokenized.

pub mod blockquote;
pub mod cursor;
pub mod inline;
pub mod kinds;
pub mod list;
pub mod pre;
pub mod table;

pub use inline::{tokenize_inline, tokenize_text};

use crate::{
    lexer::{Block, BlockKind},
    models::{ElementKind, Forest, NodeId},
};

/// Tokenizes `block` with the tokenizer for its kind.
pub fn parse(block: &Block) -> Forest {
    match &block.kind {
        BlockKind::Text => tokenize_text(&block.content),
        BlockKind::List => list::tokenize_list(&block.content),
        BlockKind::Pre { language } => pre::tokenize_pre(&block.content, language.as_deref()),
        BlockKind::Table => table::tokenize_table(&block.content),
        BlockKind::BlockQuote => blockquote::tokenize_blockquote(&block.content),
        BlockKind::Break => {
            let mut forest = Forest::new();
            forest.element(ElementKind::Break, NodeId::ROOT);
            forest
        }
    }
}
