//! # Block Lexer
//!
//! Splits a document into an ordered list of typed [`Block`]s.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line is reduced to a
//!    `LineClass` of local facts (blank, list marker, fence, table row,
//!    quote depth).
//! 2. **Block construction** (`builder`): a `BlockBuilder` state machine
//!    (`NEUTRAL`, `LIST`, `PRE`, `TABLE_HEAD`, `TABLE_ALIGN`, `TABLE_BODY`,
//!    `BLOCKQUOTE`) groups classified lines and flushes a block as soon as its
//!    state stops accepting lines.
//!
//! ## Key Invariants
//!
//! - Only one multi-line state is active at a time
//! - Openers are tried in the order list, pre, table, blockquote
//! - Fenced code is a raw zone: lines are escaped and kept verbatim
//! - No line ever fails to lex; broken openings degrade to text

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};

use crate::options::Options;

/// Lexes `markdown` into blocks, in document order.
pub fn analyze(markdown: &str, options: &Options) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(options);

    for line in markdown.lines() {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}
