use crate::{
    lexer::kinds::BlockQuote,
    models::{ElementKind, Forest, NodeId},
};

use super::inline::tokenize_inline;

/// Tokenizes a blockquote block, nesting one `blockquote` per `>` marker.
pub fn tokenize_blockquote(content: &str) -> Forest {
    let mut forest = Forest::new();
    // open[d - 1] is the blockquote node at depth d
    let mut open: Vec<NodeId> = vec![];

    for line in content.lines() {
        let quote = BlockQuote::split(line);
        let depth = quote.depth.max(1);

        open.truncate(depth);
        while open.len() < depth {
            let parent = open.last().copied().unwrap_or(NodeId::ROOT);
            open.push(forest.element(ElementKind::BlockQuote, parent));
        }

        if let Some(&target) = open.last() {
            tokenize_inline(&mut forest, quote.text, target);
        }
    }

    forest
}
