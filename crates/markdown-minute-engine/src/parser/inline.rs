use crate::models::{Attribute, ElementKind, Forest, NodeId};

use super::{
    cursor::Cursor,
    kinds::{InlineKind, leftmost},
};

/// Tokenizes a single text line into a fresh forest.
pub fn tokenize_text(text: &str) -> Forest {
    let mut forest = Forest::new();
    tokenize_inline(&mut forest, text, NodeId::ROOT);
    forest
}

/// Tokenizes `text` into `forest` beneath `parent`.
///
/// Each round takes the leftmost inline match, emits the text before it,
/// and recurses into the captured group with the new element as parent.
/// Scanning then resumes at the same depth, so siblings share a parent.
///
/// At block root, everything except a heading is wrapped in one implicit
/// paragraph; inside any other element no wrapper is added. Returns the
/// node later siblings were attached to (the paragraph, if one was opened).
pub fn tokenize_inline(forest: &mut Forest, text: &str, parent: NodeId) -> NodeId {
    let mut cur = Cursor::new(text);
    let mut attach = parent;
    let at_root = parent == NodeId::ROOT;

    while !cur.eof() {
        let rest = cur.rest();
        let found = leftmost(rest, at_root && attach == NodeId::ROOT);

        if attach == NodeId::ROOT && found.is_none_or(|m| m.kind != InlineKind::Heading) {
            attach = forest.element(ElementKind::Paragraph, NodeId::ROOT);
        }

        let Some(m) = found else {
            forest.text(rest, attach);
            break;
        };
        log::trace!("inline {:?} at {} in {:?}", m.kind, m.start, rest);

        if m.start > 0 {
            forest.text(&rest[..m.start], attach);
        }

        match m.kind {
            InlineKind::Heading => {
                let kind = ElementKind::heading(m.level).unwrap_or(ElementKind::H1);
                let heading = forest.element(kind, attach);
                tokenize_inline(forest, m.inner, heading);
            }
            InlineKind::Code => {
                let code = forest.element(ElementKind::Code, attach);
                leaf(forest, m.inner, code);
            }
            InlineKind::Image => {
                let image = forest.push(
                    ElementKind::Image,
                    "",
                    attach,
                    vec![Attribute::new(Attribute::SRC, m.target)],
                );
                leaf(forest, m.inner, image);
            }
            InlineKind::Link => {
                let link = forest.push(
                    ElementKind::Link,
                    "",
                    attach,
                    vec![Attribute::new(Attribute::HREF, m.target)],
                );
                tokenize_inline(forest, m.inner, link);
            }
            InlineKind::Bold | InlineKind::Italic | InlineKind::Strike => {
                let span = forest.element(m.kind.element(), attach);
                tokenize_inline(forest, m.inner, span);
            }
        }

        cur.bump_n(m.end);
    }

    attach
}

/// Raw zone: the captured text becomes one leaf, never re-tokenized.
fn leaf(forest: &mut Forest, text: &str, parent: NodeId) {
    if !text.is_empty() {
        forest.text(text, parent);
    }
}
