//! # Generator
//!
//! Folds each block's forest into an HTML fragment and joins the fragments
//! in document order.
//!
//! The fold is bottom-up: nodes are visited in descending id order, which
//! always reaches children before their parent because a parent is created
//! before any of its children. Each visited node is replaced by a
//! [`MergedNode`] holding its rendered markup, built from the merged
//! contents of its children in creation order. When the pass is over only
//! the root's direct children are left, and their contents are the
//! fragment.

pub mod markup;

use crate::models::{Forest, MergedNode, NodeId};

/// Renders every forest and concatenates the fragments without separator.
pub fn generate(forests: &[Forest]) -> String {
    forests.iter().map(generate_block).collect()
}

/// Renders one block's forest to an HTML fragment.
pub fn generate_block(forest: &Forest) -> String {
    fold(forest)
        .into_iter()
        .map(|merged| merged.content)
        .collect()
}

/// Folds `forest` bottom-up and returns the root-attached merged nodes in
/// document order.
pub fn fold(forest: &Forest) -> Vec<MergedNode> {
    let mut working: Vec<Option<MergedNode>> = vec![None; forest.len()];

    for node in forest.nodes().iter().skip(1).rev() {
        let inner: String = forest
            .children(node.id)
            .iter()
            .filter_map(|child| working[child.0].take())
            .map(|merged| merged.content)
            .collect();

        working[node.id.0] = Some(MergedNode {
            parent: node.parent,
            content: markup::render(node, &inner),
        });
    }

    // Every non-root parent has taken its children by now.
    working
        .into_iter()
        .flatten()
        .filter(|merged| merged.parent == Some(NodeId::ROOT))
        .collect()
}
