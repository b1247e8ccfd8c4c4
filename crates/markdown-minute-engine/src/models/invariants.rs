use super::token::{ElementKind, Forest, NodeId};

/// Asserts the structural invariants of a tokenized forest.
///
/// - exactly one root, at id 0, with no parent
/// - every id equals its arena slot
/// - every parent precedes its child, which rules out cycles
/// - child lists agree with parent links
pub fn check(forest: &Forest) {
    let nodes = forest.nodes();
    assert!(!nodes.is_empty(), "forest has no root sentinel");
    assert_eq!(
        nodes[0].kind,
        ElementKind::Root,
        "first node must be the root sentinel"
    );
    assert_eq!(nodes[0].parent, None, "root sentinel must not have a parent");

    for (i, node) in nodes.iter().enumerate().skip(1) {
        assert_eq!(node.id, NodeId(i), "node id does not match its slot");
        assert_ne!(node.kind, ElementKind::Root, "second root at {i}");
        assert_ne!(
            node.kind,
            ElementKind::Merged,
            "tokenizer produced a merged node at {i}"
        );

        let parent = node
            .parent
            .unwrap_or_else(|| panic!("node {i} ({:?}) has no parent", node.kind));
        assert!(
            parent.0 < i,
            "parent {parent:?} of node {i} does not precede it"
        );
        assert!(
            forest.children(parent).contains(&node.id),
            "node {i} missing from the child list of {parent:?}"
        );
    }
}
