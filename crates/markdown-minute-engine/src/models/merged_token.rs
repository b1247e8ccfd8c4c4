use super::token::NodeId;

/// A node whose subtree has already been folded into HTML.
///
/// Inherits the parent of the element it replaces; only the generator
/// produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedNode {
    pub parent: Option<NodeId>,
    pub content: String,
}
