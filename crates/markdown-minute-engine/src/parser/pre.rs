use crate::models::{Attribute, ElementKind, Forest, NodeId};

/// Tokenizes fenced code into a single `pre` node holding the escaped text.
///
/// No inline parsing happens here.
pub fn tokenize_pre(content: &str, language: Option<&str>) -> Forest {
    let mut forest = Forest::new();
    let attributes = language
        .filter(|l| !l.is_empty())
        .map(|l| vec![Attribute::new(Attribute::CLASS, format!("language-{l}"))])
        .unwrap_or_default();

    let pre = forest.push(ElementKind::Pre, "", NodeId::ROOT, attributes);
    forest.text(content, pre);
    forest
}
