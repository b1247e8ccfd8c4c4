use crate::models::{Attribute, Element, ElementKind};

/// Wraps the already-rendered children of `node` in the node's own markup.
pub fn render(node: &Element, inner: &str) -> String {
    match node.kind {
        ElementKind::Text => node.content.clone(),
        ElementKind::Root | ElementKind::Merged => inner.to_string(),
        ElementKind::Break => "<br />".to_string(),
        ElementKind::Image => format!(
            r#"<img src="{}" alt="{}" />"#,
            node.attribute(Attribute::SRC).unwrap_or_default(),
            inner
        ),
        ElementKind::Pre => format!("<pre>{}</pre>", wrap("code", &node.attributes, inner)),
        kind => match kind.tag() {
            Some(tag) => wrap(tag, &node.attributes, inner),
            None => inner.to_string(),
        },
    }
}

fn wrap(tag: &str, attributes: &[Attribute], inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 2 * tag.len() + 5);
    out.push('<');
    out.push_str(tag);
    for attribute in attributes {
        out.push(' ');
        out.push_str(attribute.name);
        out.push_str("=\"");
        out.push_str(&attribute.value);
        out.push('"');
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}
