use crate::{
    lexer::kinds::ListItem,
    models::{ElementKind, Forest, NodeId},
};

use super::inline::tokenize_inline;

/// One open nesting level of a list.
#[derive(Debug, Clone, Copy)]
struct Level {
    /// Indentation width of the items at this level.
    width: usize,
    container: NodeId,
    last_item: Option<NodeId>,
}

impl Level {
    /// Where a nested container or a dedented item hangs off this level.
    fn anchor(&self) -> NodeId {
        self.last_item.unwrap_or(self.container)
    }
}

/// Tokenizes a list block into `ul`/`ol` containers and `li` items.
///
/// Deeper indentation opens a container under the previous item. Equal
/// indentation adds a sibling item. Shallower indentation pops back to the
/// nearest level that is not deeper than the line and hangs the item off
/// that level's last item.
pub fn tokenize_list(content: &str) -> Forest {
    let mut forest = Forest::new();
    let mut levels: Vec<Level> = vec![];

    for line in content.lines() {
        let Some(item) = ListItem::parse(line) else {
            log::debug!("skipping non-list line in list block: {line:?}");
            continue;
        };
        let width = item.indent.len();
        let container_kind = item.marker.container();

        let parent = match levels.last().copied() {
            None => open_level(&mut forest, &mut levels, container_kind, width, NodeId::ROOT),
            Some(top) if width > top.width => {
                open_level(&mut forest, &mut levels, container_kind, width, top.anchor())
            }
            Some(top) if width == top.width => top.container,
            Some(_) => {
                while levels.len() > 1 && levels.last().is_some_and(|l| l.width > width) {
                    levels.pop();
                }
                levels.last().map_or(NodeId::ROOT, Level::anchor)
            }
        };

        let li = forest.push(ElementKind::ListItem, item.indent, parent, vec![]);
        if let Some(top) = levels.last_mut() {
            top.last_item = Some(li);
        }
        tokenize_inline(&mut forest, item.text, li);
    }

    forest
}

fn open_level(
    forest: &mut Forest,
    levels: &mut Vec<Level>,
    kind: ElementKind,
    width: usize,
    parent: NodeId,
) -> NodeId {
    let container = forest.element(kind, parent);
    levels.push(Level {
        width,
        container,
        last_item: None,
    });
    container
}
