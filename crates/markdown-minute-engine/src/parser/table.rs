use crate::{
    lexer::kinds::{Alignment, TableRow},
    models::{Attribute, ElementKind, Forest, NodeId},
};

use super::inline::tokenize_inline;

/// Tokenizes a table block: line 0 is the header, line 1 the alignment row,
/// the rest are body rows.
pub fn tokenize_table(content: &str) -> Forest {
    let mut forest = Forest::new();
    let lines: Vec<&str> = content.lines().collect();
    let alignments = lines
        .get(1)
        .map(|l| TableRow::alignments(l))
        .unwrap_or_default();

    let table = forest.element(ElementKind::Table, NodeId::ROOT);

    if let Some(header) = lines.first() {
        let thead = forest.element(ElementKind::TableHead, table);
        push_row(&mut forest, thead, ElementKind::TableHeader, header, &alignments);
    }

    let body: Vec<&str> = lines.iter().skip(2).copied().collect();
    if !body.is_empty() {
        let tbody = forest.element(ElementKind::TableBody, table);
        for row in body {
            push_row(&mut forest, tbody, ElementKind::TableData, row, &alignments);
        }
    }

    forest
}

fn push_row(
    forest: &mut Forest,
    section: NodeId,
    cell_kind: ElementKind,
    line: &str,
    alignments: &[Option<Alignment>],
) {
    let tr = forest.element(ElementKind::TableRow, section);
    for (column, cell) in TableRow::cells(line).into_iter().enumerate() {
        // Columns past the alignment row render without `align`.
        let attributes = alignments
            .get(column)
            .copied()
            .flatten()
            .map(|a| vec![Attribute::new(Attribute::ALIGN, a.as_str())])
            .unwrap_or_default();
        let node = forest.push(cell_kind, "", tr, attributes);
        tokenize_inline(forest, cell, node);
    }
}
