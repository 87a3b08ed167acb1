//! Flatten a document into its ordered line sequence.

use crate::input::document::DocumentContent;

/// Body paragraphs first, then every table cell paragraph.
///
/// Tables are visited in document order, rows top to bottom, cells left to
/// right. Lines are neither split nor merged and empty paragraphs stay as
/// empty strings.
pub fn linearize(document: &DocumentContent) -> Vec<String> {
    let table_lines = document
        .tables
        .iter()
        .flat_map(|table| table.rows.iter())
        .flat_map(|row| row.cells.iter())
        .flat_map(|cell| cell.paragraphs.iter());

    document
        .paragraphs
        .iter()
        .chain(table_lines)
        .cloned()
        .collect()
}
