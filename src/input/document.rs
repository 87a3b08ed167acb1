//! In-memory shape of a read document: body paragraphs plus tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Body-level paragraph texts in document order.
    pub paragraphs: Vec<String>,
    /// Tables in document order.
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<String>,
}

impl DocumentContent {
    /// Build a table-free document where each text line is one paragraph.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: text.lines().map(|line| line.to_string()).collect(),
            tables: Vec::new(),
        }
    }
}
