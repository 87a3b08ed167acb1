//! DOCX reading: ZIP package + streamed WordprocessingML body.

use crate::error::DocumentReadError;
use crate::input::document::{DocumentContent, Table, TableCell, TableRow};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Main document part inside a DOCX package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Read body paragraphs and tables from a `.docx` file.
pub fn read_docx(path: &Path) -> Result<DocumentContent, DocumentReadError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    {
        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
            ZipError::FileNotFound => DocumentReadError::MissingPart(DOCUMENT_PART.to_string()),
            other => DocumentReadError::Archive(other),
        })?;
        part.read_to_string(&mut xml)?;
    }

    parse_document_xml(&xml)
}

/// Walk `word/document.xml` and collect paragraph text.
///
/// Body paragraphs go to `paragraphs`, top-level tables keep their
/// row/cell structure. Paragraphs of a nested table are attributed to the
/// enclosing top-level cell. Text boxes are skipped entirely.
pub fn parse_document_xml(xml: &str) -> Result<DocumentContent, DocumentReadError> {
    let mut reader = Reader::from_str(xml);
    let mut body = BodyBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => body.open(e.name().as_ref()),
            Event::Empty(e) => {
                let name = e.name();
                body.open(name.as_ref());
                body.close(name.as_ref());
            }
            Event::End(e) => body.close(e.name().as_ref()),
            Event::Text(t) => {
                if body.accepts_text() {
                    let text = t.unescape()?;
                    body.push_text(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(body.finish())
}

#[derive(Default)]
struct BodyBuilder {
    content: DocumentContent,
    table_depth: usize,
    table: Option<Table>,
    paragraph: Option<String>,
    in_run: bool,
    in_text: bool,
    textbox_depth: usize,
}

impl BodyBuilder {
    fn open(&mut self, name: &[u8]) {
        if name == b"w:txbxContent" {
            self.textbox_depth += 1;
            return;
        }
        if self.textbox_depth > 0 {
            return;
        }

        match name {
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table = Some(Table::default());
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.rows.push(TableRow::default());
                }
            }
            b"w:tc" if self.table_depth == 1 => {
                if let Some(row) = self.table.as_mut().and_then(|t| t.rows.last_mut()) {
                    row.cells.push(TableCell::default());
                }
            }
            b"w:p" => {
                if self.paragraph.is_none() {
                    self.paragraph = Some(String::new());
                }
            }
            b"w:r" => self.in_run = true,
            b"w:t" => self.in_text = true,
            b"w:tab" if self.in_run => self.push_text("\t"),
            b"w:br" | b"w:cr" if self.in_run => self.push_text("\n"),
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        if name == b"w:txbxContent" {
            self.textbox_depth = self.textbox_depth.saturating_sub(1);
            return;
        }
        if self.textbox_depth > 0 {
            return;
        }

        match name {
            b"w:t" => self.in_text = false,
            b"w:r" => self.in_run = false,
            b"w:p" => {
                if let Some(text) = self.paragraph.take() {
                    self.finish_paragraph(text);
                }
            }
            b"w:tbl" => {
                self.table_depth = self.table_depth.saturating_sub(1);
                if self.table_depth == 0 {
                    if let Some(table) = self.table.take() {
                        self.content.tables.push(table);
                    }
                }
            }
            _ => {}
        }
    }

    fn accepts_text(&self) -> bool {
        self.in_text && self.textbox_depth == 0 && self.paragraph.is_some()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }

    fn finish_paragraph(&mut self, text: String) {
        if self.table_depth == 0 {
            self.content.paragraphs.push(text);
            return;
        }

        let cell = self
            .table
            .as_mut()
            .and_then(|t| t.rows.last_mut())
            .and_then(|r| r.cells.last_mut());
        match cell {
            Some(cell) => cell.paragraphs.push(text),
            None => log::debug!("Dropping table paragraph outside any cell: {:?}", text),
        }
    }

    fn finish(self) -> DocumentContent {
        self.content
    }
}
