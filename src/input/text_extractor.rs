//! Document readers for the supported resume formats

use crate::error::DocumentReadError;
use crate::input::docx_reader;
use crate::input::document::DocumentContent;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::fs;
use std::path::Path;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// Something that can turn a file into paragraphs and tables.
pub trait DocumentReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, DocumentReadError>;
}

pub struct DocxReader;

impl DocumentReader for DocxReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, DocumentReadError> {
        docx_reader::read_docx(path)
    }
}

pub struct PdfReader;

impl DocumentReader for PdfReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, DocumentReadError> {
        let bytes = fs::read(path)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            DocumentReadError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(DocumentContent::from_text(&text))
    }
}

pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, DocumentReadError> {
        let content = fs::read_to_string(path)?;
        Ok(DocumentContent::from_text(&content))
    }
}

pub struct MarkdownReader;

impl DocumentReader for MarkdownReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, DocumentReadError> {
        let markdown_content = fs::read_to_string(path)?;
        Ok(DocumentContent::from_text(&Self::markdown_to_text(&markdown_content)))
    }
}

impl MarkdownReader {
    /// Render Markdown to HTML, then strip tags back down to one block per line.
    pub fn markdown_to_text(markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = html_output
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ");

        let stripped = HTML_TAG.replace_all(&text, "");
        let unescaped = stripped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        unescaped
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
