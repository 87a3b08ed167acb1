//! Input manager for routing files to the right reader

use crate::error::{DocumentReadError, Result, ResumeTailorError};
use crate::input::document::DocumentContent;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocumentReader, DocxReader, MarkdownReader, PdfReader, PlainTextReader,
};
use log::info;
use std::fs;
use std::path::Path;

/// Stateless: every call reads the file again.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a resume document into paragraphs and tables.
    pub fn read_document(&self, path: &Path) -> std::result::Result<DocumentContent, DocumentReadError> {
        match FileType::from_path(path) {
            FileType::Docx => {
                info!("Reading DOCX document: {}", path.display());
                DocxReader.read(path)
            }
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfReader.read(path)
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextReader.read(path)
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownReader.read(path)
            }
            FileType::Unknown => Err(DocumentReadError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    /// Read a job listing as plain text. DOCX and PDF listings are flattened.
    pub fn read_job_listing(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeTailorError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Text | FileType::Unknown => fs::read_to_string(path)?,
            FileType::Markdown => MarkdownReader::markdown_to_text(&fs::read_to_string(path)?),
            FileType::Docx | FileType::Pdf => {
                let content = self.read_document(path)?;
                crate::parser::linearizer::linearize(&content).join("\n")
            }
        };

        if text.trim().is_empty() {
            return Err(ResumeTailorError::InvalidInput(format!(
                "Job listing is empty: {}",
                path.display()
            )));
        }

        Ok(text)
    }
}
