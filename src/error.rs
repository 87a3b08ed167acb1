//! Error handling for the resume tailor

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a path into readable document content.
#[derive(Error, Debug)]
pub enum DocumentReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid DOCX package: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Document part missing: {0}")]
    MissingPart(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),
}

/// The only way a resume parse can fail. Heuristic misses never end up here.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read document '{}': {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: DocumentReadError,
    },
}

#[derive(Error, Debug)]
pub enum ResumeTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resume parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Document read error: {0}")]
    DocumentRead(#[from] DocumentReadError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("LLM request error: {0}")]
    Llm(String),

    #[error("Unusable LLM response: {0}")]
    LlmResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeTailorError>;

impl From<reqwest::Error> for ResumeTailorError {
    fn from(err: reqwest::Error) -> Self {
        ResumeTailorError::Llm(err.to_string())
    }
}

impl From<zip::result::ZipError> for ResumeTailorError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeTailorError::OutputFormatting(err.to_string())
    }
}
