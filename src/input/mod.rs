//! Input processing module
//! Handles file detection and reading resume documents into paragraphs and tables

pub mod document;
pub mod docx_reader;
pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use document::{DocumentContent, Table, TableCell, TableRow};
pub use manager::InputManager;
