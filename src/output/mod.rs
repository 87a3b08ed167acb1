//! Output module: rendered views of a resume and the DOCX writer

pub mod docx_writer;
pub mod formatter;

pub use docx_writer::DocxWriter;
pub use formatter::{
    save_to_file, suggest_filename, ConsoleFormatter, HtmlFormatter, JsonFormatter,
    MarkdownFormatter, ResumeFormatter, ResumeRenderer, Tailoring,
};
