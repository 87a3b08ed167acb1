//! CLI interface for the resume tailor

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for resumes.
pub const RESUME_EXTENSIONS: &[&str] = &["docx", "pdf", "txt", "md", "markdown"];

/// Extensions accepted for job listings.
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "docx", "pdf"];

#[derive(Parser)]
#[command(name = "resume-tailor")]
#[command(about = "Parse resumes into structured records and tailor them to a job listing")]
#[command(long_about = "Split a resume into contact, summary, skills, experience and education, \
then optionally rewrite it for a specific job listing with Gemini")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume and print its structure
    Parse {
        /// Path to resume file (DOCX, PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html (defaults to config)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Tailor a resume to a job listing
    Optimize {
        /// Path to resume file (DOCX, PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job listing file (TXT, MD, DOCX, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Write the tailored resume as DOCX (defaults to <resume>_optimized.docx in the output dir)
        #[arg(long)]
        output_docx: Option<PathBuf>,

        /// Output format: console, json, markdown, html (defaults to config)
        #[arg(short, long)]
        output: Option<String>,

        /// Save rendered output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
