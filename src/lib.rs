//! Resume tailor library
//!
//! [`parser::ResumeParser`] turns a resume document into a
//! [`parser::ResumeRecord`]; the `llm` module tailors that record to a job
//! listing and `output` renders or writes it back out.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::{ParseError, Result, ResumeTailorError};
pub use parser::{ResumeParser, ResumeRecord};
