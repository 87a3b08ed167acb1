//! Resume structural parser
//!
//! document → lines → section buckets → field extractors → [`ResumeRecord`].
//! Parsing holds no state between calls; the only failure is an unreadable
//! document.

pub mod contact;
pub mod education;
pub mod experience;
pub mod linearizer;
pub mod patterns;
pub mod record;
pub mod segmenter;
pub mod skills;

pub use record::{ContactInfo, EducationEntry, ExperienceEntry, ResumeRecord};
pub use segmenter::{SectionKind, SectionSegmenter, Sections};

use crate::config::ParsingConfig;
use crate::error::ParseError;
use crate::input::document::DocumentContent;
use crate::input::manager::InputManager;
use log::{debug, info};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ResumeParser {
    segmenter: SectionSegmenter,
    max_line_chars: usize,
    input: InputManager,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

impl ResumeParser {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            segmenter: SectionSegmenter::new(config.max_header_chars),
            max_line_chars: config.max_line_chars,
            input: InputManager::new(),
        }
    }

    /// Read and parse the resume at `path`.
    pub fn parse(&self, path: &Path) -> Result<ResumeRecord, ParseError> {
        let document = self
            .input
            .read_document(path)
            .map_err(|source| ParseError::DocumentRead {
                path: path.to_path_buf(),
                source,
            })?;

        let record = self.parse_document(&document);
        info!(
            "Parsed resume {}: {} skills, {} jobs, {} schools",
            path.display(),
            record.skills.len(),
            record.experience.len(),
            record.education.len()
        );
        Ok(record)
    }

    pub fn parse_document(&self, document: &DocumentContent) -> ResumeRecord {
        let lines = linearizer::linearize(document);
        self.parse_lines(&lines)
    }

    /// Parse an already linearized line sequence.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> ResumeRecord {
        let raw_text = lines.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join("\n");
        let sections = self.segmenter.segment(lines);

        for kind in SectionKind::ALL {
            debug!("{} bucket: {} lines", kind, sections.bucket(kind).len());
        }

        let max = self.max_line_chars;
        record::assemble(
            &sections,
            contact::extract_contact(sections.bucket(SectionKind::Contact), max),
            skills::extract_skills(sections.bucket(SectionKind::Skills), max),
            experience::extract_experience(sections.bucket(SectionKind::Experience), max),
            education::extract_education(sections.bucket(SectionKind::Education), max),
            raw_text,
        )
    }
}
