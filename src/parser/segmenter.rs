//! Section segmentation: bucket lines under the most recent section header.

use crate::parser::patterns::HEADER_PATTERNS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest line (in characters, exclusive) still considered a header.
pub const DEFAULT_MAX_HEADER_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Contact,
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
    Languages,
    Interests,
    Other,
}

impl SectionKind {
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Contact,
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Languages,
        SectionKind::Interests,
        SectionKind::Other,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Contact => "Contact",
            SectionKind::Summary => "Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Languages => "Languages",
            SectionKind::Interests => "Interests",
            SectionKind::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// What the segmenter decided about one non-blank line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineRole {
    Header(SectionKind),
    Content(SectionKind),
}

/// Lines bucketed by section, plus the ordered trace of every decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    buckets: [Vec<String>; 10],
    trace: Vec<(String, LineRole)>,
}

impl Sections {
    pub fn bucket(&self, kind: SectionKind) -> &[String] {
        &self.buckets[kind.index()]
    }

    /// Bucket lines joined with newlines.
    pub fn joined(&self, kind: SectionKind) -> String {
        self.bucket(kind).join("\n")
    }

    /// Every non-blank input line in order, tagged header or content.
    pub fn trace(&self) -> &[(String, LineRole)] {
        &self.trace
    }

    pub fn header_count(&self) -> usize {
        self.trace
            .iter()
            .filter(|(_, role)| matches!(role, LineRole::Header(_)))
            .count()
    }
}

/// Header recognizer; the only state during a scan is the current section.
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    max_header_chars: usize,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEADER_CHARS)
    }
}

impl SectionSegmenter {
    pub fn new(max_header_chars: usize) -> Self {
        Self { max_header_chars }
    }

    /// Header kind for a trimmed line, if it is one.
    pub fn header_kind(&self, line: &str) -> Option<SectionKind> {
        if line.chars().count() >= self.max_header_chars {
            return None;
        }
        HEADER_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(line))
            .map(|(kind, _)| *kind)
    }

    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> Sections {
        let mut sections = Sections::default();
        let mut current = SectionKind::Other;

        for line in lines.iter().flat_map(|l| l.as_ref().split('\n')) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.header_kind(line) {
                Some(kind) => {
                    current = kind;
                    sections.trace.push((line.to_string(), LineRole::Header(kind)));
                }
                None => {
                    sections.buckets[current.index()].push(line.to_string());
                    sections.trace.push((line.to_string(), LineRole::Content(current)));
                }
            }
        }

        log::debug!(
            "Segmented {} lines, {} section headers",
            sections.trace.len(),
            sections.header_count()
        );
        sections
    }
}
