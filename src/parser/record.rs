//! Structured resume record types and the final assembly step.

use crate::parser::segmenter::{SectionKind, Sections};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Empty when the first contact line is missing or too long.
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.linkedin.is_none()
            && self.website.is_none()
    }

    /// Present fields other than the name, in display order.
    pub fn details(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.linkedin, &self.website]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Raw matched text, never parsed into dates.
    pub date_range: Option<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub date_range: Option<String>,
    pub details: Vec<String>,
}

/// Everything one parse recovers from a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub contact_info: ContactInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: String,
    pub certifications: String,
    pub languages: String,
    pub interests: String,
    pub other: String,
    /// The full linearized text, newline-joined.
    pub raw_text: String,
}

/// Pure merge of extractor output and pass-through buckets.
pub fn assemble(
    sections: &Sections,
    contact_info: ContactInfo,
    skills: Vec<String>,
    experience: Vec<ExperienceEntry>,
    education: Vec<EducationEntry>,
    raw_text: String,
) -> ResumeRecord {
    ResumeRecord {
        contact_info,
        summary: sections.joined(SectionKind::Summary),
        skills,
        experience,
        education,
        projects: sections.joined(SectionKind::Projects),
        certifications: sections.joined(SectionKind::Certifications),
        languages: sections.joined(SectionKind::Languages),
        interests: sections.joined(SectionKind::Interests),
        other: sections.joined(SectionKind::Other),
        raw_text,
    }
}
