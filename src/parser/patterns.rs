//! Declared pattern tables shared by the segmenter and the field extractors.
//!
//! Every list here is ordered; callers test entries front to back and the
//! first hit wins.

use crate::parser::segmenter::SectionKind;
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

/// Section header synonyms in match order.
pub const HEADER_SYNONYMS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Contact,
        &["personal information", "contact", "contact information", "contact details"],
    ),
    (
        SectionKind::Summary,
        &["summary", "professional summary", "profile", "objective"],
    ),
    (
        SectionKind::Skills,
        &["skills", "technical skills", "core competencies", "expertise"],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
        ],
    ),
    (
        SectionKind::Education,
        &["education", "academic", "academic background", "qualifications"],
    ),
    (SectionKind::Projects, &["projects", "personal projects"]),
    (
        SectionKind::Certifications,
        &["certifications", "certificates", "accreditations"],
    ),
    (SectionKind::Languages, &["languages", "language proficiency"]),
    (SectionKind::Interests, &["interests", "hobbies"]),
];

/// Keywords that mark a line as naming a school.
pub const INSTITUTION_KEYWORDS: &[&str] = &["University", "College", "Institute", "School"];

const MONTH: &str = r"Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Optional "in Computer Science" / "of Arts" tail after a degree name.
const DEGREE_FIELD: &str = r"(?:\s+(?:in|of)\s+[A-Z][\w&]*(?:\s+(?:and\s+|&\s+)?[A-Z][\w&]*)*)*";

/// Degree patterns, most specific first. `DEGREE_FIELD` is appended to each.
pub const DEGREE_PATTERNS: &[&str] = &[
    r"\b(?:Ph\.?\s?D\.?|Doctor(?:ate)?\b)",
    r"\b(?:M\.B\.A\.|MBA\b)",
    r"\b(?i:master(?:'s)?)\b(?:\s+(?i:degree))?",
    r"\b(?:M\.S\.|M\.A\.|M\.Sc\.?|MSc\b|MS\b|M\.Eng\.?|MEng\b)",
    r"\b(?i:bachelor(?:'s)?)\b(?:\s+(?i:degree))?",
    r"\b(?:B\.S\.|B\.A\.|B\.Sc\.?|BSc\b|BS\b|BA\b|B\.Eng\.?|BEng\b|B\.Tech\.?|BTech\b)",
    r"\b(?i:associate(?:'s)?)\b(?:\s+(?i:degree))?",
    r"\b(?:A\.A\.|A\.S\.|AAS\b)",
];

/// Header regexes compiled from [`HEADER_SYNONYMS`], same order.
pub static HEADER_PATTERNS: Lazy<Vec<(SectionKind, Regex)>> = Lazy::new(|| {
    HEADER_SYNONYMS
        .iter()
        .map(|(kind, synonyms)| {
            let alternatives = synonyms
                .iter()
                .map(|s| s.split_whitespace().collect::<Vec<_>>().join(r"\s+"))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)^(?:{})\s*:?$", alternatives);
            (*kind, Regex::new(&pattern).expect("Invalid section header regex"))
        })
        .collect()
});

/// A single date-like token: `MM/YYYY`, `MM/DD`, a 4-digit year or a month name.
pub static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&token()).expect("Invalid date token regex"));

fn token() -> String {
    format!(r"\b(?:\d{{1,2}}/\d{{4}}|\d{{1,2}}/\d{{1,2}}|\d{{4}}|{})\b", MONTH)
}

/// "Jan 2019 - Present", "2015-2017", "05/2019 to 06/2021".
static DATE_RANGE_STRICT: Lazy<Regex> = Lazy::new(|| {
    let start = format!(r"{t}(?:[\s,.]+{t})?", t = token());
    let pattern = format!(
        r"{start}\s*(?:-|–|—|\bto\b|\buntil\b)\s*(?:{start}|\b(?i:present|current)\b)",
        start = start
    );
    Regex::new(&pattern).expect("Invalid strict date range regex")
});

/// Any token followed later on the line by another token or present/current.
static DATE_RANGE_LOOSE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"{t}.*?(?:{t}|\b(?i:present|current)\b)", t = token());
    Regex::new(&pattern).expect("Invalid loose date range regex")
});

/// Two uppercase letters standing alone, e.g. the `TX` in "Austin, TX".
pub static REGION_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2}\b").expect("Invalid region code regex"));

pub static DEGREES: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEGREE_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("{}{}", p, DEGREE_FIELD)).expect("Invalid degree regex"))
        .collect()
});

pub static INSTITUTIONS: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(INSTITUTION_KEYWORDS).expect("Invalid institution keyword set")
});

pub fn has_date_token(line: &str) -> bool {
    DATE_TOKEN.is_match(line)
}

/// Raw text of the first date range on the line, if any.
pub fn find_date_range(line: &str) -> Option<&str> {
    DATE_RANGE_STRICT
        .find(line)
        .or_else(|| DATE_RANGE_LOOSE.find(line))
        .map(|m| m.as_str())
}

pub fn has_region_code(line: &str) -> bool {
    REGION_CODE.is_match(line)
}

pub fn has_institution_keyword(line: &str) -> bool {
    INSTITUTIONS.is_match(line)
}

/// First degree match, trying patterns in declared order.
pub fn find_degree(line: &str) -> Option<&str> {
    DEGREES
        .iter()
        .find_map(|re| re.find(line))
        .map(|m| trim_institution_tail(m.as_str().trim()))
}

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("Invalid word regex"));

const FIELD_CONNECTORS: &[&str] = &["in", "of", "and", "&"];

/// Cut a degree's field run before the institution name it ran into: the
/// first institution keyword, plus the capitalized word in front of it
/// unless that word is the start of the field.
fn trim_institution_tail(degree: &str) -> &str {
    let words: Vec<(usize, &str)> = WORD
        .find_iter(degree)
        .map(|m| (m.start(), m.as_str()))
        .collect();

    let keyword = match words
        .iter()
        .position(|(_, w)| INSTITUTION_KEYWORDS.contains(w))
    {
        Some(index) if index > 0 => index,
        _ => return degree,
    };

    let mut cut = keyword;
    if keyword >= 2 && !FIELD_CONNECTORS.contains(&words[keyword - 2].1) {
        cut = keyword - 1;
    }
    while cut > 1 && FIELD_CONNECTORS.contains(&words[cut - 1].1) {
        cut -= 1;
    }

    degree[..words[cut].0].trim_end()
}

/// Remove the first occurrence of `fragment` and tidy what is left.
pub fn excise(line: &str, fragment: &str) -> String {
    let removed = line.replacen(fragment, "", 1);
    let collapsed = removed
        .replace("()", "")
        .replace("[]", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '|' | '-' | '–' | '—' | ':' | ';'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_patterns_follow_declared_order() {
        let kinds: Vec<SectionKind> = HEADER_PATTERNS.iter().map(|(k, _)| *k).collect();
        let declared: Vec<SectionKind> = HEADER_SYNONYMS.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, declared);
        assert_eq!(kinds.len(), 9);
    }

    #[test]
    fn test_date_tokens() {
        assert!(has_date_token("2019"));
        assert!(has_date_token("05/2019"));
        assert!(has_date_token("Started in Sept"));
        assert!(!has_date_token("Marketing lead"));
        assert!(!has_date_token("Led a team of 4"));
    }

    #[test]
    fn test_date_ranges() {
        assert_eq!(find_date_range("2019 - 2021"), Some("2019 - 2021"));
        assert_eq!(find_date_range("MBA Stanford University 2015-2017"), Some("2015-2017"));
        assert_eq!(find_date_range("Jan 2019 - Present"), Some("Jan 2019 - Present"));
        assert_eq!(find_date_range("05/2019 to 06/2021"), Some("05/2019 to 06/2021"));
        assert_eq!(find_date_range("since 2018, current role"), Some("2018, current"));
        assert_eq!(find_date_range("2019"), None);
    }

    #[test]
    fn test_degrees() {
        assert_eq!(find_degree("MBA Stanford University"), Some("MBA"));
        assert_eq!(
            find_degree("Bachelor of Science in Computer Science, MIT"),
            Some("Bachelor of Science in Computer Science")
        );
        assert_eq!(find_degree("Ph.D. in Physics"), Some("Ph.D. in Physics"));
        assert_eq!(find_degree("Stanford University"), None);
    }

    #[test]
    fn test_degree_field_stops_at_institution() {
        assert_eq!(
            find_degree("Master of Science in Computer Science Stanford University 2015"),
            Some("Master of Science in Computer Science")
        );
        assert_eq!(
            find_degree("Bachelor of Arts in History University of Chicago"),
            Some("Bachelor of Arts in History")
        );
    }

    #[test]
    fn test_institution_keywords() {
        assert!(has_institution_keyword("Boston College"));
        assert!(!has_institution_keyword("Acme Corp"));
    }

    #[test]
    fn test_excise_tidies_separators() {
        assert_eq!(excise("MBA Stanford University", "MBA"), "Stanford University");
        assert_eq!(excise("Stanford University (2015-2017)", "2015-2017"), "Stanford University");
        assert_eq!(excise("BS, MIT, 2010", "2010"), "BS, MIT");
    }
}
