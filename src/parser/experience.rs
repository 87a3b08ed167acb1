//! Work-history extraction as an explicit scan state machine.
//!
//! A title-shaped line starts an entry. From there the scanner looks ahead
//! for up to three header slots, in order: company, location, date range.
//! Each slot consumes a line only when its heuristic matches, so the cursor
//! position after a header block is fully determined by which slots hit.

use crate::parser::patterns::{find_date_range, has_date_token, has_region_code};
use crate::parser::record::ExperienceEntry;

#[derive(Debug)]
enum ScanState {
    NoOpenEntry,
    EntryOpen(ExperienceEntry),
}

/// Result of probing the lines after a title candidate.
#[derive(Debug)]
struct HeaderBlock {
    entry: ExperienceEntry,
    /// Lines used, including the title itself.
    consumed: usize,
}

impl HeaderBlock {
    /// A location or date slot hit: this really is a new job, not a detail.
    fn is_confirmed(&self) -> bool {
        self.entry.location.is_some() || self.entry.date_range.is_some()
    }
}

/// Short, capitalized and free of sentence punctuation.
pub fn is_title_line(line: &str, max_chars: usize) -> bool {
    line.chars().count() < max_chars
        && line.chars().next().map_or(false, char::is_uppercase)
        && !line.contains(&['.', ':', ',', ';'][..])
}

/// Split multi-line strings and drop blanks.
pub(crate) fn reflatten<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|l| l.as_ref().split('\n'))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn probe_header(lines: &[String], start: usize, max_chars: usize) -> HeaderBlock {
    let mut entry = ExperienceEntry {
        title: Some(lines[start].clone()),
        ..Default::default()
    };
    let mut cursor = start + 1;

    if let Some(line) = lines.get(cursor) {
        if line.chars().count() < max_chars && !has_date_token(line) {
            entry.company = Some(line.clone());
            cursor += 1;
        }
    }

    if let Some(line) = lines.get(cursor) {
        if has_region_code(line) {
            entry.location = Some(line.clone());
            cursor += 1;
        }
    }

    if let Some(line) = lines.get(cursor) {
        if has_date_token(line) {
            let range = find_date_range(line).unwrap_or(line.as_str());
            entry.date_range = Some(range.trim().to_string());
            cursor += 1;
        }
    }

    HeaderBlock {
        entry,
        consumed: cursor - start,
    }
}

/// Scan a work-history bucket into entries.
///
/// Once an entry is open, a title-shaped line starts a new one only when its
/// header block fills a location or date range. A later job listed with just
/// a title and company is folded into the open entry's description.
pub fn extract_experience<S: AsRef<str>>(lines: &[S], max_line_chars: usize) -> Vec<ExperienceEntry> {
    let lines = reflatten(lines);
    let mut entries = Vec::new();
    let mut state = ScanState::NoOpenEntry;
    let mut cursor = 0;

    while cursor < lines.len() {
        let header = if is_title_line(&lines[cursor], max_line_chars) {
            Some(probe_header(&lines, cursor, max_line_chars))
        } else {
            None
        };

        state = match (state, header) {
            (ScanState::NoOpenEntry, Some(block)) => {
                cursor += block.consumed;
                ScanState::EntryOpen(block.entry)
            }
            (ScanState::NoOpenEntry, None) => {
                log::debug!("Skipping experience line before any entry: {}", lines[cursor]);
                cursor += 1;
                ScanState::NoOpenEntry
            }
            (ScanState::EntryOpen(open), Some(block)) if block.is_confirmed() => {
                entries.push(open);
                cursor += block.consumed;
                ScanState::EntryOpen(block.entry)
            }
            (ScanState::EntryOpen(mut open), _) => {
                open.description.push(lines[cursor].clone());
                cursor += 1;
                ScanState::EntryOpen(open)
            }
        };
    }

    if let ScanState::EntryOpen(open) = state {
        entries.push(open);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_header_block() {
        let lines = [
            "Software Engineer",
            "Acme Corp",
            "Austin TX",
            "2019 - 2021",
            "Built backend services",
            "Led a team of 4",
        ];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title.as_deref(), Some("Software Engineer"));
        assert_eq!(entry.company.as_deref(), Some("Acme Corp"));
        assert_eq!(entry.location.as_deref(), Some("Austin TX"));
        assert_eq!(entry.date_range.as_deref(), Some("2019 - 2021"));
        assert_eq!(entry.description, vec!["Built backend services", "Led a team of 4"]);
    }

    #[test]
    fn test_two_entries_close_on_boundary() {
        let lines = [
            "Data Scientist",
            "Beta Inc",
            "Jan 2021 - Present",
            "- Shipped ranking models.",
            "Analyst",
            "Gamma LLC",
            "2018 - 2020",
            "- Wrote reports.",
        ];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Data Scientist"));
        assert_eq!(entries[0].location, None);
        assert_eq!(entries[0].date_range.as_deref(), Some("Jan 2021 - Present"));
        assert_eq!(entries[0].description, vec!["- Shipped ranking models."]);
        assert_eq!(entries[1].company.as_deref(), Some("Gamma LLC"));
        assert_eq!(entries[1].description, vec!["- Wrote reports."]);
    }

    #[test]
    fn test_lookahead_only_advances_on_match() {
        let lines = ["Engineer", "2017 - 2019", "Did things."];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, None);
        assert_eq!(entries[0].location, None);
        assert_eq!(entries[0].date_range.as_deref(), Some("2017 - 2019"));
        assert_eq!(entries[0].description, vec!["Did things."]);
    }

    #[test]
    fn test_date_line_is_not_taken_as_company() {
        let lines = ["Engineer", "Jan 2020 - Present", "Acme Corp"];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, None);
        assert_eq!(entries[0].date_range.as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(entries[0].description, vec!["Acme Corp"]);
    }

    #[test]
    fn test_unconfirmed_title_folds_into_description() {
        let lines = [
            "Software Engineer",
            "Acme Corp",
            "Austin TX",
            "2019 - 2021",
            "Built things",
            "Product Manager",
            "Globex",
            "Led launches",
        ];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Software Engineer"));
        assert_eq!(
            entries[0].description,
            vec!["Built things", "Product Manager", "Globex", "Led launches"]
        );
    }

    #[test]
    fn test_leading_detail_lines_are_skipped() {
        let lines = ["- stray bullet", "worked on things.", "Consultant"];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Consultant"));
        assert!(entries[0].description.is_empty());
    }

    #[test]
    fn test_multiline_strings_are_reflattened() {
        let lines = ["Engineer\nAcme\n\n2020 - 2022", "Wrote code."];
        let entries = extract_experience(&lines, 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.as_deref(), Some("Acme"));
        assert_eq!(entries[0].date_range.as_deref(), Some("2020 - 2022"));
    }

    #[test]
    fn test_empty_bucket() {
        let lines: [&str; 0] = [];
        assert!(extract_experience(&lines, 50).is_empty());
    }

    #[test]
    fn test_title_shape() {
        assert!(is_title_line("Senior Engineer", 50));
        assert!(!is_title_line("senior engineer", 50));
        assert!(!is_title_line("Engineer, Platform", 50));
        assert!(!is_title_line("Responsibilities: many", 50));
    }
}
