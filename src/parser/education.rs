//! Education extraction, same state machine shape as work history.

use crate::parser::experience::reflatten;
use crate::parser::patterns::{excise, find_date_range, find_degree, has_institution_keyword};
use crate::parser::record::EducationEntry;

#[derive(Debug)]
enum ScanState {
    NoOpenEntry,
    EntryOpen(EducationEntry),
}

/// Capitalized short line, a date range, or a school keyword.
pub fn is_entry_boundary(line: &str, max_chars: usize) -> bool {
    let capitalized_short = line.chars().count() < max_chars
        && line.chars().next().map_or(false, char::is_uppercase)
        && !line.contains(&[',', '.'][..]);

    capitalized_short || find_date_range(line).is_some() || has_institution_keyword(line)
}

/// Cut the date range, then the degree; the rest names the institution.
fn open_entry(line: &str) -> EducationEntry {
    let mut rest = line.to_string();

    let date_range = find_date_range(&rest).map(str::to_string);
    if let Some(range) = &date_range {
        rest = excise(&rest, range);
    }

    let degree = find_degree(&rest).map(str::to_string);
    if let Some(degree) = &degree {
        rest = excise(&rest, degree);
    }

    EducationEntry {
        institution: Some(rest).filter(|r| !r.is_empty()),
        degree,
        date_range,
        details: Vec::new(),
    }
}

pub fn extract_education<S: AsRef<str>>(lines: &[S], max_line_chars: usize) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut state = ScanState::NoOpenEntry;

    for line in reflatten(lines) {
        let boundary = is_entry_boundary(&line, max_line_chars);

        state = if boundary {
            if let ScanState::EntryOpen(open) = state {
                entries.push(open);
            }
            ScanState::EntryOpen(open_entry(&line))
        } else {
            match state {
                ScanState::EntryOpen(mut open) => {
                    open.details.push(line);
                    ScanState::EntryOpen(open)
                }
                ScanState::NoOpenEntry => ScanState::NoOpenEntry,
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
    fn test_degree_institution_and_dates_on_one_line() {
        let entries = extract_education(&["MBA Stanford University 2015-2017"], 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree.as_deref(), Some("MBA"));
        assert_eq!(entries[0].institution.as_deref(), Some("Stanford University"));
        assert_eq!(entries[0].date_range.as_deref(), Some("2015-2017"));
    }

    #[test]
    fn test_field_of_study_does_not_swallow_institution() {
        let line = "Master of Science in Computer Science Stanford University 2015-2017";
        let entries = extract_education(&[line], 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].degree.as_deref(),
            Some("Master of Science in Computer Science")
        );
        assert_eq!(entries[0].institution.as_deref(), Some("Stanford University"));
        assert_eq!(entries[0].date_range.as_deref(), Some("2015-2017"));
    }

    #[test]
    fn test_details_attach_to_open_entry() {
        let lines = [
            "University of Texas at Austin",
            "Bachelor of Science in Computer Science, 2010 - 2014",
            "graduated with honors",
            "GPA 3.8/4.0",
        ];
        let entries = extract_education(&lines, 50);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution.as_deref(), Some("University of Texas at Austin"));
        assert_eq!(entries[0].degree, None);
        assert_eq!(
            entries[1].degree.as_deref(),
            Some("Bachelor of Science in Computer Science")
        );
        assert_eq!(entries[1].date_range.as_deref(), Some("2010 - 2014"));
        assert_eq!(entries[1].institution, None);
        assert_eq!(entries[1].details, vec!["graduated with honors", "GPA 3.8/4.0"]);
    }

    #[test]
    fn test_long_institution_line_still_opens_entry() {
        let line = "Massachusetts Institute of Technology, Cambridge, Massachusetts";
        let entries = extract_education(&[line], 50);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution.as_deref(), Some(line));
    }

    #[test]
    fn test_present_marker_counts_as_range() {
        let entries = extract_education(&["Ph.D. in Physics, Caltech, 2020 - present"], 50);

        assert_eq!(entries[0].date_range.as_deref(), Some("2020 - present"));
        assert_eq!(entries[0].degree.as_deref(), Some("Ph.D. in Physics"));
        assert_eq!(entries[0].institution.as_deref(), Some("Caltech"));
    }

    #[test]
    fn test_lines_before_first_entry_are_skipped() {
        let entries = extract_education(&["coursework in algorithms"], 50);
        assert!(entries.is_empty());
    }
}
