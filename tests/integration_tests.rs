//! Integration tests for the resume tailor

use resume_tailor::error::{DocumentReadError, ParseError, ResumeTailorError};
use resume_tailor::input::InputManager;
use resume_tailor::output::DocxWriter;
use resume_tailor::parser::{ResumeParser, SectionKind, SectionSegmenter};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::FileOptions;
use zip::ZipWriter;

fn paragraph(text: &str) -> String {
    format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", text)
}

fn cell(text: &str) -> String {
    format!("<w:tc><w:tcPr><w:tcW w:w=\"2000\" w:type=\"dxa\"/></w:tcPr>{}</w:tc>", paragraph(text))
}

/// Writes a DOCX containing `body` (already-built `w:body` children).
fn write_docx(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    write!(
        zip,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    )
    .unwrap();
    zip.finish().unwrap();
    path
}

#[test]
fn test_parse_text_resume() {
    let record = ResumeParser::default()
        .parse(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();

    assert_eq!(record.contact_info.name, "Jane Doe");
    assert_eq!(record.contact_info.email.as_deref(), Some("jane.doe@example.com"));
    assert_eq!(
        record.contact_info.linkedin.as_deref(),
        Some("https://linkedin.com/in/janedoe")
    );
    assert_eq!(
        record.summary,
        "Backend engineer with eight years of experience building reliable services."
    );
    assert_eq!(
        record.skills,
        vec!["Rust", "Python", "SQL", "Kubernetes", "Leadership"]
    );

    assert_eq!(record.experience.len(), 2);
    let first = &record.experience[0];
    assert_eq!(first.title.as_deref(), Some("Senior Software Engineer"));
    assert_eq!(first.company.as_deref(), Some("Acme Corp"));
    assert_eq!(first.location.as_deref(), Some("Austin TX"));
    assert_eq!(first.date_range.as_deref(), Some("Jan 2019 - Present"));
    assert_eq!(
        first.description,
        vec!["Designed the billing pipeline", "Mentored four engineers"]
    );
    assert_eq!(record.experience[1].company.as_deref(), Some("Globex"));
    assert_eq!(record.experience[1].description, vec!["Built internal tooling"]);

    assert_eq!(record.education.len(), 2);
    assert_eq!(record.education[0].degree.as_deref(), Some("MBA"));
    assert_eq!(record.education[0].institution.as_deref(), Some("Stanford University"));
    assert_eq!(record.education[0].date_range.as_deref(), Some("2015-2017"));
    assert_eq!(
        record.education[1].degree.as_deref(),
        Some("Bachelor of Science in Computer Science")
    );
    assert_eq!(record.education[1].institution.as_deref(), Some("Boston College"));
    assert_eq!(record.education[1].details, vec!["GPA 3.8, Dean's list"]);

    assert_eq!(record.certifications, "AWS Solutions Architect");
    assert_eq!(record.interests, "Chess, cycling");
    assert!(record.other.is_empty());
}

#[test]
fn test_parse_markdown_resume() {
    let record = ResumeParser::default()
        .parse(Path::new("tests/fixtures/sample_resume.md"))
        .unwrap();

    assert_eq!(record.contact_info.name, "Jane Doe");
    assert_eq!(record.skills, vec!["Rust", "Python", "SQL"]);
    assert!(!record.summary.contains("**"));
    assert!(record.summary.contains("eight years"));
    assert_eq!(record.experience.len(), 1);
    assert_eq!(record.experience[0].description.len(), 2);
    assert_eq!(record.other, "Jane Doe");
}

#[test]
fn test_docx_tables_follow_body_paragraphs() {
    let dir = TempDir::new().unwrap();
    let table = format!(
        "<w:tbl><w:tr>{}{}</w:tr><w:tr>{}{}</w:tr></w:tbl>",
        cell("Skills"),
        cell("Rust, Go"),
        cell("Interests"),
        cell("Chess")
    );
    let body = format!(
        "{}{}{}{}",
        paragraph("Jane Doe"),
        table,
        paragraph("Summary"),
        paragraph("Backend engineer.")
    );
    let path = write_docx(&dir, "table.docx", &body);

    let content = InputManager::new().read_document(&path).unwrap();
    assert_eq!(content.paragraphs, vec!["Jane Doe", "Summary", "Backend engineer."]);
    assert_eq!(content.tables.len(), 1);
    assert_eq!(content.tables[0].rows.len(), 2);

    let record = ResumeParser::default().parse(&path).unwrap();
    assert_eq!(
        record.raw_text,
        "Jane Doe\nSummary\nBackend engineer.\nSkills\nRust, Go\nInterests\nChess"
    );
    assert_eq!(record.summary, "Backend engineer.");
    assert_eq!(record.skills, vec!["Rust", "Go"]);
    assert_eq!(record.interests, "Chess");
    assert_eq!(record.other, "Jane Doe");
}

#[test]
fn test_corrupt_docx_is_a_document_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    match ResumeParser::default().parse(&path) {
        Err(ParseError::DocumentRead { path: failed, source }) => {
            assert_eq!(failed, path);
            assert!(matches!(source, DocumentReadError::Archive(_)));
        }
        other => panic!("expected DocumentRead error, got {:?}", other),
    }
}

#[test]
fn test_docx_without_document_part() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.docx");
    let mut zip = ZipWriter::new(std::fs::File::create(&path).unwrap());
    zip.start_file("word/styles.xml", FileOptions::default()).unwrap();
    zip.write_all(b"<w:styles/>").unwrap();
    zip.finish().unwrap();

    let err = ResumeParser::default().parse(&path).unwrap_err();
    let ParseError::DocumentRead { source, .. } = err;
    assert!(matches!(source, DocumentReadError::MissingPart(_)));
}

#[test]
fn test_missing_and_unsupported_files() {
    let parser = ResumeParser::default();

    let missing = parser.parse(Path::new("tests/fixtures/does_not_exist.txt"));
    assert!(matches!(
        missing,
        Err(ParseError::DocumentRead { source: DocumentReadError::Io(_), .. })
    ));

    let unsupported = parser.parse(Path::new("tests/fixtures/resume.xyz"));
    assert!(matches!(
        unsupported,
        Err(ParseError::DocumentRead { source: DocumentReadError::UnsupportedFormat(_), .. })
    ));
}

#[test]
fn test_written_docx_reparses_to_same_skills_and_summary() {
    let dir = TempDir::new().unwrap();
    let parser = ResumeParser::default();
    let original = parser
        .parse(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();

    let path = dir.path().join("out").join("tailored.docx");
    DocxWriter::new().save(&original, &path).unwrap();

    let reparsed = parser.parse(&path).unwrap();
    assert_eq!(reparsed.skills, original.skills);
    assert_eq!(reparsed.summary, original.summary);
    assert_eq!(reparsed.certifications, original.certifications);
    assert_eq!(reparsed.interests, original.interests);
}

#[test]
fn test_segmentation_preserves_every_line() {
    let text = std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let sections = SectionSegmenter::default().segment(&lines);

    let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();
    let bucketed: usize = SectionKind::ALL
        .iter()
        .map(|kind| sections.bucket(*kind).len())
        .sum();
    assert_eq!(bucketed + sections.header_count(), non_blank);
    assert_eq!(sections.header_count(), 7);
}

#[test]
fn test_job_listing_is_read_as_text() {
    let manager = InputManager::new();
    let text = manager
        .read_job_listing(Path::new("tests/fixtures/job_listing.txt"))
        .unwrap();
    assert!(text.contains("Kubernetes"));

    let missing = manager.read_job_listing(Path::new("tests/fixtures/no_job.txt"));
    assert!(matches!(missing, Err(ResumeTailorError::InvalidInput(_))));
}
