//! Minimal OOXML writer for tailored resumes
//!
//! Produces a package Word opens without repair: content types, package
//! relationships, the document body, and just enough styles and numbering
//! for a title, section headings and bulleted lists.

use crate::error::Result;
use crate::output::formatter::text_sections;
use crate::parser::ResumeRecord;
use log::info;
use quick_xml::escape::escape;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/></w:rPr></w:rPrDefault>
<w:pPrDefault><w:pPr><w:spacing w:after="120"/></w:pPr></w:pPrDefault></w:docDefaults>
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/>
<w:pPr><w:spacing w:after="240"/></w:pPr><w:rPr><w:sz w:val="52"/><w:color w:val="17365D"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/>
<w:pPr><w:keepNext/><w:spacing w:before="360" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="28"/><w:color w:val="365F91"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/>
<w:pPr><w:numPr><w:numId w:val="1"/></w:numPr><w:spacing w:after="60"/><w:ind w:left="720" w:hanging="360"/></w:pPr></w:style>
</w:styles>"#;

const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/>
<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/>
<w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>
<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>"#;

#[derive(Debug, Clone, Copy, PartialEq)]
enum RunStyle {
    Plain,
    Bold,
    Italic,
}

/// Accumulates `w:p` elements for the document body.
#[derive(Default)]
struct BodyWriter {
    xml: String,
}

impl BodyWriter {
    fn paragraph(&mut self, style: Option<&str>, runs: &[(RunStyle, &str)]) {
        self.xml.push_str("<w:p>");
        if let Some(style) = style {
            self.xml
                .push_str(&format!("<w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>", style));
        }
        for (run_style, text) in runs {
            if text.is_empty() {
                continue;
            }
            self.xml.push_str("<w:r>");
            match run_style {
                RunStyle::Bold => self.xml.push_str("<w:rPr><w:b/></w:rPr>"),
                RunStyle::Italic => self.xml.push_str("<w:rPr><w:i/></w:rPr>"),
                RunStyle::Plain => {}
            }
            self.xml.push_str("<w:t xml:space=\"preserve\">");
            self.xml.push_str(&escape(*text));
            self.xml.push_str("</w:t></w:r>");
        }
        self.xml.push_str("</w:p>");
    }

    fn text(&mut self, style: Option<&str>, text: &str) {
        self.paragraph(style, &[(RunStyle::Plain, text)]);
    }

    fn heading(&mut self, text: &str) {
        self.text(Some("Heading1"), text);
    }

    /// One paragraph per non-blank line.
    fn block(&mut self, text: &str) {
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            self.text(None, line);
        }
    }

    fn bullets(&mut self, items: &[String]) {
        for item in items {
            self.text(Some("ListBullet"), item);
        }
    }

    /// Bold primary, italic " at secondary", plain " (dates)".
    fn entry(&mut self, primary: Option<&str>, secondary: Option<&str>, dates: Option<&str>) {
        let mut runs: Vec<(RunStyle, String)> = Vec::new();
        if let Some(primary) = primary {
            runs.push((RunStyle::Bold, primary.to_string()));
        }
        if let Some(secondary) = secondary {
            let sep = if runs.is_empty() { "" } else { " at " };
            runs.push((RunStyle::Italic, format!("{}{}", sep, secondary)));
        }
        if let Some(dates) = dates {
            let sep = if runs.is_empty() { "" } else { " " };
            runs.push((RunStyle::Plain, format!("{}({})", sep, dates)));
        }

        let runs: Vec<(RunStyle, &str)> = runs.iter().map(|(style, text)| (*style, text.as_str())).collect();
        self.paragraph(None, &runs);
    }

    fn finish(self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <w:document xmlns:w=\"{}\"><w:body>{}\
             <w:sectPr><w:pgSz w:w=\"12240\" w:h=\"15840\"/>\
             <w:pgMar w:top=\"1080\" w:right=\"1080\" w:bottom=\"1080\" w:left=\"1080\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\
             </w:sectPr></w:body></w:document>",
            WORD_NS, self.xml
        )
    }
}

/// Writes a [`ResumeRecord`] as a `.docx` file.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter;

impl DocxWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn save(&self, resume: &ResumeRecord, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_to(resume, file)?;
        info!("Wrote DOCX resume to {}", path.display());
        Ok(())
    }

    pub fn write_to<W: Write + Seek>(&self, resume: &ResumeRecord, writer: W) -> Result<()> {
        let document = self.document_xml(resume);

        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts: [(&str, &str); 6] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", PACKAGE_RELS_XML),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
            ("word/document.xml", &document),
            ("word/styles.xml", STYLES_XML),
            ("word/numbering.xml", NUMBERING_XML),
        ];
        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
        }
        zip.finish()?;
        Ok(())
    }

    /// Body XML: title, contact line, then each non-empty section.
    pub fn document_xml(&self, resume: &ResumeRecord) -> String {
        let mut body = BodyWriter::default();
        let contact = &resume.contact_info;

        body.text(Some("Title"), &contact.name);
        let details = contact.details();
        if !details.is_empty() {
            body.text(None, &details.join(" | "));
        }

        if !resume.summary.is_empty() {
            body.heading("Professional Summary");
            body.block(&resume.summary);
        }

        if !resume.skills.is_empty() {
            body.heading("Skills");
            body.text(None, &resume.skills.join(", "));
        }

        if !resume.experience.is_empty() {
            body.heading("Work Experience");
            for entry in &resume.experience {
                body.entry(
                    entry.title.as_deref(),
                    entry.company.as_deref(),
                    entry.date_range.as_deref(),
                );
                body.bullets(&entry.description);
            }
        }

        if !resume.education.is_empty() {
            body.heading("Education");
            for entry in &resume.education {
                body.entry(
                    entry.degree.as_deref(),
                    entry.institution.as_deref(),
                    entry.date_range.as_deref(),
                );
                body.bullets(&entry.details);
            }
        }

        for (title, text) in text_sections(resume) {
            if !text.is_empty() {
                body.heading(title);
                body.block(text);
            }
        }

        body.finish()
    }
}
