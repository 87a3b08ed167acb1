//! Resume renderers: console, JSON, Markdown and HTML

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeTailorError};
use crate::llm::job_analyzer::JobAnalysis;
use crate::llm::optimizer::OptimizedResume;
use crate::parser::{EducationEntry, ExperienceEntry, ResumeRecord};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// What a resume was tailored against, shown after the resume itself.
#[derive(Debug, Clone, Copy)]
pub struct Tailoring<'a> {
    pub job_analysis: &'a JobAnalysis,
    pub warning: Option<&'a str>,
}

impl<'a> From<&'a OptimizedResume> for Tailoring<'a> {
    fn from(optimized: &'a OptimizedResume) -> Self {
        Self {
            job_analysis: &optimized.job_analysis,
            warning: optimized.warning.as_deref(),
        }
    }
}

pub trait ResumeFormatter {
    fn format_resume(&self, resume: &ResumeRecord, tailoring: Option<Tailoring<'_>>) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// "Title at Company (dates)", leaving out whatever is missing.
pub(crate) fn entry_heading(primary: Option<&str>, secondary: Option<&str>, dates: Option<&str>) -> String {
    let mut heading = primary.unwrap_or_default().to_string();
    if let Some(secondary) = secondary {
        if heading.is_empty() {
            heading.push_str(secondary);
        } else {
            heading.push_str(" at ");
            heading.push_str(secondary);
        }
    }
    if let Some(dates) = dates {
        if !heading.is_empty() {
            heading.push(' ');
        }
        heading.push_str(&format!("({})", dates));
    }
    heading
}

pub(crate) fn experience_heading(entry: &ExperienceEntry) -> String {
    let mut heading = entry_heading(
        entry.title.as_deref(),
        entry.company.as_deref(),
        entry.date_range.as_deref(),
    );
    if let Some(location) = &entry.location {
        heading.push_str(&format!(" | {}", location));
    }
    heading
}

pub(crate) fn education_heading(entry: &EducationEntry) -> String {
    entry_heading(
        entry.degree.as_deref(),
        entry.institution.as_deref(),
        entry.date_range.as_deref(),
    )
}

/// Pass-through sections in display order.
pub(crate) fn text_sections(resume: &ResumeRecord) -> [(&'static str, &str); 4] {
    [
        ("Projects", resume.projects.as_str()),
        ("Certifications", resume.certifications.as_str()),
        ("Languages", resume.languages.as_str()),
        ("Interests", resume.interests.as_str()),
    ]
}

fn job_lists(job: &JobAnalysis) -> [(&'static str, &[String]); 5] {
    [
        ("Required Skills", job.required_skills.as_slice()),
        ("Responsibilities", job.responsibilities.as_slice()),
        ("Company Values", job.company_values.as_slice()),
        ("Keywords", job.keywords.as_slice()),
        ("Preferred Qualifications", job.preferred_qualifications.as_slice()),
    ]
}

/// Colored terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }
}

impl ResumeFormatter for ConsoleFormatter {
    fn format_resume(&self, resume: &ResumeRecord, tailoring: Option<Tailoring<'_>>) -> Result<String> {
        let mut output = String::new();
        let contact = &resume.contact_info;

        let name = if contact.name.is_empty() { "📄 RESUME" } else { contact.name.as_str() };
        output.push_str(&self.format_header(name, 1));
        let details = contact.details();
        if !details.is_empty() {
            output.push_str(&self.colorize(&details.join(" | "), Color::Cyan));
            output.push('\n');
        }

        if let Some(warning) = tailoring.and_then(|t| t.warning) {
            output.push_str(&format!("\n⚠️  {}\n", self.colorize(warning, Color::Yellow)));
        }

        if !resume.summary.is_empty() {
            output.push_str(&self.format_header("Professional Summary", 2));
            output.push_str(&resume.summary);
            output.push('\n');
        }

        if !resume.skills.is_empty() {
            output.push_str(&self.format_header("Skills", 2));
            output.push_str(&resume.skills.join(", "));
            output.push('\n');
        }

        if !resume.experience.is_empty() {
            output.push_str(&self.format_header("Work Experience", 2));
            for entry in &resume.experience {
                output.push_str(&format!("{}\n", self.colorize(&experience_heading(entry), Color::Cyan)));
                for line in &entry.description {
                    output.push_str(&format!("  • {}\n", line));
                }
            }
        }

        if !resume.education.is_empty() {
            output.push_str(&self.format_header("Education", 2));
            for entry in &resume.education {
                output.push_str(&format!("{}\n", self.colorize(&education_heading(entry), Color::Cyan)));
                for line in &entry.details {
                    output.push_str(&format!("  • {}\n", line));
                }
            }
        }

        for (title, text) in text_sections(resume) {
            if !text.is_empty() {
                output.push_str(&self.format_header(title, 2));
                output.push_str(text);
                output.push('\n');
            }
        }

        if let Some(tailoring) = tailoring {
            output.push_str(&self.format_header("🎯 Job Analysis", 2));
            for (title, items) in job_lists(tailoring.job_analysis) {
                if items.is_empty() {
                    continue;
                }
                output.push_str(&self.format_header(title, 3));
                for item in items {
                    output.push_str(&format!("  • {}\n", self.colorize(item, Color::Green)));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ResumeFormatter for JsonFormatter {
    fn format_resume(&self, resume: &ResumeRecord, tailoring: Option<Tailoring<'_>>) -> Result<String> {
        let value = match tailoring {
            Some(tailoring) => serde_json::json!({
                "resume": resume,
                "job_analysis": tailoring.job_analysis,
                "warning": tailoring.warning,
            }),
            None => serde_json::to_value(resume)?,
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Markdown output
pub struct MarkdownFormatter;

impl ResumeFormatter for MarkdownFormatter {
    fn format_resume(&self, resume: &ResumeRecord, tailoring: Option<Tailoring<'_>>) -> Result<String> {
        let mut output = String::new();
        let contact = &resume.contact_info;

        let name = if contact.name.is_empty() { "Resume" } else { contact.name.as_str() };
        output.push_str(&format!("# {}\n\n", name));
        let details = contact.details();
        if !details.is_empty() {
            output.push_str(&format!("{}\n\n", details.join(" | ")));
        }

        if let Some(warning) = tailoring.and_then(|t| t.warning) {
            output.push_str(&format!("> ⚠️ {}\n\n", warning));
        }

        if !resume.summary.is_empty() {
            output.push_str(&format!("## Professional Summary\n\n{}\n\n", resume.summary));
        }

        if !resume.skills.is_empty() {
            output.push_str(&format!("## Skills\n\n{}\n\n", resume.skills.join(", ")));
        }

        if !resume.experience.is_empty() {
            output.push_str("## Work Experience\n\n");
            for entry in &resume.experience {
                output.push_str(&format!("### {}\n\n", experience_heading(entry)));
                for line in &entry.description {
                    output.push_str(&format!("- {}\n", line));
                }
                output.push('\n');
            }
        }

        if !resume.education.is_empty() {
            output.push_str("## Education\n\n");
            for entry in &resume.education {
                output.push_str(&format!("### {}\n\n", education_heading(entry)));
                for line in &entry.details {
                    output.push_str(&format!("- {}\n", line));
                }
                output.push('\n');
            }
        }

        for (title, text) in text_sections(resume) {
            if !text.is_empty() {
                output.push_str(&format!("## {}\n\n{}\n\n", title, text));
            }
        }

        if let Some(tailoring) = tailoring {
            output.push_str("---\n\n## 🎯 Job Analysis\n\n");
            for (title, items) in job_lists(tailoring.job_analysis) {
                if items.is_empty() {
                    continue;
                }
                output.push_str(&format!("**{}:**\n\n", title));
                for item in items {
                    output.push_str(&format!("- {}\n", item));
                }
                output.push('\n');
            }
        }

        Ok(output.trim_end().to_string() + "\n")
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

struct HtmlEntry {
    heading: String,
    items: Vec<String>,
}

struct HtmlSection {
    title: String,
    body: String,
}

struct HtmlList {
    title: String,
    items: Vec<String>,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { margin-bottom: 4px; color: #2c3e50; }
        h2 { color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 4px; }
        .contact { color: #555; }
        .warning { background: #fff3cd; border-left: 4px solid #ffc107; padding: 10px 15px; }
        .entry-heading { font-weight: 600; margin: 12px 0 4px; }
        .section-text { white-space: pre-line; }
        .job-analysis { background: #eef6fc; padding: 15px 20px; border-radius: 6px; margin-top: 30px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{ name }}</h1>
        {% if has_contact %}<p class="contact">{{ contact }}</p>{% endif %}
        {% if has_warning %}<p class="warning">⚠️ {{ warning }}</p>{% endif %}
        {% if has_summary %}
        <h2>Professional Summary</h2>
        <p>{{ summary }}</p>
        {% endif %}
        {% if has_skills %}
        <h2>Skills</h2>
        <p>{{ skills }}</p>
        {% endif %}
        {% if has_experience %}
        <h2>Work Experience</h2>
        {% for entry in experience %}
        <p class="entry-heading">{{ entry.heading }}</p>
        <ul>{% for item in entry.items %}<li>{{ item }}</li>{% endfor %}</ul>
        {% endfor %}
        {% endif %}
        {% if has_education %}
        <h2>Education</h2>
        {% for entry in education %}
        <p class="entry-heading">{{ entry.heading }}</p>
        <ul>{% for item in entry.items %}<li>{{ item }}</li>{% endfor %}</ul>
        {% endfor %}
        {% endif %}
        {% for section in sections %}
        <h2>{{ section.title }}</h2>
        <p class="section-text">{{ section.body }}</p>
        {% endfor %}
        {% if has_job_analysis %}
        <div class="job-analysis">
            <h2>🎯 Job Analysis</h2>
            {% for group in analysis %}
            <h3>{{ group.title }}</h3>
            <ul>{% for item in group.items %}<li>{{ item }}</li>{% endfor %}</ul>
            {% endfor %}
        </div>
        {% endif %}
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    name: String,
    contact: String,
    has_contact: bool,
    warning: String,
    has_warning: bool,
    summary: String,
    has_summary: bool,
    skills: String,
    has_skills: bool,
    experience: Vec<HtmlEntry>,
    has_experience: bool,
    education: Vec<HtmlEntry>,
    has_education: bool,
    sections: Vec<HtmlSection>,
    analysis: Vec<HtmlList>,
    has_job_analysis: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter;

impl HtmlFormatter {
    fn create_template_data(resume: &ResumeRecord, tailoring: Option<Tailoring<'_>>) -> HtmlTemplate {
        let contact = &resume.contact_info;
        let name = if contact.name.is_empty() {
            "Resume".to_string()
        } else {
            contact.name.clone()
        };
        let warning = tailoring.and_then(|t| t.warning).unwrap_or_default().to_string();

        let experience: Vec<HtmlEntry> = resume
            .experience
            .iter()
            .map(|e| HtmlEntry {
                heading: experience_heading(e),
                items: e.description.clone(),
            })
            .collect();
        let education: Vec<HtmlEntry> = resume
            .education
            .iter()
            .map(|e| HtmlEntry {
                heading: education_heading(e),
                items: e.details.clone(),
            })
            .collect();
        let sections: Vec<HtmlSection> = text_sections(resume)
            .into_iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(title, text)| HtmlSection {
                title: title.to_string(),
                body: text.to_string(),
            })
            .collect();
        let analysis: Vec<HtmlList> = tailoring
            .map(|t| {
                job_lists(t.job_analysis)
                    .into_iter()
                    .filter(|(_, items)| !items.is_empty())
                    .map(|(title, items)| HtmlList {
                        title: title.to_string(),
                        items: items.to_vec(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        HtmlTemplate {
            name,
            contact: contact.details().join(" | "),
            has_contact: !contact.details().is_empty(),
            has_warning: !warning.is_empty(),
            warning,
            summary: resume.summary.clone(),
            has_summary: !resume.summary.is_empty(),
            skills: resume.skills.join(", "),
            has_skills: !resume.skills.is_empty(),
            has_experience: !experience.is_empty(),
            experience,
            has_education: !education.is_empty(),
            education,
            sections,
            analysis,
            has_job_analysis: tailoring.is_some(),
        }
    }
}

impl ResumeFormatter for HtmlFormatter {
    fn format_resume(&self, resume: &ResumeRecord, tailoring: Option<Tailoring<'_>>) -> Result<String> {
        Self::create_template_data(resume, tailoring)
            .render()
            .map_err(|e| ResumeTailorError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

/// Dispatches to the formatter for a given [`OutputFormat`].
pub struct ResumeRenderer {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

impl Default for ResumeRenderer {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}

impl ResumeRenderer {
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output),
            json_formatter: JsonFormatter::new(config.pretty_json),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter,
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn ResumeFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn render(&self, resume: &ResumeRecord, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_resume(resume, None)
    }

    pub fn render_optimized(&self, optimized: &OptimizedResume, format: OutputFormat) -> Result<String> {
        self.formatter(format)
            .format_resume(&optimized.resume, Some(Tailoring::from(optimized)))
    }
}

pub fn save_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// `<stem>_optimized[_<timestamp>].<extension>`
pub fn suggest_filename(resume_path: &Path, extension: &str, timestamp: bool) -> String {
    let base_name = resume_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!("{}_optimized{}.{}", base_name, timestamp_suffix, extension)
}
