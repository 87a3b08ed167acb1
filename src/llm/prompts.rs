//! Prompt templates for job analysis and summary rewriting

/// Prompt templates with `{placeholder}` slots
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub job_analysis: String,
    pub summary_rewrite: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            job_analysis: JOB_ANALYSIS_TEMPLATE.to_string(),
            summary_rewrite: SUMMARY_REWRITE_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for the summary rewrite prompt
#[derive(Debug, Clone)]
pub struct SummaryParams<'a> {
    pub summary: &'a str,
    pub skills: &'a [String],
    pub job_json: &'a str,
}

impl PromptTemplates {
    pub fn render_job_analysis(&self, job_text: &str) -> String {
        let prompt = self.job_analysis.replace("{job_text}", job_text.trim());
        log::debug!("Job analysis prompt: {} chars", prompt.len());
        prompt
    }

    pub fn render_summary_rewrite(&self, params: &SummaryParams<'_>) -> String {
        let summary = if params.summary.trim().is_empty() {
            "(none provided)"
        } else {
            params.summary.trim()
        };

        let prompt = self
            .summary_rewrite
            .replace("{summary}", summary)
            .replace("{skills}", &params.skills.join(", "))
            .replace("{job_json}", params.job_json);
        log::debug!("Summary rewrite prompt: {} chars", prompt.len());
        prompt
    }
}

const JOB_ANALYSIS_TEMPLATE: &str = r#"You are an expert job analyzer. Extract from this job listing:
1. Required skills and qualifications
2. Key responsibilities
3. Company values and culture indicators
4. Industry-specific keywords and terminology
5. Preferred qualifications

Respond with ONLY a JSON object, no prose, using exactly these keys:
{"required_skills": [], "responsibilities": [], "company_values": [], "keywords": [], "preferred_qualifications": []}
Each value is an array of short strings.

Job Listing:
"""
{job_text}
""""#;

const SUMMARY_REWRITE_TEMPLATE: &str = r#"You are a professional resume consultant. Rewrite the candidate's professional summary so it aligns with the job below.
Keep it truthful: do not invent employers, degrees or years of experience. Use two to four sentences and work in the job's keywords where they fit naturally.

Current summary:
{summary}

Candidate skills:
{skills}

Job listing analysis (JSON):
{job_json}

Respond with the rewritten summary as plain text only, without a heading, quotes or Markdown."#;
