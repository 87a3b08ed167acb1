//! Resume tailoring: skill merge plus an LLM-rewritten summary

use crate::llm::job_analyzer::JobAnalysis;
use crate::llm::prompts::{PromptTemplates, SummaryParams};
use crate::llm::{strip_json_fences, GenerationParams, TextGenerator};
use crate::parser::ResumeRecord;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strsim::normalized_levenshtein;

/// Two normalized skill names at least this similar are the same skill.
const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Job requirements longer than this are sentences, not skills.
const MAX_SKILL_CHARS: usize = 50;

/// A tailored resume and what it was tailored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedResume {
    pub resume: ResumeRecord,
    pub job_analysis: JobAnalysis,
    /// Set when part of the tailoring fell back to the original content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub struct ResumeOptimizer {
    generator: Arc<dyn TextGenerator>,
    templates: PromptTemplates,
    params: GenerationParams,
}

impl ResumeOptimizer {
    pub fn new(generator: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        Self {
            generator,
            templates: PromptTemplates::default(),
            params,
        }
    }

    /// Never fails: a generator problem keeps the original summary and sets `warning`.
    pub async fn optimize(&self, resume: &ResumeRecord, job: &JobAnalysis) -> OptimizedResume {
        let mut tailored = resume.clone();
        tailored.skills = merge_skills(&resume.skills, &job.required_skills);
        info!(
            "Merged skills: {} on resume, {} after tailoring",
            resume.skills.len(),
            tailored.skills.len()
        );

        let mut warning = None;
        match self.rewrite_summary(&tailored, job).await {
            Ok(summary) => tailored.summary = summary,
            Err(reason) => {
                warn!("Summary rewrite failed, keeping original: {}", reason);
                warning = Some(format!(
                    "Summary could not be rewritten ({}). The original summary was kept.",
                    reason
                ));
            }
        }

        OptimizedResume {
            resume: tailored,
            job_analysis: job.clone(),
            warning,
        }
    }

    async fn rewrite_summary(&self, resume: &ResumeRecord, job: &JobAnalysis) -> Result<String, String> {
        let job_json = serde_json::to_string_pretty(job).map_err(|e| e.to_string())?;
        let prompt = self.templates.render_summary_rewrite(&SummaryParams {
            summary: &resume.summary,
            skills: &resume.skills,
            job_json: &job_json,
        });

        let response = self
            .generator
            .generate(&prompt, &self.params)
            .await
            .map_err(|e| e.to_string())?;

        let summary = clean_summary(&response);
        if summary.is_empty() {
            return Err("the model returned an empty summary".to_string());
        }
        Ok(summary)
    }
}

/// Resume skills that match a job skill first, then the other resume skills,
/// then job skills the resume lacks. Duplicates are dropped by
/// [`same_skill`], keeping the first spelling seen.
pub fn merge_skills(resume_skills: &[String], job_skills: &[String]) -> Vec<String> {
    let job_skills: Vec<&str> = job_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && s.chars().count() < MAX_SKILL_CHARS)
        .collect();

    let (matched, unmatched): (Vec<&str>, Vec<&str>) = resume_skills
        .iter()
        .map(|s| s.as_str())
        .partition(|skill| job_skills.iter().any(|job| same_skill(skill, job)));

    let mut merged: Vec<String> = Vec::new();
    for skill in matched.into_iter().chain(unmatched).chain(job_skills) {
        if !merged.iter().any(|existing| same_skill(existing, skill)) {
            merged.push(skill.to_string());
        }
    }
    merged
}

/// Case-insensitive, punctuation-blind comparison with a small typo allowance.
pub fn same_skill(a: &str, b: &str) -> bool {
    let a = normalize_skill(a);
    let b = normalize_skill(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || normalized_levenshtein(&a, &b) >= SIMILARITY_THRESHOLD
}

fn normalize_skill(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '+' | '#'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn clean_summary(response: &str) -> String {
    let text = strip_json_fences(response);
    let text = text
        .strip_prefix("Summary:")
        .or_else(|| text.strip_prefix("Professional Summary:"))
        .unwrap_or(text)
        .trim();
    text.trim_matches('"').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeTailorError;
    use crate::llm::testing::ScriptedGenerator;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_resume() -> ResumeRecord {
        ResumeRecord {
            summary: "Backend engineer.".to_string(),
            skills: strings(&["Python", "Leadership", "node.js", "SQL"]),
            ..ResumeRecord::default()
        }
    }

    #[test]
    fn test_merge_orders_matches_first() {
        let merged = merge_skills(
            &strings(&["Python", "Leadership", "SQL"]),
            &strings(&["sql", "Kubernetes", "python"]),
        );
        assert_eq!(merged, vec!["Python", "SQL", "Leadership", "Kubernetes"]);
    }

    #[test]
    fn test_merge_dedups_spelling_variants() {
        let merged = merge_skills(&strings(&["node.js", "C#"]), &strings(&["NodeJS", "c#", "C++"]));
        assert_eq!(merged, vec!["node.js", "C#", "C++"]);
    }

    #[test]
    fn test_merge_skips_sentence_requirements() {
        let merged = merge_skills(
            &strings(&["Rust"]),
            &strings(&["5+ years of experience building distributed systems at scale", ""]),
        );
        assert_eq!(merged, vec!["Rust"]);
    }

    #[test]
    fn test_similar_but_distinct_skills_are_kept() {
        assert!(!same_skill("Java", "JavaScript"));
        assert!(!same_skill("C", "C++"));
        assert!(same_skill("PostgreSQL", "Postgresql"));
        assert!(same_skill("Kubernetes", "Kubernetess"));
    }

    #[test]
    fn test_clean_summary() {
        assert_eq!(clean_summary("\"Seasoned engineer.\"\n"), "Seasoned engineer.");
        assert_eq!(clean_summary("Summary: Seasoned engineer."), "Seasoned engineer.");
        assert_eq!(clean_summary("```\nSeasoned engineer.\n```"), "Seasoned engineer.");
    }

    #[tokio::test]
    async fn test_optimize_rewrites_summary() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(
            "Backend engineer shipping SQL-heavy services on Kubernetes.".to_string(),
        )]));
        let optimizer = ResumeOptimizer::new(generator.clone(), GenerationParams::default());
        let job = JobAnalysis {
            required_skills: strings(&["SQL", "Kubernetes"]),
            ..JobAnalysis::default()
        };

        let result = optimizer.optimize(&sample_resume(), &job).await;

        assert!(result.warning.is_none());
        assert_eq!(
            result.resume.summary,
            "Backend engineer shipping SQL-heavy services on Kubernetes."
        );
        assert_eq!(
            result.resume.skills,
            vec!["SQL", "Python", "Leadership", "node.js", "Kubernetes"]
        );
        assert_eq!(result.job_analysis, job);
        assert!(generator.prompts.lock().unwrap()[0].contains("Backend engineer."));
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back_with_warning() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Err(ResumeTailorError::Llm(
            "503 Service Unavailable".to_string(),
        ))]));
        let optimizer = ResumeOptimizer::new(generator, GenerationParams::default());
        let job = JobAnalysis {
            required_skills: strings(&["Go"]),
            ..JobAnalysis::default()
        };

        let result = optimizer.optimize(&sample_resume(), &job).await;

        assert_eq!(result.resume.summary, "Backend engineer.");
        assert!(result.resume.skills.contains(&"Go".to_string()));
        let warning = result.warning.unwrap();
        assert!(warning.contains("503"));
    }

    #[tokio::test]
    async fn test_blank_rewrite_falls_back() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("  \"\" ".to_string())]));
        let optimizer = ResumeOptimizer::new(generator, GenerationParams::default());

        let result = optimizer.optimize(&sample_resume(), &JobAnalysis::default()).await;
        assert_eq!(result.resume.summary, "Backend engineer.");
        assert!(result.warning.is_some());
    }
}
