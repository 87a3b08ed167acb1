//! Job listing analysis through the text generator

use crate::error::{Result, ResumeTailorError};
use crate::llm::prompts::PromptTemplates;
use crate::llm::{strip_json_fences, GenerationParams, TextGenerator};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Structured requirements pulled out of a job listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobAnalysis {
    #[serde(alias = "skills", alias = "required_qualifications", alias = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(alias = "key_responsibilities", alias = "keyResponsibilities")]
    pub responsibilities: Vec<String>,
    #[serde(alias = "culture", alias = "companyValues", alias = "company_culture")]
    pub company_values: Vec<String>,
    #[serde(alias = "industry_keywords", alias = "industryKeywords")]
    pub keywords: Vec<String>,
    #[serde(alias = "preferred_skills", alias = "preferredQualifications")]
    pub preferred_qualifications: Vec<String>,
}

pub struct JobAnalyzer {
    generator: Arc<dyn TextGenerator>,
    templates: PromptTemplates,
    params: GenerationParams,
}

impl JobAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        Self {
            generator,
            templates: PromptTemplates::default(),
            params,
        }
    }

    pub async fn analyze(&self, job_text: &str) -> Result<JobAnalysis> {
        if job_text.trim().is_empty() {
            return Err(ResumeTailorError::InvalidInput(
                "Job listing is empty".to_string(),
            ));
        }

        let prompt = self.templates.render_job_analysis(job_text);
        let response = self.generator.generate(&prompt, &self.params).await?;
        debug!("Job analysis response: {} chars", response.len());

        let analysis = parse_analysis(&response)?;
        info!(
            "Job analysis via {}: {} required skills, {} keywords",
            self.generator.model_name(),
            analysis.required_skills.len(),
            analysis.keywords.len()
        );
        Ok(analysis)
    }
}

/// Decode a model response into a [`JobAnalysis`], tolerating code fences.
pub fn parse_analysis(response: &str) -> Result<JobAnalysis> {
    let json = strip_json_fences(response);
    serde_json::from_str(json).map_err(|e| {
        let preview: String = json.chars().take(200).collect();
        ResumeTailorError::LlmResponse(format!(
            "Failed to parse job analysis JSON: {} (response began: {})",
            e, preview
        ))
    })
}
