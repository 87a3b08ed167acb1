//! LLM integration module
//!
//! Everything that talks to a text-generation service goes through
//! [`TextGenerator`]. The binary builds one generator per process and hands
//! it to the analyzer and optimizer as `Arc<dyn TextGenerator>`.

pub mod client;
pub mod job_analyzer;
pub mod optimizer;
pub mod prompts;

use crate::config::LlmConfig;
use crate::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

impl From<&LlmConfig> for GenerationParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for logs and reports.
    fn model_name(&self) -> &str;

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}

/// Strips ```json ... ``` or ``` ... ``` fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start()),
        None => text,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_params_from_config() {
        let params = GenerationParams::default();
        assert_eq!(params.max_output_tokens, 8192);
        assert!((params.temperature - 0.2).abs() < f32::EPSILON);
    }
}
