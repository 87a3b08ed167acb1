//! Configuration management for the resume tailor

use crate::error::{Result, ResumeTailorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for `llm.max_retries`.
pub const MAX_RETRIES: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Lines this long or longer are never section headers.
    pub max_header_chars: usize,
    /// Length cut-off for names, skills, job titles and companies.
    pub max_line_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
    pub output_dir: PathBuf,
    pub timestamp_filenames: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-pro".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.2,
            max_output_tokens: 8192,
            timeout_secs: 120,
            max_retries: 3,
        }
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            max_header_chars: 50,
            max_line_chars: 50,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            pretty_json: true,
            output_dir: PathBuf::from("."),
            timestamp_filenames: false,
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults there on first use.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeTailorError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeTailorError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-tailor")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.parsing.max_header_chars == 0 || self.parsing.max_line_chars == 0 {
            return Err(ResumeTailorError::Configuration(
                "parsing limits must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ResumeTailorError::Configuration(format!(
                "llm.temperature must be between 0 and 2, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.max_retries > MAX_RETRIES {
            return Err(ResumeTailorError::Configuration(format!(
                "llm.max_retries must be at most {}, got {}",
                MAX_RETRIES, self.llm.max_retries
            )));
        }
        Ok(())
    }

    /// API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        let key = std::env::var(&self.llm.api_key_env).unwrap_or_default();
        let key = key.trim();
        if key.is_empty() {
            return Err(ResumeTailorError::Configuration(format!(
                "API key is missing. Please set the {} environment variable.",
                self.llm.api_key_env
            )));
        }
        Ok(key.to_string())
    }
}
