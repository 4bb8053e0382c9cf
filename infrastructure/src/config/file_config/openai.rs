//! OpenAI provider configuration from TOML (`[openai]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
///
/// # Example
///
/// ```toml
/// [openai]
/// model = "gpt-4o-mini"
/// temperature = 0.2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Takes precedence over `api_key_env` when set.
    pub api_key: Option<String>,
    /// Base URL for the API; any OpenAI-compatible server works.
    pub base_url: String,
    /// Chat model name.
    pub model: String,
    /// Sampling temperature (0.0 to 2.0). Provider default when unset.
    pub temperature: Option<f32>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: None,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve the API key from `api_key`, then from the `api_key_env` variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "openai.model".to_string(),
                },
                "openai.model: model name cannot be empty",
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "openai.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                format!(
                    "openai.base_url: '{}' must start with http:// or https://",
                    self.base_url
                ),
            ));
        }

        if let Some(t) = self.temperature.filter(|t| !(0.0..=2.0).contains(t)) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "openai.temperature".to_string(),
                },
                format!("openai.temperature: {} is outside 0.0..=2.0", t),
            ));
        }

        issues
    }
}
