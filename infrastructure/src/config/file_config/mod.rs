//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to defaults.

mod openai;
mod server;
mod templates;

pub use openai::FileOpenAiConfig;
pub use server::FileServerConfig;
pub use templates::FileTemplatesConfig;

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Completion provider settings
    pub openai: FileOpenAiConfig,
    /// Template directory override
    pub templates: FileTemplatesConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// The API key is not checked here; it is resolved at startup, where a
    /// missing key is reported with the variable name that was consulted.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.server.parse_bind().1);
        issues.extend(self.openai.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:9000"

[openai]
api_key_env = "CAPITAL_OPENAI_KEY"
base_url = "http://localhost:11434"
model = "llama3"
temperature = 0.2

[templates]
dir = "./prompts"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.openai.api_key_env, "CAPITAL_OPENAI_KEY");
        assert_eq!(config.openai.base_url, "http://localhost:11434");
        assert_eq!(config.openai.model, "llama3");
        assert_eq!(config.openai.temperature, Some(0.2));
        assert_eq!(config.templates.dir, Some(PathBuf::from("./prompts")));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[openai]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openai.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.server, FileServerConfig::default());
        assert!(config.templates.dir.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[server]
bind = "not an address"

[openai]
model = ""
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }
}
