//! Configuration file loading for capital-ai
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CAPITAL_AI_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./capital-ai.toml` or `./.capital-ai.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/capital-ai/config.toml`
//! 5. Default values

mod file_config;
mod loader;
pub mod validation;

pub use file_config::{FileConfig, FileOpenAiConfig, FileServerConfig, FileTemplatesConfig};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
