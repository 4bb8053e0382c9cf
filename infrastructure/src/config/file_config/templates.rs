//! Prompt template configuration from TOML (`[templates]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw template configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTemplatesConfig {
    /// Directory of `<id>.st` files overriding the bundled templates
    pub dir: Option<PathBuf>,
}
