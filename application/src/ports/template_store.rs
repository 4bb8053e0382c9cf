//! Template Store port
//!
//! Resolves a template identifier (e.g. `get-capital-prompt`) to its raw
//! text. Stores are read-only; implementations may cache loaded text for the
//! lifetime of the process.

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateStoreError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template '{id}' could not be read: {reason}")]
    Unreadable { id: String, reason: String },
}

pub trait TemplateStore: Send + Sync {
    /// Load the raw text of template `id`
    fn load(&self, id: &str) -> Result<Arc<str>, TemplateStoreError>;

    /// Whether template `id` can be loaded
    fn exists(&self, id: &str) -> bool {
        self.load(id).is_ok()
    }
}
