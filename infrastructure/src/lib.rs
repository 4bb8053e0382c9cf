//! Infrastructure layer for capital-ai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;
pub mod templates;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOpenAiConfig, FileServerConfig,
    FileTemplatesConfig, Severity,
};
pub use openai::{OpenAiGateway, OpenAiSettings};
pub use templates::{EmbeddedTemplateStore, FileTemplateStore};
