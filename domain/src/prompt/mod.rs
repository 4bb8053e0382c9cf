//! Prompt domain
//!
//! The placeholder template engine and the catalogue of bundled templates.

pub mod catalog;
mod template;

pub use template::{PromptTemplate, TemplateError};
