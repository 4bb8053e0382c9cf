//! Domain layer for capital-ai
//!
//! This crate contains the value records exchanged over the request boundary,
//! the prompt template engine, and the structured-output contract.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Prompt template**: text with `{name}` placeholders, rendered from a
//!   variable map before being sent to a completion API
//! - **Output shape**: the fields (name, type, description) a structured reply
//!   must contain; drives both the prompt's format instructions and the parser

pub mod core;
pub mod prompt;
pub mod structured;
pub mod util;

// Re-export commonly used types
pub use crate::core::{
    capital::{CapitalRequest, CapitalResponse},
    question::{Answer, Question},
};
pub use prompt::{PromptTemplate, TemplateError, catalog};
pub use structured::{
    FieldType, OutputShape, ShapeField, StructuredError, StructuredOutput, format_instructions,
    format_instructions_for, parse_output, parse_structured,
};
pub use util::truncate_str;
