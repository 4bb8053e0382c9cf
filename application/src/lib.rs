//! Application layer for capital-ai
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::ServiceError;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    template_store::{TemplateStore, TemplateStoreError},
};
pub use use_cases::completion::CompletionAdapter;
pub use use_cases::prompt_builder::PromptBuilder;
pub use use_cases::question_service::QuestionService;
