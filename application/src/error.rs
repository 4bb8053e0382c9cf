//! Errors surfaced by the question use cases
//!
//! Every error is local to one request and fatal for it: nothing is retried
//! and there is no partial result.

use crate::ports::completion_gateway::GatewayError;
use crate::ports::template_store::TemplateStoreError;
use capital_domain::{StructuredError, TemplateError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template '{id}' could not be read: {reason}")]
    TemplateUnreadable { id: String, reason: String },

    #[error(transparent)]
    TemplateMismatch(#[from] TemplateError),

    #[error("Completion call failed: {0}")]
    CompletionCall(#[from] GatewayError),

    #[error("Could not parse structured output: {0}")]
    StructuredParse(#[from] StructuredError),

    #[error("Request cancelled")]
    Cancelled,
}

impl ServiceError {
    /// Stable snake_case name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::TemplateNotFound(_) => "template_not_found",
            ServiceError::TemplateUnreadable { .. } => "template_unreadable",
            ServiceError::TemplateMismatch(_) => "template_mismatch",
            ServiceError::CompletionCall(_) => "completion_call",
            ServiceError::StructuredParse(_) => "structured_parse",
            ServiceError::Cancelled => "cancelled",
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ServiceError::Cancelled)
    }
}

impl From<TemplateStoreError> for ServiceError {
    fn from(err: TemplateStoreError) -> Self {
        match err {
            TemplateStoreError::NotFound(id) => ServiceError::TemplateNotFound(id),
            TemplateStoreError::Unreadable { id, reason } => {
                ServiceError::TemplateUnreadable { id, reason }
            }
        }
    }
}
