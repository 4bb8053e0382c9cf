//! Completion Gateway port
//!
//! Defines the interface for sending a finished prompt to a text-completion
//! provider and getting its text back.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for completion calls
///
/// Implementations (adapters) live in the infrastructure layer. Each call to
/// [`complete`](CompletionGateway::complete) must result in exactly one
/// request to the provider; retry policy, if any, is not this port's job.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send `prompt` and return the completion text
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Model identifier used for completions (for logging)
    fn model(&self) -> &str;
}
