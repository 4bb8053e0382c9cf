//! Completion Adapter use case.
//!
//! Sends a finished prompt through the [`CompletionGateway`] and returns the
//! raw text, or parses it into a [`StructuredOutput`] value.
//!
//! Exactly one gateway call is made per invocation: errors are surfaced
//! unchanged and never retried. When a [`CancellationToken`] is attached the
//! call races against it, so an aborted request drops its in-flight call.

use crate::error::ServiceError;
use crate::ports::completion_gateway::CompletionGateway;
use capital_domain::util::truncate_str;
use capital_domain::{StructuredOutput, format_instructions_for, parse_output};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Wraps a [`CompletionGateway`] with the structured-output contract
#[derive(Clone)]
pub struct CompletionAdapter {
    gateway: Arc<dyn CompletionGateway>,
    cancellation_token: Option<CancellationToken>,
}

impl CompletionAdapter {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            gateway,
            cancellation_token: None,
        }
    }

    /// Attach a cancellation token bounding every call made by this adapter.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Format instructions the prompt must carry for `T` to be parseable.
    ///
    /// Rendered from the same shape [`complete_structured`](Self::complete_structured)
    /// parses against.
    pub fn format_instructions<T: StructuredOutput>(&self) -> String {
        format_instructions_for::<T>()
    }

    /// Send `prompt` and return the completion text
    pub async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        debug!(
            "Sending prompt to {}: {}",
            self.gateway.model(),
            truncate_str(prompt, 200)
        );

        let call = self.gateway.complete(prompt);
        let result = match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        info!("Completion cancelled before a response arrived");
                        return Err(ServiceError::Cancelled);
                    }
                    result = call => result,
                }
            }
            None => call.await,
        };

        match result {
            Ok(text) => {
                debug!("Received {} bytes from {}", text.len(), self.gateway.model());
                Ok(text)
            }
            Err(e) => {
                warn!("Completion call failed: {}", e);
                Err(ServiceError::CompletionCall(e))
            }
        }
    }

    /// Send `prompt` and parse the reply as `T`.
    ///
    /// The prompt is expected to already contain
    /// [`format_instructions::<T>()`](Self::format_instructions).
    pub async fn complete_structured<T: StructuredOutput>(
        &self,
        prompt: &str,
    ) -> Result<T, ServiceError> {
        let text = self.complete(prompt).await?;
        parse_output::<T>(&text).map_err(|e| {
            warn!("Structured output rejected: {}", e);
            ServiceError::StructuredParse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::GatewayError;
    use crate::use_cases::test_support::{MockGateway, PendingGateway};
    use capital_domain::{CapitalResponse, FieldType, OutputShape, ShapeField, StructuredError};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Country {
        name: String,
        population: u64,
        landlocked: bool,
    }

    impl StructuredOutput for Country {
        fn shape() -> OutputShape {
            OutputShape::new("Country")
                .with_field(ShapeField::new("name", FieldType::String, "Country name"))
                .with_field(ShapeField::new("population", FieldType::Integer, "Inhabitants"))
                .with_field(ShapeField::new("landlocked", FieldType::Boolean, "No coastline"))
        }
    }

    #[tokio::test]
    async fn test_complete_returns_raw_text() {
        let gateway = Arc::new(MockGateway::replying("4"));
        let adapter = CompletionAdapter::new(gateway.clone());

        assert_eq!(adapter.complete("2+2?").await.unwrap(), "4");
        assert_eq!(gateway.calls(), 1);
        assert_eq!(gateway.prompts(), vec!["2+2?".to_string()]);
    }

    #[tokio::test]
    async fn test_complete_structured_parses_reply() {
        let gateway = Arc::new(MockGateway::replying(r#"{"answer": "Paris"}"#));
        let adapter = CompletionAdapter::new(gateway);

        let response: CapitalResponse = adapter.complete_structured("prompt").await.unwrap();
        assert_eq!(response, CapitalResponse::new("Paris"));
    }

    #[tokio::test]
    async fn test_structured_round_trip_with_multi_field_shape() {
        let gateway = Arc::new(MockGateway::replying(
            r#"{"name": "Bolivia", "population": 12000000, "landlocked": true}"#,
        ));
        let adapter = CompletionAdapter::new(gateway.clone());

        let instructions = adapter.format_instructions::<Country>();
        for field in Country::shape().fields() {
            assert!(instructions.contains(field.name()));
        }

        let prompt = format!("Describe Bolivia.\n{}", instructions);
        let country: Country = adapter.complete_structured(&prompt).await.unwrap();
        assert_eq!(
            country,
            Country {
                name: "Bolivia".to_string(),
                population: 12_000_000,
                landlocked: true,
            }
        );
        assert!(gateway.prompts()[0].contains("RFC8259"));
    }

    #[tokio::test]
    async fn test_nonconforming_reply_is_structured_parse_error() {
        let gateway = Arc::new(MockGateway::replying("The capital is Paris."));
        let adapter = CompletionAdapter::new(gateway.clone());

        let err = adapter
            .complete_structured::<CapitalResponse>("prompt")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::StructuredParse(StructuredError::InvalidJson { .. })
        ));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_unchanged_without_retry() {
        let transport = GatewayError::ConnectionError("connection refused".to_string());

        let gateway = Arc::new(MockGateway::new(vec![
            Err(transport.clone()),
            Ok("should never be used".to_string()),
        ]));
        let adapter = CompletionAdapter::new(gateway.clone());
        let err = adapter.complete("prompt").await.unwrap_err();
        assert_eq!(err, ServiceError::CompletionCall(transport.clone()));
        assert_eq!(gateway.calls(), 1);

        let gateway = Arc::new(MockGateway::new(vec![
            Err(transport.clone()),
            Ok(r#"{"answer": "Paris"}"#.to_string()),
        ]));
        let adapter = CompletionAdapter::new(gateway.clone());
        let err = adapter
            .complete_structured::<CapitalResponse>("prompt")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::CompletionCall(transport));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let gateway = Arc::new(MockGateway::replying("4"));
        let token = CancellationToken::new();
        token.cancel();
        let adapter = CompletionAdapter::new(gateway.clone()).with_cancellation(token);

        let err = adapter.complete("2+2?").await.unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_cancellation_aborts_in_flight_call() {
        let gateway = Arc::new(PendingGateway::new());
        let token = CancellationToken::new();
        let adapter = CompletionAdapter::new(gateway.clone()).with_cancellation(token.clone());

        let handle = tokio::spawn(async move { adapter.complete("slow question").await });
        // Let the call start before cancelling
        while gateway.calls() == 0 {
            tokio::task::yield_now().await;
        }
        token.cancel();

        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err, ServiceError::Cancelled);
        assert_eq!(gateway.calls(), 1);
    }
}
