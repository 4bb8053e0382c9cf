//! OpenAI Chat Completions gateway

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use capital_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use reqwest::Client;
use tracing::{debug, error, info};

/// Connection settings for an OpenAI-compatible API
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Base URL without the `/v1/...` suffix, e.g. `https://api.openai.com`
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
}

/// [`CompletionGateway`] backed by `POST {base_url}/v1/chat/completions`
///
/// One HTTP request per completion; no retries and no client-side timeout.
/// Dropping the returned future aborts the in-flight request.
pub struct OpenAiGateway {
    http: Client,
    settings: OpenAiSettings,
}

impl OpenAiGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to build HTTP client: {e}")))?;

        info!(
            "OpenAiGateway initialized (model: {}, endpoint: {})",
            settings.model,
            chat_completions_url(&settings.base_url)
        );

        Ok(Self { http, settings })
    }
}

fn chat_completions_url(base_url: &str) -> String {
    format!("{}/v1/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = chat_completions_url(&self.settings.base_url);
        let body = ChatCompletionRequest::user_prompt(
            &self.settings.model,
            prompt,
            self.settings.temperature,
        );

        debug!(target: "openai", "POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(target: "openai", %status, body = %text, "Chat Completions error");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        let parsed = ChatCompletionResponse::parse(&text)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                target: "openai",
                model = parsed.model.as_deref().unwrap_or(&self.settings.model),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat Completions usage"
            );
        }

        parsed.into_content()
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn settings(base_url: String) -> OpenAiSettings {
        OpenAiSettings {
            base_url,
            api_key: "sk-test".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: None,
        }
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        assert_eq!(
            chat_completions_url("https://api.openai.com/"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_complete_sends_prompt_and_returns_content() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"model":"gpt-4o-mini","choices":[{"message":{"role":"assistant","content":"4"},"finish_reason":"stop"}]}"#,
        )
        .await;
        let gateway = OpenAiGateway::new(settings(base_url)).unwrap();

        let text = gateway.complete("2+2?").await.unwrap();
        assert_eq!(text, "4");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""content":"2+2?""#));
        assert!(request.contains(r#""model":"gpt-4o-mini""#));
    }

    #[tokio::test]
    async fn test_error_status_is_api_error() {
        let (base_url, server) = serve_once(
            "429 Too Many Requests",
            r#"{"error":{"message":"quota exceeded"}}"#,
        )
        .await;
        let gateway = OpenAiGateway::new(settings(base_url)).unwrap();

        let err = gateway.complete("hi").await.unwrap_err();
        match err {
            GatewayError::Api { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("quota exceeded"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_content_is_malformed() {
        let (base_url, server) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let gateway = OpenAiGateway::new(settings(base_url)).unwrap();

        let err = gateway.complete("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiGateway::new(settings(format!("http://{addr}"))).unwrap();
        let err = gateway.complete("hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
