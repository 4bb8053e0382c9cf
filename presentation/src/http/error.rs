//! Mapping of service errors onto HTTP responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use capital_application::ServiceError;
use serde::Serialize;
use tracing::{error, info};

/// Non-standard "client closed request" status
const CLIENT_CLOSED_REQUEST: u16 = 499;

/// JSON error body: `{"error": "...", "kind": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

/// A [`ServiceError`] on its way out of a handler
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::TemplateNotFound(_)
            | ServiceError::TemplateUnreadable { .. }
            | ServiceError::TemplateMismatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::CompletionCall(_) | ServiceError::StructuredParse(_) => {
                StatusCode::BAD_GATEWAY
            }
            ServiceError::Cancelled => StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
                .unwrap_or(StatusCode::REQUEST_TIMEOUT),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.0.kind();
        if status.is_server_error() {
            error!(kind, "Request failed: {}", self.0);
        } else {
            info!(kind, "Request ended: {}", self.0);
        }

        let body = ErrorBody {
            error: self.0.to_string(),
            kind,
        };
        (status, Json(body)).into_response()
    }
}
