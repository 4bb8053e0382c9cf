//! Endpoint handlers
//!
//! Each request gets its own cancellation token. The drop guard lives as long
//! as the handler future, so a client that disconnects cancels the completion
//! call still in flight.

use super::error::ApiError;
use super::router::AppState;
use axum::Json;
use axum::extract::State;
use capital_application::QuestionService;
use capital_domain::{Answer, CapitalRequest, CapitalResponse, Question};
use tokio_util::sync::{CancellationToken, DropGuard};

pub(super) fn request_scope(state: &AppState) -> (QuestionService, DropGuard) {
    let token = CancellationToken::new();
    let service = state.service.with_cancellation(token.clone());
    (service, token.drop_guard())
}

/// `POST /ask`
pub async fn ask(
    State(state): State<AppState>,
    Json(question): Json<Question>,
) -> Result<Json<Answer>, ApiError> {
    let (service, _guard) = request_scope(&state);
    let answer = service.answer(&question).await?;
    Ok(Json(answer))
}

/// `POST /capital`
pub async fn capital(
    State(state): State<AppState>,
    Json(request): Json<CapitalRequest>,
) -> Result<Json<CapitalResponse>, ApiError> {
    let (service, _guard) = request_scope(&state);
    let response = service.capital(&request).await?;
    Ok(Json(response))
}

/// `POST /capitalWithInfo`
pub async fn capital_with_info(
    State(state): State<AppState>,
    Json(request): Json<CapitalRequest>,
) -> Result<Json<Answer>, ApiError> {
    let (service, _guard) = request_scope(&state);
    let answer = service.capital_with_info(&request).await?;
    Ok(Json(answer))
}
