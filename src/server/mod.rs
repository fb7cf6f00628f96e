//! JSON endpoint layer over `ChatService`.
//!
//! The send and detect routes are the conversation interface proper; the
//! remaining routes expose the state the UI reads. Validation failures map
//! to 400, upstream failures to 502, and every error body is
//! `{ "error": <message> }`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::{Error, ErrorKind};
use crate::service::ChatService;
use crate::state::ImageSnapshot;
use crate::types::{ChatMessage, NotepadEntry};

pub fn router(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/conversation/send", post(send))
        .route("/conversation/history", get(history))
        .route("/intent/detect", post(detect))
        .route("/notepad/save", post(save))
        .route("/notepad", get(notepad))
        .route("/image", get(image))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub message: String,
    pub agent_id: String,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub intent: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub agent_id: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub agent_id: String,
    pub message_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct NotepadQuery {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct NotepadResponse {
    pub entries: Vec<NotepadEntry>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub checked_at: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(error: Error) -> ApiError {
    let status = match error.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Transport | ErrorKind::Service | ErrorKind::Parse => StatusCode::BAD_GATEWAY,
        ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

async fn send(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    let response = service
        .send(&request.agent_id, &request.message)
        .await
        .map_err(error_response)?;
    Ok(Json(SendResponse { response }))
}

async fn detect(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<DetectRequest>,
) -> Json<DetectResponse> {
    let intent = service.detect(&request.message).await;
    Json(DetectResponse {
        intent: intent.label(),
    })
}

async fn history(
    State(service): State<Arc<ChatService>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let messages = service.history(&query.agent_id).map_err(error_response)?;
    Ok(Json(HistoryResponse { messages }))
}

async fn save(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<SaveRequest>,
) -> Result<Json<NotepadEntry>, ApiError> {
    let entry = service
        .save_reply(&request.agent_id, request.message_index)
        .map_err(error_response)?;
    Ok(Json(entry))
}

async fn notepad(
    State(service): State<Arc<ChatService>>,
    Query(query): Query<NotepadQuery>,
) -> Json<NotepadResponse> {
    Json(NotepadResponse {
        entries: service.notepad_entries(&query.category),
    })
}

async fn image(State(service): State<Arc<ChatService>>) -> Json<ImageSnapshot> {
    Json(service.image())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ready",
        checked_at: Utc::now().to_rfc3339(),
    })
}
