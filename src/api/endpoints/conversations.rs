//! Conversation endpoints.
//!
//! - `POST /api/conversations`: open a conversation
//! - `DELETE /api/conversations/:id`: close it
//! - `GET /api/conversations/:id/messages`: transcript
//! - `POST /api/conversations/:id/messages`: send an utterance, get the reply
//! - `POST /api/conversations/:id/insights`: direct card lookup
//! - `GET /api/conversations/:id/status`: responding flag

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{parse_conversation_id, validate_text, ApiContext};
use crate::models::Message;

#[derive(Serialize)]
pub struct ConversationCreated {
    pub conversation_id: Uuid,
    pub messages: Vec<Message>,
}

/// `POST /api/conversations`
pub async fn create(
    State(ctx): State<ApiContext>,
) -> Result<(StatusCode, Json<ConversationCreated>), ApiError> {
    let (conversation_id, assistant) = ctx.core.start_conversation()?;
    Ok((
        StatusCode::CREATED,
        Json(ConversationCreated {
            conversation_id,
            messages: assistant.transcript(),
        }),
    ))
}

/// `DELETE /api/conversations/:id`
pub async fn close(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_conversation_id(&id)?;
    ctx.core.end_conversation(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub conversation_id: Uuid,
    pub responding: bool,
    pub messages: Vec<Message>,
}

/// `GET /api/conversations/:id/messages`
pub async fn transcript(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let conversation_id = parse_conversation_id(&id)?;
    let assistant = ctx.core.conversation(&conversation_id)?;

    Ok(Json(TranscriptResponse {
        conversation_id,
        responding: assistant.is_responding(),
        messages: assistant.transcript(),
    }))
}

#[derive(Deserialize)]
pub struct SendRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ReplyResponse {
    pub reply: Message,
}

/// `POST /api/conversations/:id/messages`
///
/// Resolves once the assistant reply has been appended. The turn still
/// completes if the client disconnects first.
pub async fn send(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(req): Json<SendRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let conversation_id = parse_conversation_id(&id)?;
    validate_text("Message", &req.message)?;
    let assistant = ctx.core.conversation(&conversation_id)?;

    let reply = assistant
        .respond(&req.message)
        .await
        .ok_or_else(|| ApiError::BadRequest("Message cannot be empty".into()))?;

    Ok(Json(ReplyResponse { reply }))
}

#[derive(Deserialize)]
pub struct InsightsRequest {
    pub query: String,
}

/// `POST /api/conversations/:id/insights`
pub async fn insights(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let conversation_id = parse_conversation_id(&id)?;
    validate_text("Query", &req.query)?;
    let assistant = ctx.core.conversation(&conversation_id)?;

    let reply = assistant.health_insights(&req.query).await;
    Ok(Json(ReplyResponse { reply }))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub responding: bool,
}

/// `GET /api/conversations/:id/status`
pub async fn status(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let conversation_id = parse_conversation_id(&id)?;
    let assistant = ctx.core.conversation(&conversation_id)?;
    Ok(Json(StatusResponse {
        responding: assistant.is_responding(),
    }))
}
