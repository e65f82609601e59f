//! Axum route handlers for the Chat API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::ChatSessionView;
use crate::errors::AppError;
use crate::models::chat::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OpenChatRequest {
    pub career_title: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: ChatMessage,
    pub answer: ChatMessage,
}

/// POST /api/v1/chats
pub async fn handle_open_chat(
    State(state): State<AppState>,
    Json(request): Json<OpenChatRequest>,
) -> Result<(StatusCode, Json<ChatSessionView>), AppError> {
    let title = request.career_title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("career_title cannot be empty".to_string()));
    }
    let view = state.chats.open(title).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/chats/:id
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSessionView>, AppError> {
    state
        .chats
        .view(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Chat {id} not found")))
}

/// POST /api/v1/chats/:id/messages
///
/// Appends the question, asks the advisor, appends the answer.
/// Without any credential the client is told to prompt for one first.
pub async fn handle_ask(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let credential = state.credentials.get().await;
    if credential.is_none() && !state.advisor.has_default_credential() {
        return Err(AppError::CredentialRequired);
    }

    // Dropping `pending` (client gone mid-answer) releases the chat again.
    let pending = state.chats.begin_question(id, question).await?;

    let answer = state
        .advisor
        .answer_question(question, &pending.career_title, credential.as_ref())
        .await;

    let question_message = pending.question.clone();
    let answer_message = pending.finish(answer).await.ok_or_else(|| {
        AppError::NotFound(format!("Chat {id} was closed before the answer arrived"))
    })?;

    Ok(Json(AskResponse {
        question: question_message,
        answer: answer_message,
    }))
}

/// DELETE /api/v1/chats/:id
pub async fn handle_close_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.chats.close(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Chat {id} not found")))
    }
}
