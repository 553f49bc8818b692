use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
    services::agent::SupportAgent,
    storage::repository::ConversationLog,
};

pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!(
        "Handling chat message (session: {:?}, customer: {:?})",
        request.session_id, request.customer_id
    );

    let reply = state
        .agent
        .handle_message(
            &request.message,
            request.customer_id.as_deref(),
            request.session_id.as_deref(),
        )
        .await?;

    let response = ChatResponse {
        reply: reply.reply,
        intent: reply.intent,
        confidence: reply.confidence,
        suggested_actions: reply.suggested_actions,
    };

    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_session_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Fetching history for session {}", session_id);

    let turns = state.conversation_log.list_by_session(&session_id).await?;
    if turns.is_empty() {
        return Err(AppError::NotFound(format!("会话不存在: {}", session_id)));
    }

    let turn_responses: Vec<HistoryTurnResponse> = turns
        .iter()
        .map(|t| HistoryTurnResponse {
            user_text: t.user_text.clone(),
            reply_text: t.reply_text.clone(),
            intent: t.classification.intent.as_str().to_string(),
            confidence: t.classification.confidence,
            timestamp: t.timestamp,
        })
        .collect();

    let response = SessionHistoryResponse {
        session_id,
        total: turn_responses.len(),
        turns: turn_responses,
    };

    Ok((StatusCode::OK, Json(response)))
}
