use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::session::ConversationState;
use crate::chat::turn::{run_chat_turn, run_resume_turn, ChatTurnOutcome, ResumeTurnOutcome};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<CreateSessionResponse> {
    let session_id = state.sessions.create();
    Json(CreateSessionResponse { session_id })
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationState>, AppError> {
    state
        .sessions
        .snapshot(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: Uuid,
    pub message: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatTurnOutcome>, AppError> {
    let outcome = run_chat_turn(
        state.llm.as_ref(),
        state.market.as_ref(),
        &state.sessions,
        req.session_id,
        &req.message,
    )
    .await?;
    Ok(Json(outcome))
}

/// POST /api/v1/resume
/// Multipart form: a `session_id` text field and a `file` part whose
/// content type must be PDF or DOCX.
pub async fn handle_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeTurnOutcome>, AppError> {
    let mut session_id: Option<Uuid> = None;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("session_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable session_id: {e}")))?;
                let id = text
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation("session_id must be a UUID".to_string()))?;
                session_id = Some(id);
            }
            Some("file") => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file part: {e}")))?;
                upload = Some((content_type, data));
            }
            _ => {}
        }
    }

    let session_id =
        session_id.ok_or_else(|| AppError::Validation("Missing session_id field".to_string()))?;
    let (content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing file part".to_string()))?;

    let outcome = run_resume_turn(
        state.llm.as_ref(),
        state.market.as_ref(),
        &state.sessions,
        session_id,
        &content_type,
        &data,
    )
    .await?;
    Ok(Json(outcome))
}
