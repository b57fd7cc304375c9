//! Axum route handlers for the investor bots.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bots::screener::ChatTurn;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeepDiveRequest {
    pub message: String,
    pub company: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenerRequest {
    pub message: String,
    pub session_id: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BotReply {
    pub reply: String,
    pub status: String,
    pub session_id: String,
}

impl BotReply {
    fn completed(reply: String, session_id: Option<String>) -> Self {
        Self {
            reply,
            status: "completed".to_string(),
            session_id: session_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }
}

/// POST /api/v1/bots/deep-dive
pub async fn handle_deep_dive(
    State(state): State<AppState>,
    Json(request): Json<DeepDiveRequest>,
) -> Result<Json<BotReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    if request.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let reply = state
        .deep_dive
        .answer(&request.message, &request.company, &state.corpus)
        .await;

    Ok(Json(BotReply::completed(reply, request.session_id)))
}

/// POST /api/v1/bots/screener
pub async fn handle_screener(
    State(state): State<AppState>,
    Json(request): Json<ScreenerRequest>,
) -> Result<Json<BotReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = state
        .screener
        .screen(&request.message, &request.history, &state.corpus)
        .await;

    Ok(Json(BotReply::completed(reply, request.session_id)))
}
