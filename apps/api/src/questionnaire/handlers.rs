//! Axum route handlers for questionnaire generation.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::questionnaire::models::Question;
use crate::questionnaire::pitch_deck::{extract_pdf_text, fetch_pitch_deck, ObjectUri};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either raw deck text or an `s3://` location of the PDF. Text wins if both are sent.
#[derive(Debug, Deserialize)]
pub struct QuestionnaireRequest {
    pub startup_id: String,
    pub pitch_deck_text: Option<String>,
    pub pitch_deck_uri: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub startup_id: String,
    pub questions: Vec<Question>,
    pub status: String,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/questionnaire
pub async fn handle_generate_questionnaire(
    State(state): State<AppState>,
    Json(request): Json<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResponse>, AppError> {
    require_startup_id(&request.startup_id)?;

    let pitch_text = match (request.pitch_deck_text, request.pitch_deck_uri) {
        (Some(text), _) if !text.trim().is_empty() => text,
        (_, Some(uri)) if !uri.trim().is_empty() => {
            let uri = ObjectUri::parse(uri.trim())?;
            let pdf = fetch_pitch_deck(&state.s3, &uri).await?;
            pdf_to_text(pdf).await?
        }
        _ => {
            return Err(AppError::Validation(
                "pitch_deck_text or pitch_deck_uri is required".to_string(),
            ))
        }
    };

    Ok(Json(run_chain(&state, request.startup_id, &pitch_text).await))
}

/// POST /api/v1/questionnaire/upload
///
/// Multipart form with a `startup_id` text field and a `file` PDF field.
pub async fn handle_upload_questionnaire(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<QuestionnaireResponse>, AppError> {
    let mut startup_id = None;
    let mut pdf = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("startup_id") => startup_id = Some(field.text().await?),
            Some("file") => pdf = Some(field.bytes().await?),
            _ => {}
        }
    }

    let startup_id = startup_id.unwrap_or_default();
    require_startup_id(&startup_id)?;
    let pdf = pdf
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    let pitch_text = pdf_to_text(pdf).await?;
    Ok(Json(run_chain(&state, startup_id, &pitch_text).await))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_startup_id(startup_id: &str) -> Result<(), AppError> {
    if startup_id.trim().is_empty() {
        return Err(AppError::Validation("startup_id cannot be empty".to_string()));
    }
    Ok(())
}

async fn pdf_to_text(pdf: Bytes) -> Result<String, AppError> {
    let text = extract_pdf_text(pdf).await?;
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Failed to extract text from pitch deck".to_string(),
        ));
    }
    Ok(text)
}

async fn run_chain(state: &AppState, startup_id: String, pitch_text: &str) -> QuestionnaireResponse {
    info!("Generating questionnaire for startup {startup_id}");
    let questions = state.chain.run_extraction_chain(pitch_text).await;
    QuestionnaireResponse {
        startup_id,
        questions,
        status: "completed".to_string(),
        generated_at: Utc::now(),
    }
}
