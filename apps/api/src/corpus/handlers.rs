//! Read-only REST view of the loaded deal notes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DealNoteSummary {
    pub company: String,
    pub sector: Option<String>,
    pub score_total: Option<f64>,
}

/// GET /api/v1/deal-notes
pub async fn handle_list_deal_notes(State(state): State<AppState>) -> Json<Vec<DealNoteSummary>> {
    let summaries = state
        .corpus
        .iter()
        .map(|note| DealNoteSummary {
            company: note.company().to_string(),
            sector: note.sector().map(String::from),
            score_total: note.score_total(),
        })
        .collect();
    Json(summaries)
}

/// GET /api/v1/deal-notes/:company
pub async fn handle_get_deal_note(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> Result<Json<Value>, AppError> {
    let note = state
        .corpus
        .find(&company)
        .ok_or_else(|| AppError::NotFound(format!("No deal note for '{company}'")))?;
    Ok(Json(note.as_value().clone()))
}
