pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::bots::handlers as bots;
use crate::corpus::handlers as deal_notes;
use crate::questionnaire::handlers as questionnaire;
use crate::state::AppState;

/// Pitch decks are uploaded whole; the default 2 MB limit is too small.
const PITCH_DECK_UPLOAD_LIMIT: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Deal notes (read-only corpus)
        .route("/api/v1/deal-notes", get(deal_notes::handle_list_deal_notes))
        .route(
            "/api/v1/deal-notes/:company",
            get(deal_notes::handle_get_deal_note),
        )
        // Investor bots
        .route("/api/v1/bots/deep-dive", post(bots::handle_deep_dive))
        .route("/api/v1/bots/screener", post(bots::handle_screener))
        // Founder questionnaire
        .route(
            "/api/v1/questionnaire",
            post(questionnaire::handle_generate_questionnaire),
        )
        .route(
            "/api/v1/questionnaire/upload",
            post(questionnaire::handle_upload_questionnaire)
                .layer(DefaultBodyLimit::max(PITCH_DECK_UPLOAD_LIMIT)),
        )
        .with_state(state)
}
