//! Questionnaire chain: derives founder questions from unstructured pitch-deck text.
//!
//! Flow: extract (checklist + deck) → gap analysis (extracted text) →
//!       question generation (gaps as context) → parse_questions.
//!
//! Stages run strictly in sequence, one generation call each, no retries.
//! Stage outputs are raw text and flow forward unvalidated. Only the final
//! stage is parsed, and that parse always yields a usable question list.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::{generate_or_marker, TextGenerator};
use crate::questionnaire::checklist::{render_checklist, INVESTOR_CHECKLIST};
use crate::questionnaire::models::Question;
use crate::questionnaire::parser::parse_questions;
use crate::questionnaire::prompts::{
    EXTRACT_PROMPT_TEMPLATE, GAP_ANALYSIS_PROMPT_TEMPLATE, NOT_FOUND_TOKEN, QUESTION_PROMPT,
};

/// Raw text threaded between the three stages of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChainState {
    pub extracted: String,
    pub gaps: String,
    pub raw_questionnaire: String,
}

pub struct ExtractionChain {
    generator: Arc<dyn TextGenerator>,
}

impl ExtractionChain {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Runs the full chain. Empty pitch-deck text yields an empty list without
    /// any generation call; otherwise the result is never empty.
    pub async fn run_extraction_chain(&self, pitch_text: &str) -> Vec<Question> {
        match self.run_stages(pitch_text).await {
            Some(state) => {
                let questions = parse_questions(&state.raw_questionnaire);
                info!("Questionnaire chain produced {} questions", questions.len());
                questions
            }
            None => Vec::new(),
        }
    }

    /// Runs the three generation stages and returns their raw outputs.
    /// Returns `None` when the pitch-deck text is empty.
    pub async fn run_stages(&self, pitch_text: &str) -> Option<ChainState> {
        if pitch_text.trim().is_empty() {
            warn!("Pitch deck text is empty; skipping questionnaire chain");
            return None;
        }

        let extracted = self.extract(pitch_text).await;
        let gaps = self.analyze_gaps(&extracted).await;
        let raw_questionnaire = self.generate_questions(&gaps).await;

        Some(ChainState {
            extracted,
            gaps,
            raw_questionnaire,
        })
    }

    /// Stage 1: populate the investor checklist from the deck text.
    pub async fn extract(&self, pitch_text: &str) -> String {
        info!("Step 1: Analyzing pitch deck and extracting key info...");
        let prompt = build_extract_prompt();
        generate_or_marker(self.generator.as_ref(), &prompt, pitch_text).await
    }

    /// Stage 2: list missing checklist topics and red flags.
    /// The output is meant to be a JSON array of strings but is passed on as plain text.
    pub async fn analyze_gaps(&self, extracted: &str) -> String {
        info!("Step 2: Identifying missing information and potential red flags...");
        let prompt = build_gap_analysis_prompt(extracted);
        generate_or_marker(self.generator.as_ref(), &prompt, "").await
    }

    /// Stage 3: turn the gap analysis into a question set.
    pub async fn generate_questions(&self, gaps: &str) -> String {
        info!("Step 3: Generating tailored questionnaire...");
        generate_or_marker(self.generator.as_ref(), QUESTION_PROMPT, gaps).await
    }
}

pub fn build_extract_prompt() -> String {
    EXTRACT_PROMPT_TEMPLATE
        .replace("{not_found}", NOT_FOUND_TOKEN)
        .replace("{checklist}", &render_checklist(INVESTOR_CHECKLIST))
}

pub fn build_gap_analysis_prompt(extracted: &str) -> String {
    GAP_ANALYSIS_PROMPT_TEMPLATE
        .replace("{not_found}", NOT_FOUND_TOKEN)
        .replace("{extracted}", extracted)
}
