//! Deal screener: answers portfolio-wide questions ("which fintech startups
//! score above 8?") over a compact summary of every deal note.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::bots::prompts::{SCREENER_CONTEXT_HEADER, SCREENER_EMPTY_CONTEXT, SCREENER_PROMPT_TEMPLATE};
use crate::corpus::{CorpusIndex, DealNote};
use crate::llm_client::{generate_or_marker, TextGenerator};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// One prior turn of the conversation, as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

pub struct Screener {
    generator: Arc<dyn TextGenerator>,
}

impl Screener {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn screen(&self, message: &str, history: &[ChatTurn], corpus: &CorpusIndex) -> String {
        info!(
            "Deal screener query over {} notes: '{message}'",
            corpus.len()
        );

        let mut context = render_history(history);
        context.push_str(&render_portfolio(corpus));
        let prompt = SCREENER_PROMPT_TEMPLATE.replace("{message}", message);

        generate_or_marker(self.generator.as_ref(), &prompt, &context).await
    }
}

fn render_history(history: &[ChatTurn]) -> String {
    if history.is_empty() {
        return String::new();
    }
    let mut out = String::from("Previous conversation:\n");
    for turn in history {
        let _ = writeln!(out, "{}: {}", capitalize(&turn.role), turn.text);
    }
    out.push('\n');
    out
}

/// Summary of every note in load order.
pub fn render_portfolio(corpus: &CorpusIndex) -> String {
    if corpus.is_empty() {
        return SCREENER_EMPTY_CONTEXT.to_string();
    }

    let mut out = String::from(SCREENER_CONTEXT_HEADER);
    for (idx, note) in corpus.iter().enumerate() {
        render_note_summary(&mut out, idx + 1, note);
    }
    out
}

fn render_note_summary(out: &mut String, position: usize, note: &DealNote) {
    let score = display_figure(note.score_total_raw());
    let _ = writeln!(out, "{position}. {} (Score: {score})", note.company());

    if let Some(description) = note.description() {
        let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        let _ = writeln!(out, "   Description: {preview}...");
    }

    if let Some(revenue) = note.revenue() {
        let _ = writeln!(
            out,
            "   Revenue: Y1: {}, Y5: {}",
            display_figure(revenue.get("Y1")),
            display_figure(revenue.get("Y5"))
        );
    }

    out.push('\n');
}

fn display_figure(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(other) => other.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => "Unknown".to_string(),
    }
}
