//! Questionnaire response parser: the single normalization point between the
//! free-text generator and structured callers.
//!
//! Two steps:
//! 1. `extract_json_array`: best-effort structural extraction: the slice from
//!    the first `[` to the last `]`.
//! 2. Strict parse of that slice into `Vec<Question>`. Any failure (no brackets,
//!    invalid JSON, wrong field shapes, unknown category, empty list, blank
//!    text) discards the whole response in favour of `default_questions()`.
//!    There is no per-item salvage.
//!
//! Ids in an accepted list are reassigned as `q1`, `q2`, ... in array order.

use tracing::warn;

use crate::questionnaire::models::{default_questions, Question};

/// Returns the text between the first `[` and the last `]`, inclusive.
pub fn extract_json_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parses model output into questions. Never fails and never returns an empty list.
pub fn parse_questions(raw: &str) -> Vec<Question> {
    match try_parse_questions(raw) {
        Ok(questions) => questions,
        Err(reason) => {
            warn!("Failed to parse questionnaire JSON ({reason}); using default questions");
            default_questions()
        }
    }
}

fn try_parse_questions(raw: &str) -> Result<Vec<Question>, String> {
    let slice = extract_json_array(raw).ok_or_else(|| "no JSON array found".to_string())?;
    let mut questions: Vec<Question> = serde_json::from_str(slice).map_err(|e| e.to_string())?;
    validate(&questions)?;
    renumber(&mut questions);
    Ok(questions)
}

fn validate(questions: &[Question]) -> Result<(), String> {
    if questions.is_empty() {
        return Err("empty question list".to_string());
    }
    if questions.iter().any(|q| q.text.trim().is_empty()) {
        return Err("question with blank text".to_string());
    }
    Ok(())
}

fn renumber(questions: &mut [Question]) {
    for (i, q) in questions.iter_mut().enumerate() {
        q.id = format!("q{}", i + 1);
    }
}
