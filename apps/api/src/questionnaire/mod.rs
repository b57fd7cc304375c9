// Founder questionnaire generation.
// Implements: checklist extraction, gap analysis, question generation, response parsing,
// and pitch-deck PDF ingestion. All model calls go through llm_client::TextGenerator.

pub mod chain;
pub mod checklist;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod pitch_deck;
pub mod prompts;
