//! Deep-dive bot: answers one investor question grounded in a single deal note.
//!
//! Flow: find note → render as context → one generation call → raw reply.
//! Nothing here returns an error: a missing company yields a fixed sentence and
//! a failed generation call yields the failure-marker string.

use std::sync::Arc;

use tracing::info;

use crate::bots::prompts::{not_found_reply, DEEP_DIVE_PROMPT_TEMPLATE, NOT_AVAILABLE_ANSWER};
use crate::corpus::CorpusIndex;
use crate::llm_client::{generate_or_marker, TextGenerator};

pub struct DeepDiveBot {
    generator: Arc<dyn TextGenerator>,
}

impl DeepDiveBot {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn answer(&self, question: &str, company_name: &str, corpus: &CorpusIndex) -> String {
        info!("Deep dive on {company_name} - question: '{question}'");

        let Some(note) = corpus.find(company_name) else {
            return not_found_reply(company_name);
        };

        let context = note.to_context();
        let prompt = build_deep_dive_prompt(question);

        generate_or_marker(self.generator.as_ref(), &prompt, &context).await
    }
}

pub fn build_deep_dive_prompt(question: &str) -> String {
    DEEP_DIVE_PROMPT_TEMPLATE
        .replace("{fallback}", NOT_AVAILABLE_ANSWER)
        .replace("{user_question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DealNote;
    use crate::llm_client::prompts::FAILURE_MARKER;
    use crate::llm_client::stub::StubGenerator;
    use serde_json::json;

    fn hexafun_corpus() -> CorpusIndex {
        CorpusIndex::from_notes([DealNote::from_value(json!({
            "company": "Hexafun",
            "founders": {"vesting": "4 years"}
        }))
        .unwrap()])
    }

    #[tokio::test]
    async fn test_grounds_prompt_in_matching_note() {
        let stub = Arc::new(StubGenerator::with_responses(["Founders vest over 4 years."]));
        let bot = DeepDiveBot::new(stub.clone());

        let reply = bot
            .answer("What is the vesting period?", "Hexafun", &hexafun_corpus())
            .await;

        assert_eq!(reply, "Founders vest over 4 years.");
        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].context.contains("\"4 years\""));
        assert!(calls[0].prompt.contains(NOT_AVAILABLE_ANSWER));
        assert!(calls[0].prompt.contains("What is the vesting period?"));
    }

    #[tokio::test]
    async fn test_company_lookup_ignores_case() {
        let stub = Arc::new(StubGenerator::with_responses(["ok"]));
        let bot = DeepDiveBot::new(stub.clone());

        bot.answer("Who are the founders?", "hEXAFUN", &hexafun_corpus())
            .await;
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_company_returns_fixed_reply_without_calling_model() {
        let stub = Arc::new(StubGenerator::with_responses(["should not be used"]));
        let bot = DeepDiveBot::new(stub.clone());

        let reply = bot.answer("Anything?", "unknown-co", &hexafun_corpus()).await;

        assert_eq!(reply, "Sorry, I could not find a deal note for 'unknown-co'.");
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_becomes_marker_string() {
        let bot = DeepDiveBot::new(Arc::new(StubGenerator::failing("upstream timeout")));

        let reply = bot.answer("Q?", "Hexafun", &hexafun_corpus()).await;

        assert!(!reply.is_empty());
        assert!(reply.starts_with(FAILURE_MARKER));
        assert!(reply.contains("upstream timeout"));
    }

    #[tokio::test]
    async fn test_reply_is_returned_unmodified() {
        let raw = "  This information is not available in the provided deal note.\n";
        let bot = DeepDiveBot::new(Arc::new(StubGenerator::with_responses([raw])));

        let reply = bot.answer("Burn rate?", "Hexafun", &hexafun_corpus()).await;
        assert_eq!(reply, raw);
    }

    #[test]
    fn test_prompt_does_not_expand_placeholders_inside_question() {
        let prompt = build_deep_dive_prompt("what about {fallback}?");
        assert!(prompt.contains("what about {fallback}?"));
    }
}
