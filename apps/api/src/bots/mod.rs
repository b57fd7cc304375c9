// Investor bots: deal-note deep dive (strictly grounded) and portfolio screener.
// All model calls go through llm_client::TextGenerator.

pub mod deep_dive;
pub mod handlers;
pub mod prompts;
pub mod screener;
