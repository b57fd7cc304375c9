// Investor bot prompt templates.
// All prompts for the bots module are defined here.

/// The exact sentence the model must emit when the deal note does not answer the question.
pub const NOT_AVAILABLE_ANSWER: &str = "This information is not available in the provided deal note.";

/// Deep-dive prompt. Replace `{fallback}` then `{user_question}` before sending.
/// The deal note itself travels as the generation context, not inside this text.
pub const DEEP_DIVE_PROMPT_TEMPLATE: &str = r#"You are a meticulous VC analyst assistant. Your task is to answer the user's question based *strictly* and *only* on the provided context (the company's deal note).
- If the answer is in the context, provide it clearly and concisely. You can quote specific numbers or facts.
- If the information is not present in the context, you MUST respond with: "{fallback}"
- Do not use any external knowledge or make assumptions.

User's Question: "{user_question}""#;

/// Screener prompt. Replace `{message}` before sending.
pub const SCREENER_PROMPT_TEMPLATE: &str = r#"You are a helpful VC analyst assistant. The investor is asking about startups: "{message}"

Based on the context provided about our startups, provide a concise and relevant response.
If the query mentions specific criteria (like sector, revenue range, etc.), filter the startups accordingly.
If no startups match the criteria, clearly state that no matching startups were found."#;

pub const SCREENER_CONTEXT_HEADER: &str = "Here are all the startups in our database:\n\n";

pub const SCREENER_EMPTY_CONTEXT: &str = "No startups found in our database.";

pub fn not_found_reply(company_name: &str) -> String {
    format!("Sorry, I could not find a deal note for '{company_name}'.")
}
