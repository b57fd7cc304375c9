// Questionnaire chain prompt templates.
// Each stage's prompt is built independently from the previous stage's raw text.

/// Literal token the extraction stage uses for absent checklist fields.
pub const NOT_FOUND_TOKEN: &str = "Not Found";

/// Stage 1: extract. Replace `{not_found}` and `{checklist}`. The pitch-deck text is sent as context.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"You are a VC analyst. Extract key information from the pitch deck text below and populate the Investor Checklist.
Populate every field. For any information not explicitly mentioned, state "{not_found}". Respond with ONLY the populated JSON object.

[Investor Checklist]
{checklist}"#;

/// Stage 2: gap analysis. Replace `{not_found}` then `{extracted}`. Sent with an empty context.
pub const GAP_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a skeptical but fair VC analyst. Review the Extracted Data Summary.
1. Identify crucial topics from the checklist that are marked "{not_found}".
2. Identify potential red flags (e.g., unrealistic claims, inconsistencies, missing metrics).
List these points as a simple JSON array of strings.

[Extracted Data Summary]
{extracted}"#;

/// Stage 3: question generation. Fixed text; the gap analysis is sent as context.
pub const QUESTION_PROMPT: &str = r#"You are an AI assistant creating a professional questionnaire for a startup founder.
Based on the provided Analysis Topics, generate a set of 10-15 clear questions.

Format your response as a JSON array of question objects with this structure:
[
  {"id": "q1", "text": "What is your total addressable market (TAM)?", "category": "market", "type": "text"},
  {"id": "q2", "text": "What is your customer acquisition cost (CAC)?", "category": "unit_economics", "type": "text"},
  ...
]

Use these categories: "market", "unit_economics", "revenue", "competition", "strategy", "team", "product", "financials"
All questions should have type "text"

Respond with ONLY the JSON array and nothing else."#;
