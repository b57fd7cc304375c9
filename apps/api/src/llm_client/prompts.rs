// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the wrapper every call goes through.

/// Envelope applied to every generation call. Replace `{context}` and `{user_prompt}`.
pub const SUPERVISOR_PROMPT_TEMPLATE: &str = "You are an expert VC analyst assistant.
Use the provided context to complete the task.

[CONTEXT]
{context}

[TASK]
{user_prompt}
";

/// Prefix of every string produced in place of a failed generation call.
pub const FAILURE_MARKER: &str = "ERROR: LLM invocation failed.";

/// Renders the supervisor envelope. The context is substituted last so that
/// placeholder-looking text inside a user prompt is never expanded.
pub fn render_supervisor_prompt(user_prompt: &str, context: &str) -> String {
    let (head, tail) = SUPERVISOR_PROMPT_TEMPLATE
        .split_once("{user_prompt}")
        .unwrap_or((SUPERVISOR_PROMPT_TEMPLATE, ""));
    let head = head.replace("{context}", context);
    format!("{head}{user_prompt}{tail}")
}
