//! Deterministic generator for tests. Replays scripted responses in order and
//! records every `(prompt, context)` pair it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub context: String,
}

pub struct StubGenerator {
    responses: Mutex<VecDeque<String>>,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubGenerator {
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str, context: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            context: context.to_string(),
        });

        if let Some(message) = &self.failure {
            return Err(LlmError::Api {
                status: 429,
                message: message.clone(),
            });
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyContent)
    }
}
