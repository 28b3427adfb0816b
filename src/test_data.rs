use std::{cell::RefCell, collections::VecDeque};

use crate::llm::{LanguageModel, LlmServiceError};

/// Deterministic language model for tests: records every prompt it is sent
/// and answers from a script, falling back to a fixed response.
pub(crate) struct StubLlm {
    script: RefCell<VecDeque<String>>,
    fixed: Option<String>,
    seen: RefCell<Vec<String>>,
}

impl StubLlm {
    pub(crate) fn returning<S: AsRef<str>>(response: S) -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fixed: Some(String::from(response.as_ref())),
            seen: RefCell::new(vec![]),
        }
    }

    pub(crate) fn script<const N: usize>(responses: [&str; N]) -> Self {
        Self {
            script: RefCell::new(responses.iter().map(|s| String::from(*s)).collect()),
            fixed: None,
            seen: RefCell::new(vec![]),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl LanguageModel for StubLlm {
    async fn complete(&self, prompt: &str) -> Result<String, LlmServiceError> {
        self.seen.borrow_mut().push(String::from(prompt));
        if let Some(next) = self.script.borrow_mut().pop_front() {
            return Ok(next);
        }
        match &self.fixed {
            Some(response) => Ok(response.clone()),
            None => Err(LlmServiceError::EmptyResponse),
        }
    }
}
