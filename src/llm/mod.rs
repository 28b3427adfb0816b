pub(crate) mod openai;

use std::fmt::{Display, Formatter, Result};

/// The language-model collaborator: one prompt in, one completion out. The
/// mutation core imposes no format on the text in either direction.
#[allow(async_fn_in_trait)]
pub(crate) trait LanguageModel {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, LlmServiceError>;
}

#[derive(Debug)]
pub(crate) enum LlmServiceError {
    AsyncOpenAiError(async_openai::error::OpenAIError),
    EmptyResponse,
}

impl std::error::Error for LlmServiceError {}

impl Display for LlmServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LlmServiceError::AsyncOpenAiError(err) => write!(f, "LLMService: {}", err),
            LlmServiceError::EmptyResponse => write!(f, "LLMService: Empty response from service"),
        }
    }
}
