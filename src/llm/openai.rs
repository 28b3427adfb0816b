use async_openai::{config::OpenAIConfig, types::CreateCompletionRequestArgs, Client};
use backoff::{future::retry, ExponentialBackoff};
use url::Url;

use super::{LanguageModel, LlmServiceError};

/// Completion client for any OpenAI-compatible endpoint. Retry policy lives
/// here, at the service boundary, never in the mutation operators.
pub(crate) struct OpenAiCompletionService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_tokens: u16,
}

impl OpenAiCompletionService {
    pub(crate) fn new(
        api_base: Url,
        api_key: Option<String>,
        model_name: String,
        max_tokens: u16,
    ) -> Self {
        let mut config = OpenAIConfig::new().with_api_base(api_base.as_str().trim_end_matches('/'));
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        Self {
            client: Client::with_config(config),
            model_name,
            max_tokens,
        }
    }
}

impl LanguageModel for OpenAiCompletionService {
    async fn complete(&self, prompt: &str) -> Result<String, LlmServiceError> {
        let response = retry(ExponentialBackoff::default(), || async {
            let request = CreateCompletionRequestArgs::default()
                .max_tokens(self.max_tokens)
                .model(self.model_name.as_str())
                .n(1)
                .prompt(prompt)
                .build()
                .map_err(|e| backoff::Error::Permanent(LlmServiceError::AsyncOpenAiError(e)))?;

            self.client
                .completions()
                .create(request)
                .await
                .map_err(|e| backoff::Error::transient(LlmServiceError::AsyncOpenAiError(e)))
        })
        .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmServiceError::EmptyResponse)?;

        Ok(choice.text)
    }
}
