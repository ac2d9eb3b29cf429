use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::generation::{
    client::TextGenerator,
    errors::GenerationError,
    response::{NO_SCRIPT_PLACEHOLDER, ResponseText},
    retry::RetryPolicy,
    types::GenerateContentRequest,
};
use crate::prompt::GenerationPrompt;

/// Turns a composed prompt into script text.
#[derive(Clone)]
pub struct ScriptGenerator {
    generator: Arc<dyn TextGenerator>,
    retry: RetryPolicy,
}

impl ScriptGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>, retry: RetryPolicy) -> Self {
        Self { generator, retry }
    }

    /// A response without any text yields the placeholder script; only
    /// failed calls are errors.
    #[instrument(skip_all, fields(prompt_chars = prompt.as_str().chars().count()))]
    pub async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError> {
        let request = GenerateContentRequest::for_prompt(prompt);
        let generator = &self.generator;
        let request = &request;

        let response = self
            .retry
            .run(move || generator.generate_content(request))
            .await
            .inspect_err(|e| {
                error!(error = %e, retryable = e.is_retryable(), "generation service call failed")
            })?;

        match response.best_effort_text() {
            Some(script) => {
                info!(script_chars = script.chars().count(), "script generated");
                Ok(script)
            }
            None => {
                warn!(diagnostic = %response.diagnostic(), "generation response had no text");
                Ok(NO_SCRIPT_PLACEHOLDER.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::client::MockTextGenerator;
    use crate::generation::types::{Candidate, Content, GenerateContentResponse, Part};
    use reqwest::StatusCode;
    use std::time::Duration;

    fn prompt() -> GenerationPrompt {
        crate::prompt::compose_prompt(
            &crate::script::ScriptParams::from_request(Default::default()),
            &crate::budget::WordBudget::new(60, &crate::budget::Language::English),
            &crate::extractor::ExtractedText::no_url(),
        )
    }

    fn text_response(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }]),
            prompt_feedback: None,
        }
    }

    #[tokio::test]
    async fn test_sends_prompt_as_single_user_message() {
        let prompt = prompt();
        let expected_text = prompt.as_str().to_string();

        let mut mock = MockTextGenerator::new();
        mock.expect_generate_content()
            .withf(move |request| {
                request.contents.len() == 1
                    && request.contents[0].role.as_deref() == Some("user")
                    && request.contents[0].parts.len() == 1
                    && request.contents[0].parts[0].text.as_deref() == Some(expected_text.as_str())
                    && request.generation_config.max_output_tokens == 1200
                    && request.generation_config.temperature == 0.9
                    && request.generation_config.top_p == 0.95
            })
            .times(1)
            .returning(|_| Ok(text_response("[HOOK]\nWow.")));

        let generator = ScriptGenerator::new(Arc::new(mock), RetryPolicy::none());
        assert_eq!(generator.generate(&prompt).await.unwrap(), "[HOOK]\nWow.");
    }

    #[tokio::test]
    async fn test_empty_response_becomes_placeholder() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_content()
            .times(1)
            .returning(|_| Ok(GenerateContentResponse::default()));

        let generator = ScriptGenerator::new(Arc::new(mock), RetryPolicy::none());
        assert_eq!(generator.generate(&prompt()).await.unwrap(), NO_SCRIPT_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_service_failure_is_returned_once_without_retry_policy() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate_content().times(1).returning(|_| {
            Err(GenerationError::from_status(
                StatusCode::TOO_MANY_REQUESTS,
                r#"{"error": {"message": "quota"}}"#,
            ))
        });

        let generator = ScriptGenerator::new(Arc::new(mock), RetryPolicy::none());
        assert!(matches!(
            generator.generate(&prompt()).await,
            Err(GenerationError::QuotaExceeded { .. })
        ));
    }

    #[tokio::test]
    async fn test_retry_policy_wraps_the_call() {
        let mut mock = MockTextGenerator::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_generate_content()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(GenerationError::Timeout));
        mock.expect_generate_content()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(text_response("second try")));

        let generator = ScriptGenerator::new(
            Arc::new(mock),
            RetryPolicy::new(3, Duration::from_millis(1)),
        );
        assert_eq!(generator.generate(&prompt()).await.unwrap(), "second try");
    }
}
