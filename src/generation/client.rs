use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::generation::{
    errors::GenerationError,
    types::{GenerateContentRequest, GenerateContentResponse},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// The external text generation service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}

/// `generateContent` over the Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        let client = ClientBuilder::new()
            .timeout(config.gemini_timeout())
            .build()
            .map_err(|e| GenerationError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.gemini_base_url().trim_end_matches('/'),
                config.gemini_model()
            ),
            model: config.gemini_model().to_string(),
            api_key: config.gemini_api_key().to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(GenerationError::from_reqwest_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(GenerationError::from_reqwest_error)?;

        if !status.is_success() {
            return Err(GenerationError::from_status(status, &body));
        }

        debug!(bytes = body.len(), "generation response received");

        serde_json::from_str(&body).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}
