use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::fetcher::ArticleFetcher;
use crate::generation::{GeminiClient, RetryPolicy, ScriptGenerator};
use crate::script::ScriptPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: ScriptPipeline,
}

impl AppState {
    pub fn new(pipeline: ScriptPipeline) -> Self {
        Self { pipeline }
    }

    /// Wire the production fetcher and generation client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = ArticleFetcher::new()?;
        let client = GeminiClient::new(config)?;
        let retry = RetryPolicy::new(
            config.generation_max_attempts(),
            config.generation_base_backoff(),
        );

        Ok(Self::new(ScriptPipeline::new(
            fetcher,
            ScriptGenerator::new(Arc::new(client), retry),
        )))
    }
}
