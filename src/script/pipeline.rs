use tracing::{debug, instrument};

use crate::budget::WordBudget;
use crate::extractor::extract_article_text;
use crate::fetcher::ArticleFetcher;
use crate::generation::{GenerationError, ScriptGenerator};
use crate::prompt::compose_prompt;
use crate::script::{ScriptMeta, ScriptParams, ScriptResult};

/// Extraction, budgeting, prompting and generation for one request.
/// Nothing outlives the call.
#[derive(Clone)]
pub struct ScriptPipeline {
    fetcher: ArticleFetcher,
    generator: ScriptGenerator,
}

impl ScriptPipeline {
    pub fn new(fetcher: ArticleFetcher, generator: ScriptGenerator) -> Self {
        Self { fetcher, generator }
    }

    #[instrument(
        skip_all,
        fields(language = %params.language, duration_secs = params.duration_secs)
    )]
    pub async fn run(&self, params: ScriptParams) -> Result<ScriptResult, GenerationError> {
        let article = extract_article_text(&self.fetcher, params.url.as_deref()).await;
        let budget = WordBudget::new(params.duration_secs, &params.language);
        let prompt = compose_prompt(&params, &budget, &article);

        debug!(
            target_words = budget.target_words(),
            min_words = budget.min_words(),
            article = ?article.outcome(),
            prompt_chars = prompt.as_str().chars().count(),
            "prompt composed"
        );

        let script = self.generator.generate(&prompt).await?;

        Ok(ScriptResult {
            script,
            meta: ScriptMeta {
                target_words: budget.target_words(),
                duration: params.raw_duration,
            },
        })
    }
}
