pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::{ExtractedText, ExtractionOutcome};

use tracing::{info, warn};

use crate::fetcher::ArticleFetcher;

/// Produce prompt context for an optional source URL.
///
/// Never fails: a missing URL, a failed fetch or an empty page each map to a
/// placeholder text.
pub async fn extract_article_text(fetcher: &ArticleFetcher, url: Option<&str>) -> ExtractedText {
    let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) else {
        return ExtractedText::no_url();
    };

    match fetcher.fetch(url).await {
        Ok(page) => {
            let extracted = ExtractedText::from_raw(&reader::extract_text(&page.body));
            info!(
                url = %page.url_final,
                encoding = page.encoding,
                chars = extracted.as_str().chars().count(),
                outcome = ?extracted.outcome(),
                "article text extracted"
            );
            extracted
        }
        Err(e) => {
            warn!(url, error = %e, "article fetch failed, continuing with fallback text");
            ExtractedText::fetch_failed()
        }
    }
}
