/// Upper bound on the article text handed to the prompt, in characters.
pub const MAX_TEXT_CHARS: usize = 8000;

pub const NO_URL_TEXT: &str = "No URL provided.";
pub const EMPTY_TEXT: &str = "No text extracted.";
pub const FETCH_FAILED_TEXT: &str =
    "Failed to fetch the article content. Use what you can from the link.";

/// Which path produced an [`ExtractedText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Extracted,
    NoUrl,
    Empty,
    Failed,
}

/// Article text ready for prompting. Always non-empty: failures carry a
/// placeholder instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    outcome: ExtractionOutcome,
}

impl ExtractedText {
    /// Wrap raw extracted text, capping it at [`MAX_TEXT_CHARS`].
    pub fn from_raw(raw: &str) -> Self {
        let text = truncate_chars(raw, MAX_TEXT_CHARS);
        if text.is_empty() {
            return Self::placeholder(EMPTY_TEXT, ExtractionOutcome::Empty);
        }
        Self {
            text: text.to_string(),
            outcome: ExtractionOutcome::Extracted,
        }
    }

    pub fn no_url() -> Self {
        Self::placeholder(NO_URL_TEXT, ExtractionOutcome::NoUrl)
    }

    pub fn fetch_failed() -> Self {
        Self::placeholder(FETCH_FAILED_TEXT, ExtractionOutcome::Failed)
    }

    fn placeholder(text: &str, outcome: ExtractionOutcome) -> Self {
        Self {
            text: text.to_string(),
            outcome,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn outcome(&self) -> ExtractionOutcome {
        self.outcome
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
