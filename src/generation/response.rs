use crate::generation::types::{Candidate, GenerateContentResponse};

/// Substituted when a response parses but carries no text.
pub const NO_SCRIPT_PLACEHOLDER: &str = "⚠️ No script generated.";

/// Best-effort text lookup over a generation response, so callers never
/// branch on response shape.
pub trait ResponseText {
    fn best_effort_text(&self) -> Option<String>;
}

impl ResponseText for GenerateContentResponse {
    fn best_effort_text(&self) -> Option<String> {
        self.text().or_else(|| self.first_part_text())
    }
}

impl GenerateContentResponse {
    /// All text parts of the first candidate, concatenated.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .candidate_iter()
            .next()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        non_blank(text)
    }

    /// First non-empty text part of any candidate.
    fn first_part_text(&self) -> Option<String> {
        self.candidate_iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .find(|text| !text.trim().is_empty())
            .map(str::to_string)
    }

    fn candidate_iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().flatten()
    }

    /// Why no text came back, for logs.
    pub fn diagnostic(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return format!("prompt blocked: {}", reason);
        }
        match self.candidate_iter().next() {
            Some(candidate) => format!(
                "finish reason: {}",
                candidate.finish_reason.as_deref().unwrap_or("UNKNOWN")
            ),
            None => "no candidates".to_string(),
        }
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}
