//! Spoken-duration to word-count arithmetic.

pub mod language;

pub use language::{DEFAULT_WORDS_PER_SECOND, Language};

/// Multiplier applied so scripts do not come out short.
const LENGTH_BUFFER: f64 = 1.05;
/// Share of the target the script must reach at minimum.
const MIN_WORDS_RATIO: f64 = 0.9;

pub const MIN_TARGET_WORDS: u32 = 60;
pub const MAX_TARGET_WORDS: u32 = 450;

/// Word count a script of `duration_secs` seconds should have when spoken in
/// `language`, kept within [`MIN_TARGET_WORDS`, `MAX_TARGET_WORDS`].
pub fn target_words(duration_secs: u32, language: &Language) -> u32 {
    let raw = (f64::from(duration_secs) * language.words_per_second() * LENGTH_BUFFER).round();
    // The float-to-int cast saturates, so huge durations land on the clamp.
    (raw as u32).clamp(MIN_TARGET_WORDS, MAX_TARGET_WORDS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBudget {
    target_words: u32,
    min_words: u32,
}

impl WordBudget {
    pub fn new(duration_secs: u32, language: &Language) -> Self {
        let target_words = target_words(duration_secs, language);
        Self {
            target_words,
            min_words: (f64::from(target_words) * MIN_WORDS_RATIO).floor() as u32,
        }
    }

    pub fn target_words(&self) -> u32 {
        self.target_words
    }

    /// Floor of 90% of the target.
    pub fn min_words(&self) -> u32 {
        self.min_words
    }
}
