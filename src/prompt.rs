//! Builds the instruction text sent to the generation service.
//!
//! The target and the minimum word count appear both in the brief and in the
//! closing rules.

use std::fmt::Write;

use crate::budget::WordBudget;
use crate::extractor::ExtractedText;
use crate::script::ScriptParams;

/// Section headers the script must contain, in order.
pub const SECTION_HEADERS: [&str; 4] = ["[HOOK]", "[BODY]", "[VISUAL CUES]", "[ENDING]"];

/// A fully composed generation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt(String);

impl GenerationPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn compose_prompt(
    params: &ScriptParams,
    budget: &WordBudget,
    article: &ExtractedText,
) -> GenerationPrompt {
    let target = budget.target_words();
    let min = budget.min_words();
    let language = params.language.name();

    let mut prompt = String::with_capacity(article.as_str().len() + 1536);

    // Writing into a String cannot fail.
    let _ = write!(
        prompt,
        "You are a viral short-form video scriptwriter.

Write a {duration}-second script (~{target} words) based on the article content below.
Do NOT return fewer than {min} words.
If you must be concise, compress ideas, but keep the length target.

--- INPUTS ---
Language: {language}
Emotion/Tone: {emotion}
Stance: {stance}
Extra Info: {extra}
Source Article (raw text excerpt):
{article}
",
        duration = params.duration_secs,
        emotion = params.emotion,
        stance = params.stance,
        extra = params.extra_info,
        article = article.as_str(),
    );

    let _ = write!(
        prompt,
        "
--- STYLE & FORMAT (MUST FOLLOW) ---
Output ONLY this structure, in {language}:

{hook}
(1–2 killer lines. Pattern interrupt. Question or bold claim.)

{body}
(5–8 short lines. Conversational. No line > 12 words.
Summarize the key points from the article.
Weave in the chosen emotion and stance explicitly.
Use simple, punchy sentences.)

{cues}
- 3–5 bullet ideas: split-screen, B-roll, phone-in-hand, overlays, emojis.

{ending}
(2–3 lines. Satisfying punchline or CTA.)

--- RULES ---
- Aim ~{target} words total across sections (≥ {min}).
- Keep it video-ready: creator can read line-by-line.
- Avoid fluff; prefer concrete facts/details from the article.
- Keep names/numbers accurate if present.",
        hook = SECTION_HEADERS[0],
        body = SECTION_HEADERS[1],
        cues = SECTION_HEADERS[2],
        ending = SECTION_HEADERS[3],
    );

    GenerationPrompt(prompt)
}
