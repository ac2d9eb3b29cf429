use serde_json::{Value, json};
use tracing::debug;

use crate::budget::Language;
use crate::script::dtos::GenerateScriptRequest;

pub const DEFAULT_DURATION_SECS: u32 = 60;
pub const DEFAULT_EMOTION: &str = "Excited";
pub const DEFAULT_STANCE: &str = "Neutral";
pub const DEFAULT_EXTRA_INFO: &str = "None";

/// A request with every default applied and the duration coerced.
///
/// Coercion never fails: blank strings fall back to defaults and an unusable
/// duration becomes 60 seconds. Nothing here is reported back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptParams {
    pub url: Option<String>,
    pub emotion: String,
    pub language: Language,
    pub stance: String,
    pub duration_secs: u32,
    pub extra_info: String,
    /// Echoed in the response metadata.
    pub raw_duration: Value,
}

impl ScriptParams {
    pub fn from_request(request: GenerateScriptRequest) -> Self {
        let duration_secs = match request.duration.as_ref().and_then(parse_duration) {
            Some(secs) => secs,
            None => {
                if request.duration.is_some() {
                    debug!(duration = ?request.duration, "unusable duration, using default");
                }
                DEFAULT_DURATION_SECS
            }
        };

        let language = match non_blank(request.language) {
            Some(name) => Language::from_name(&name),
            None => Language::default(),
        };
        if !language.is_recognized() {
            debug!(%language, "no speaking rate for language, using default rate");
        }

        Self {
            url: non_blank(request.url),
            emotion: non_blank(request.emotion).unwrap_or_else(|| DEFAULT_EMOTION.to_string()),
            language,
            stance: non_blank(request.stance).unwrap_or_else(|| DEFAULT_STANCE.to_string()),
            duration_secs,
            extra_info: non_blank(request.extra_info)
                .unwrap_or_else(|| DEFAULT_EXTRA_INFO.to_string()),
            raw_duration: request.duration.unwrap_or_else(|| json!(DEFAULT_DURATION_SECS)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Positive whole seconds from a JSON number or a string.
///
/// Strings are read like `parseInt`: leading whitespace and sign, then the
/// longest digit prefix, so `"90s"` is 90. Fractions are truncated.
pub fn parse_duration(value: &Value) -> Option<u32> {
    let secs = match value {
        Value::Number(number) => {
            if let Some(secs) = number.as_u64() {
                secs
            } else {
                let secs = number.as_f64()?;
                if !secs.is_finite() || secs < 1.0 {
                    return None;
                }
                // Saturating cast.
                secs.trunc() as u64
            }
        }
        Value::String(text) => parse_int_prefix(text)?,
        _ => return None,
    };

    match secs {
        0 => None,
        secs => Some(u32::try_from(secs).unwrap_or(u32::MAX)),
    }
}

fn parse_int_prefix(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return None;
    }

    // Overlong digit strings saturate; the word budget clamps anyway.
    Some(digits[..end].parse::<u64>().unwrap_or(u64::MAX))
}
