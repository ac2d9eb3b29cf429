use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Error text returned for every generation failure. Callers cannot tell
/// causes apart from the response.
pub const GENERIC_FAILURE: &str = "Failed to generate script";

/// Body of `POST /generate-script`. Every field is optional.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateScriptRequest {
    /// Article to base the script on.
    pub url: Option<String>,
    pub emotion: Option<String>,
    pub language: Option<String>,
    pub stance: Option<String>,
    /// Target spoken length in seconds, as a number or numeric string.
    #[schema(value_type = Option<Object>, example = 60)]
    pub duration: Option<Value>,
    pub extra_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScriptResult {
    pub script: String,
    pub meta: ScriptMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScriptMeta {
    pub target_words: u32,
    /// The duration exactly as the caller sent it.
    #[schema(value_type = Object, example = 60)]
    pub duration: Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn generic() -> Self {
        Self {
            error: GENERIC_FAILURE.to_string(),
        }
    }
}
