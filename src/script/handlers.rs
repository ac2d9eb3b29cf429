use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::{
    app_state::AppState,
    script::{
        ScriptParams,
        dtos::{ErrorResponse, GenerateScriptRequest, ScriptResult},
    },
};

#[utoipa::path(
    post,
    path = "/generate-script",
    tag = "script",
    request_body = GenerateScriptRequest,
    responses(
        (status = 200, description = "Script generated", body = ScriptResult),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_script(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScriptRequest>, JsonRejection>,
) -> Response {
    // A body sent without a JSON content type is treated as empty.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => {
            debug!("request body is not JSON, using defaults");
            GenerateScriptRequest::default()
        }
        Err(rejection) => return rejection.into_response(),
    };
    let params = ScriptParams::from_request(payload);

    match state.pipeline.run(params).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(error = %e, "script generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::generic()),
            )
                .into_response()
        }
    }
}
