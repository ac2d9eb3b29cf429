use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    health::{self, HealthResponse},
    script::{
        self,
        dtos::{ErrorResponse, GenerateScriptRequest, ScriptMeta, ScriptResult},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(script::handlers::generate_script, health::health_check),
    components(schemas(
        GenerateScriptRequest,
        ScriptResult,
        ScriptMeta,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "script", description = "Short-form video script generation"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// The full HTTP surface. When `static_dir` exists it is served for every
/// path no route claims.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/generate-script", post(script::handlers::generate_script))
        .route("/healthz", get(health::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = static_dir.filter(|dir| dir.is_dir()) {
        info!(dir = %dir.display(), "serving static assets");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CorsLayer::permissive()),
    )
}
