use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

use reelscript::{app, app_state::AppState, config::Config};

pub const TEST_API_KEY: &str = "test-api-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-pro:generateContent";

/// The production router, talking to a generation service at `gemini_uri`.
pub fn test_app(gemini_uri: &str) -> Router {
    test_app_with_retries(gemini_uri, 1)
}

pub fn test_app_with_retries(gemini_uri: &str, max_attempts: u32) -> Router {
    let config = Config::new(TEST_API_KEY)
        .with_gemini_base_url(gemini_uri)
        .with_generation_retries(max_attempts, Duration::from_millis(1));
    let state = AppState::from_config(&config).expect("Failed to build state");
    app::router(state, None)
}

pub fn gemini_text(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub async fn post_script(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-script")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Text of the single prompt part the service received.
pub fn sent_prompt(request: &wiremock::Request) -> String {
    let body: Value = serde_json::from_slice(&request.body).unwrap();
    body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}
