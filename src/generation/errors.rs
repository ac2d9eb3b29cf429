use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("authentication rejected ({status}): {message}")]
    Unauthorized { status: StatusCode, message: String },

    #[error("quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("service error {status}: {message}")]
    Service { status: StatusCode, message: String },

    #[error("undecodable response: {0}")]
    InvalidResponse(String),

    #[error("client setup failed: {0}")]
    Client(String),
}

impl GenerationError {
    /// Whether repeating the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Timeout => true,
            Self::QuotaExceeded { .. } => true,
            Self::Service { status, .. } => status.is_server_error(),

            Self::Unauthorized { .. } => false,
            Self::InvalidResponse(_) => false,
            Self::Client(_) => false,
        }
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Classify a non-success status. `body` is the raw error payload.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = error_message(body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::Unauthorized { status, message }
            }
            StatusCode::TOO_MANY_REQUESTS => Self::QuotaExceeded { message },
            _ => Self::Service { status, message },
        }
    }
}

// Google APIs wrap failures as {"error": {"code", "message", "status"}}.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                "<empty body>".to_string()
            } else {
                body.chars().take(512).collect()
            }
        })
}
