//! Configuration handling for the application.
//!
//! Everything is read from environment variables by `Config::from_env`. Most
//! settings have development defaults; the generation service credential does
//! not, and loading fails when it is missing.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Environment variable names. Public so tests and deployment tooling can
/// refer to them.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_GEMINI_TIMEOUT_SECS: &str = "GEMINI_TIMEOUT_SECS";
pub const ENV_GENERATION_MAX_ATTEMPTS: &str = "GENERATION_MAX_ATTEMPTS";
pub const ENV_GENERATION_BASE_BACKOFF_MS: &str = "GENERATION_BASE_BACKOFF_MS";
pub const ENV_BIND_HOST: &str = "BIND_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;
const DEFAULT_GENERATION_MAX_ATTEMPTS: u32 = 1;
const DEFAULT_GENERATION_BASE_BACKOFF_MS: u64 = 500;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "public";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    gemini_api_key: String,
    gemini_model: String,
    gemini_base_url: String,
    gemini_timeout: Duration,
    generation_max_attempts: u32,
    generation_base_backoff: Duration,
    bind_host: String,
    port: u16,
    static_dir: String,
    log_format: LogFormat,
}

impl Config {
    /// Create a config with the given credential and development defaults for
    /// everything else.
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
            generation_max_attempts: DEFAULT_GENERATION_MAX_ATTEMPTS,
            generation_base_backoff: Duration::from_millis(DEFAULT_GENERATION_BASE_BACKOFF_MS),
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            log_format: LogFormat::Text,
        }
    }

    /// Point the generation client at another base URL (used by tests).
    pub fn with_gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = base_url.into();
        self
    }

    pub fn with_generation_retries(mut self, max_attempts: u32, base_backoff: Duration) -> Self {
        self.generation_max_attempts = max_attempts.max(1);
        self.generation_base_backoff = base_backoff;
        self
    }

    /// Load from environment variables.
    ///
    /// Fails when `GEMINI_API_KEY` is unset or blank, or when a numeric
    /// setting cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing {
                field: ENV_GEMINI_API_KEY,
            })?;

        let mut config = Self::new(gemini_api_key);

        if let Ok(model) = env::var(ENV_GEMINI_MODEL) {
            config.gemini_model = model;
        }
        if let Ok(base_url) = env::var(ENV_GEMINI_BASE_URL) {
            config.gemini_base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_var::<u64>(ENV_GEMINI_TIMEOUT_SECS)? {
            config.gemini_timeout = Duration::from_secs(secs);
        }
        if let Some(attempts) = parse_var::<u32>(ENV_GENERATION_MAX_ATTEMPTS)? {
            if attempts == 0 {
                return Err(ConfigError::InvalidValue {
                    field: ENV_GENERATION_MAX_ATTEMPTS,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.generation_max_attempts = attempts;
        }
        if let Some(ms) = parse_var::<u64>(ENV_GENERATION_BASE_BACKOFF_MS)? {
            config.generation_base_backoff = Duration::from_millis(ms);
        }
        if let Ok(host) = env::var(ENV_BIND_HOST) {
            config.bind_host = host;
        }
        if let Some(port) = parse_var::<u16>(ENV_PORT)? {
            config.port = port;
        }
        if let Ok(dir) = env::var(ENV_STATIC_DIR) {
            config.static_dir = dir;
        }
        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            config.log_format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "" => LogFormat::Text,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_LOG_FORMAT,
                        reason: format!("expected 'text' or 'json', got '{}'", other),
                    });
                }
            };
        }

        Ok(config)
    }

    /// Credential for the generation service.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }
    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }
    /// Request timeout applied to every generation call.
    pub fn gemini_timeout(&self) -> Duration {
        self.gemini_timeout
    }
    pub fn generation_max_attempts(&self) -> u32 {
        self.generation_max_attempts
    }
    pub fn generation_base_backoff(&self) -> Duration {
        self.generation_base_backoff
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
    /// Directory holding the front-end bundle.
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

// The credential never shows up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_timeout", &self.gemini_timeout)
            .field("generation_max_attempts", &self.generation_max_attempts)
            .field("generation_base_backoff", &self.generation_base_backoff)
            .field("bind_host", &self.bind_host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn parse_var<T: std::str::FromStr>(field: &'static str) -> Result<Option<T>, ConfigError>
where
    T::Err: Display,
{
    match env::var(field) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    Missing { field: &'static str },
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing { field } => {
                write!(f, "missing required environment variable '{}'", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
