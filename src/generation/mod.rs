pub mod client;
pub mod errors;
pub mod orchestrator;
pub mod response;
pub mod retry;
pub mod types;

pub use client::{GeminiClient, TextGenerator};
pub use errors::GenerationError;
pub use orchestrator::ScriptGenerator;
pub use response::{NO_SCRIPT_PLACEHOLDER, ResponseText};
pub use retry::RetryPolicy;
pub use types::{GenerateContentRequest, GenerateContentResponse};
