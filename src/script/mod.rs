pub mod dtos;
pub mod handlers;
pub mod params;
pub mod pipeline;

pub use dtos::{ErrorResponse, GENERIC_FAILURE, GenerateScriptRequest, ScriptMeta, ScriptResult};
pub use params::ScriptParams;
pub use pipeline::ScriptPipeline;
