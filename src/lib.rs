pub mod app;
pub mod app_state;
pub mod budget;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod generation;
pub mod health;
pub mod prompt;
pub mod script;
pub mod telemetry;
