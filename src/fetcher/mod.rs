pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{ArticleFetcher, BROWSER_USER_AGENT, FETCH_TIMEOUT};
pub use errors::FetchError;
pub use types::PageResponse;
