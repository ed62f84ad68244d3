//! Remote summary resolution: title lookup with search fallback.
//!
//! `SummaryResolver::resolve` never fails. Network errors and unexpected
//! statuses degrade to `SummaryResolution::unavailable`.

pub mod types;
pub mod wikipedia;

pub use types::SummaryResolution;
pub use wikipedia::WikipediaClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Summary service is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Summary service returned error (status {status}) for {url}")]
    Status { status: u16, url: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

/// Source of free-text summaries for a query.
#[async_trait]
pub trait SummaryResolver: Send + Sync {
    async fn resolve(&self, query: &str) -> SummaryResolution;
}
