//! Page fetcher port
//!
//! Fetches a webpage and extracts its [`PageMetadata`].

use async_trait::async_trait;
use miniperplx_domain::PageMetadata;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while fetching or parsing a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Per-request fetch options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// How long a cached copy of the page may be reused before re-fetching
    pub revalidate: Duration,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_metadata(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> Result<PageMetadata, FetchError>;
}
