//! HTTP page fetcher

use super::metadata::extract_metadata;
use crate::config::FileFetchConfig;
use async_trait::async_trait;
use miniperplx_application::{FetchError, FetchOptions, PageFetcher};
use miniperplx_domain::PageMetadata;
use reqwest::header::{CACHE_CONTROL, USER_AGENT};
use reqwest::Url;
use tracing::debug;

/// Fetches pages over HTTP(S) and extracts their metadata.
///
/// The HTTP status is not checked; whatever body comes back is parsed.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpPageFetcher {
    pub fn new(config: &FileFetchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_metadata(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> Result<PageMetadata, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .header(
                CACHE_CONTROL,
                format!("max-age={}", options.revalidate.as_secs()),
            )
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        debug!("Fetched {} (HTTP {})", url, response.status().as_u16());

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response body: {}", e)))?;

        extract_metadata(&body)
    }
}
