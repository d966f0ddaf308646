//! Fetch Metadata use case.
//!
//! Fetches a webpage and returns its title and description. Every failure
//! is logged and collapses to `None`; callers cannot tell "no metadata" from
//! "fetch failed" through [`execute`](FetchMetadataUseCase::execute).
//! [`try_execute`](FetchMetadataUseCase::try_execute) keeps the error for
//! callers that need it.

use crate::config::DEFAULT_METADATA_REVALIDATE;
use crate::ports::page_fetcher::{FetchError, FetchOptions, PageFetcher};
use miniperplx_domain::PageMetadata;
use miniperplx_domain::util::log_preview;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Clone)]
pub struct FetchMetadataUseCase {
    fetcher: Arc<dyn PageFetcher>,
    options: FetchOptions,
}

impl FetchMetadataUseCase {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            options: FetchOptions {
                revalidate: DEFAULT_METADATA_REVALIDATE,
            },
        }
    }

    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.options.revalidate = revalidate;
        self
    }

    /// Fetch metadata for `url`, returning `None` on any failure.
    pub async fn execute(&self, url: &str) -> Option<PageMetadata> {
        match self.try_execute(url).await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                error!("Error fetching metadata for {}: {}", log_preview(url, 200), e);
                None
            }
        }
    }

    /// Fetch metadata for `url`, keeping the failure reason.
    pub async fn try_execute(&self, url: &str) -> Result<PageMetadata, FetchError> {
        debug!(
            "Fetching metadata for {} (revalidate {}s)",
            log_preview(url, 200),
            self.options.revalidate.as_secs()
        );
        self.fetcher.fetch_metadata(url, &self.options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockFetcher {
        result: fn() -> Result<PageMetadata, FetchError>,
        seen: Mutex<Vec<(String, FetchOptions)>>,
    }

    impl MockFetcher {
        fn new(result: fn() -> Result<PageMetadata, FetchError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch_metadata(
            &self,
            url: &str,
            options: &FetchOptions,
        ) -> Result<PageMetadata, FetchError> {
            self.seen.lock().unwrap().push((url.to_string(), *options));
            (self.result)()
        }
    }

    #[tokio::test]
    async fn test_success_returns_metadata() {
        let fetcher = MockFetcher::new(|| Ok(PageMetadata::new("Example", "Desc")));
        let use_case = FetchMetadataUseCase::new(fetcher.clone());

        let metadata = use_case.execute("https://example.com").await;

        assert_eq!(metadata, Some(PageMetadata::new("Example", "Desc")));
        let seen = fetcher.seen.lock().unwrap();
        assert_eq!(seen[0].0, "https://example.com");
        assert_eq!(seen[0].1.revalidate, Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn test_network_failure_collapses_to_none() {
        let fetcher = MockFetcher::new(|| Err(FetchError::Network("connection refused".into())));
        let use_case = FetchMetadataUseCase::new(fetcher);

        assert_eq!(use_case.execute("http://127.0.0.1:1").await, None);
    }

    #[tokio::test]
    async fn test_parse_failure_collapses_to_none() {
        let fetcher = MockFetcher::new(|| Err(FetchError::Parse("bad selector".into())));
        let use_case = FetchMetadataUseCase::new(fetcher);

        assert_eq!(use_case.execute("https://example.com").await, None);
    }

    #[tokio::test]
    async fn test_try_execute_keeps_error() {
        let fetcher = MockFetcher::new(|| Err(FetchError::InvalidUrl("not a url".into())));
        let use_case = FetchMetadataUseCase::new(fetcher);

        let err = use_case.try_execute("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_custom_revalidate() {
        let fetcher = MockFetcher::new(|| Ok(PageMetadata::default()));
        let use_case =
            FetchMetadataUseCase::new(fetcher.clone()).with_revalidate(Duration::from_secs(60));

        use_case.execute("https://example.com").await;
        assert_eq!(fetcher.seen.lock().unwrap()[0].1.revalidate.as_secs(), 60);
    }
}
