use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageFetchError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream answered with status {0}")]
    BadStatus(u16),

    #[error("Page exceeds {0} bytes")]
    TooLarge(usize),
}

/// Downloads a product page for metadata extraction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductPageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String, PageFetchError>;
}
