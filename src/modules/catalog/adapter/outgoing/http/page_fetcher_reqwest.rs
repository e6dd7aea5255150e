use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::modules::catalog::application::ports::outgoing::{PageFetchError, ProductPageFetcher};

/// Upper bound on how much of a product page is read.
pub const DEFAULT_MAX_PAGE_BYTES: usize = 2 * 1024 * 1024;

const USER_AGENT: &str = "StashBot/1.0 (+https://stash.example.com/bot)";

#[derive(Clone, Debug)]
pub struct ReqwestPageFetcher {
    client: Client,
    max_bytes: usize,
}

impl ReqwestPageFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            max_bytes: DEFAULT_MAX_PAGE_BYTES,
        }
    }
}

#[async_trait]
impl ProductPageFetcher for ReqwestPageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, PageFetchError> {
        let mut response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| PageFetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageFetchError::BadStatus(status.as_u16()));
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes as u64)
        {
            return Err(PageFetchError::TooLarge(self.max_bytes));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| PageFetchError::RequestFailed(e.to_string()))?
        {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(PageFetchError::TooLarge(self.max_bytes));
            }
            body.extend_from_slice(&chunk);
        }

        debug!(url = %url, bytes = body.len(), "Fetched product page");

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
