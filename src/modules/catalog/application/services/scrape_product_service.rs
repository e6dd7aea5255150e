use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;

use crate::modules::catalog::application::domain::entities::ProductDraft;
use crate::modules::catalog::application::domain::page_metadata::extract_product_draft;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    ScrapeProductError, ScrapeProductUseCase,
};
use crate::modules::catalog::application::ports::outgoing::ProductPageFetcher;
use crate::shared::url::is_http_url;

pub struct ScrapeProductService {
    fetcher: Arc<dyn ProductPageFetcher>,
}

impl ScrapeProductService {
    pub fn new(fetcher: Arc<dyn ProductPageFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ScrapeProductUseCase for ScrapeProductService {
    async fn execute(&self, url: &str) -> Result<ProductDraft, ScrapeProductError> {
        let url = url.trim();
        if !is_http_url(url) {
            return Err(ScrapeProductError::InvalidUrl);
        }
        let page_url = Url::parse(url).map_err(|_| ScrapeProductError::InvalidUrl)?;

        let html = self
            .fetcher
            .fetch_html(page_url.as_str())
            .await
            .map_err(|e| ScrapeProductError::FetchFailed(e.to_string()))?;

        Ok(extract_product_draft(&html, &page_url))
    }
}
