use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::catalog::application::domain::ai_budget::AiCallBudget;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetProductSummaryError, GetProductSummaryUseCase, ProductSummary,
};
use crate::modules::catalog::application::ports::outgoing::{
    ProductRepository, SummaryGenerator,
};

/// Fetch-or-create: a stored `ai_summary` is returned as is, otherwise one
/// provider call is made (within the daily budget) and the result stored.
pub struct ProductSummaryService<R>
where
    R: ProductRepository,
{
    repository: R,
    generator: Arc<dyn SummaryGenerator>,
    budget: Arc<AiCallBudget>,
}

impl<R> ProductSummaryService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R, generator: Arc<dyn SummaryGenerator>, budget: Arc<AiCallBudget>) -> Self {
        Self {
            repository,
            generator,
            budget,
        }
    }
}

#[async_trait]
impl<R> GetProductSummaryUseCase for ProductSummaryService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<ProductSummary, GetProductSummaryError> {
        let detail = self
            .repository
            .find_product(product_id)
            .await
            .map_err(|e| GetProductSummaryError::RepositoryError(e.to_string()))?
            .ok_or(GetProductSummaryError::NotFound)?;

        if let Some(summary) = detail
            .product
            .ai_summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return Ok(ProductSummary {
                product_id,
                summary: summary.to_string(),
                cached: true,
            });
        }

        if !self.budget.try_acquire() {
            warn!(
                product_id = %product_id,
                daily_limit = self.budget.daily_limit(),
                "AI budget exhausted"
            );
            return Err(GetProductSummaryError::BudgetExhausted);
        }

        let summary = self
            .generator
            .generate_summary(&detail)
            .await
            .map_err(|e| GetProductSummaryError::ProviderFailed(e.to_string()))?
            .trim()
            .to_string();

        if summary.is_empty() {
            return Err(GetProductSummaryError::ProviderFailed(
                "provider returned an empty summary".to_string(),
            ));
        }

        // A failed write only costs a regeneration on the next request.
        if let Err(e) = self.repository.set_ai_summary(product_id, &summary).await {
            warn!(product_id = %product_id, error = %e, "Failed to store AI summary");
        } else {
            info!(product_id = %product_id, "AI summary generated");
        }

        Ok(ProductSummary {
            product_id,
            summary,
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::ports::outgoing::summary_generator::{
        MockSummaryGenerator, SummaryError,
    };
    use crate::modules::catalog::application::ports::outgoing::ProductRepositoryError;
    use crate::modules::catalog::application::services::test_doubles::{
        sample_detail, sample_product, MockProductRepository,
    };

    fn repo_with(ai_summary: Option<&str>) -> MockProductRepository {
        let mut product = sample_product(None);
        product.ai_summary = ai_summary.map(str::to_string);
        MockProductRepository {
            product: Some(sample_detail(product)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_cached_summary_skips_provider_and_budget() {
        let mut generator = MockSummaryGenerator::new();
        generator.expect_generate_summary().times(0);
        let budget = Arc::new(AiCallBudget::new(0));

        let service = ProductSummaryService::new(
            repo_with(Some("Warm brass lamp.")),
            Arc::new(generator),
            budget,
        );
        let summary = service.execute(Uuid::new_v4()).await.unwrap();

        assert!(summary.cached);
        assert_eq!(summary.summary, "Warm brass lamp.");
    }

    #[tokio::test]
    async fn test_generates_and_stores_when_missing() {
        let mut generator = MockSummaryGenerator::new();
        generator
            .expect_generate_summary()
            .times(1)
            .returning(|_| Ok("  A compact lamp for small desks.  ".to_string()));

        let service = ProductSummaryService::new(
            repo_with(None),
            Arc::new(generator),
            Arc::new(AiCallBudget::new(5)),
        );
        let summary = service.execute(Uuid::new_v4()).await.unwrap();

        assert!(!summary.cached);
        assert_eq!(summary.summary, "A compact lamp for small desks.");
        assert_eq!(
            service.repository.stored_summary.lock().unwrap().as_deref(),
            Some("A compact lamp for small desks.")
        );
    }

    #[tokio::test]
    async fn test_exhausted_budget_refuses_without_calling_provider() {
        let mut generator = MockSummaryGenerator::new();
        generator.expect_generate_summary().times(0);

        let service = ProductSummaryService::new(
            repo_with(None),
            Arc::new(generator),
            Arc::new(AiCallBudget::new(0)),
        );
        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetProductSummaryError::BudgetExhausted)));
    }

    #[tokio::test]
    async fn test_provider_failure_is_reported() {
        let mut generator = MockSummaryGenerator::new();
        generator
            .expect_generate_summary()
            .returning(|_| Err(SummaryError::RequestFailed("timeout".to_string())));

        let service = ProductSummaryService::new(
            repo_with(None),
            Arc::new(generator),
            Arc::new(AiCallBudget::new(5)),
        );
        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetProductSummaryError::ProviderFailed(_))));
    }

    #[tokio::test]
    async fn test_store_failure_still_returns_summary() {
        let mut generator = MockSummaryGenerator::new();
        generator
            .expect_generate_summary()
            .returning(|_| Ok("Bright and compact.".to_string()));
        let mut repo = repo_with(None);
        repo.summary_error = Some(ProductRepositoryError::DatabaseError("down".to_string()));

        let service =
            ProductSummaryService::new(repo, Arc::new(generator), Arc::new(AiCallBudget::new(5)));
        let summary = service.execute(Uuid::new_v4()).await.unwrap();

        assert_eq!(summary.summary, "Bright and compact.");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let generator = MockSummaryGenerator::new();
        let service = ProductSummaryService::new(
            MockProductRepository::default(),
            Arc::new(generator),
            Arc::new(AiCallBudget::new(5)),
        );

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetProductSummaryError::NotFound)));
    }
}
