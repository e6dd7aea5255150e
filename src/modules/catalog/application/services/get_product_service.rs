use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::ProductDetail;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetProductError, GetProductUseCase,
};
use crate::modules::catalog::application::ports::outgoing::ProductRepository;

pub struct GetProductService<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> GetProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProductUseCase for GetProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<ProductDetail, GetProductError> {
        self.repository
            .find_product(product_id)
            .await
            .map_err(|e| GetProductError::RepositoryError(e.to_string()))?
            .ok_or(GetProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::services::test_doubles::{
        sample_detail, sample_product, MockProductRepository,
    };

    #[tokio::test]
    async fn test_returns_detail_with_names() {
        let product = sample_product(None);
        let service = GetProductService::new(MockProductRepository {
            product: Some(sample_detail(product.clone())),
            ..Default::default()
        });

        let detail = service.execute(product.id).await.unwrap();

        assert_eq!(detail.product.id, product.id);
        assert_eq!(detail.brand_name.as_deref(), Some("Lumen"));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let service = GetProductService::new(MockProductRepository::default());

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetProductError::NotFound)));
    }
}
