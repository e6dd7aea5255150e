use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::BrandDetail;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    GetBrandError, GetBrandUseCase,
};
use crate::modules::catalog::application::ports::outgoing::BrandRepository;

pub struct GetBrandService<R>
where
    R: BrandRepository,
{
    repository: R,
}

impl<R> GetBrandService<R>
where
    R: BrandRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetBrandUseCase for GetBrandService<R>
where
    R: BrandRepository + Send + Sync,
{
    async fn execute(&self, brand_id: Uuid) -> Result<BrandDetail, GetBrandError> {
        self.repository
            .find_brand(brand_id)
            .await
            .map_err(|e| GetBrandError::RepositoryError(e.to_string()))?
            .ok_or(GetBrandError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::ports::outgoing::BrandRepositoryError;
    use crate::modules::catalog::application::services::test_doubles::{
        sample_brand, MockBrandRepository,
    };

    #[tokio::test]
    async fn test_returns_brand_with_product_count() {
        let brand = sample_brand(None);
        let service = GetBrandService::new(MockBrandRepository {
            brand: Some(BrandDetail {
                brand: brand.clone(),
                product_count: 4,
            }),
            ..Default::default()
        });

        let detail = service.execute(brand.id).await.unwrap();

        assert_eq!(detail.brand.id, brand.id);
        assert_eq!(detail.product_count, 4);
    }

    #[tokio::test]
    async fn test_missing_brand_is_not_found() {
        let service = GetBrandService::new(MockBrandRepository::default());

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetBrandError::NotFound)));
    }

    #[tokio::test]
    async fn test_database_error_is_repository_error() {
        let service = GetBrandService::new(MockBrandRepository {
            error: Some(BrandRepositoryError::DatabaseError("timeout".to_string())),
            ..Default::default()
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetBrandError::RepositoryError(_))));
    }
}
