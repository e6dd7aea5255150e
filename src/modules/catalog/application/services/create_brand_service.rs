use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::domain::entities::Brand;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateBrandError, CreateBrandInput, CreateBrandUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    BrandRepository, BrandRepositoryError, CreateBrandData,
};
use crate::shared::text::{optional_http_url, required_text};

const MAX_BRAND_NAME: usize = 120;

pub struct CreateBrandService<R>
where
    R: BrandRepository,
{
    repository: R,
}

impl<R> CreateBrandService<R>
where
    R: BrandRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateBrandUseCase for CreateBrandService<R>
where
    R: BrandRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: CreateBrandInput,
    ) -> Result<Brand, CreateBrandError> {
        let data = CreateBrandData {
            owner_id: owner.value(),
            name: required_text("name", &input.name, MAX_BRAND_NAME)
                .map_err(CreateBrandError::InvalidInput)?,
            website_url: optional_http_url("website_url", input.website_url)
                .map_err(CreateBrandError::InvalidInput)?,
            logo_url: optional_http_url("logo_url", input.logo_url)
                .map_err(CreateBrandError::InvalidInput)?,
        };

        self.repository
            .create_brand(data)
            .await
            .map_err(|e| match e {
                BrandRepositoryError::NameTaken => CreateBrandError::NameTaken,
                BrandRepositoryError::DatabaseError(msg) => CreateBrandError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::catalog::application::services::test_doubles::MockBrandRepository;

    fn input(name: &str) -> CreateBrandInput {
        CreateBrandInput {
            name: name.to_string(),
            website_url: Some(" https://lumen.example.com ".to_string()),
            logo_url: None,
        }
    }

    #[tokio::test]
    async fn test_creates_brand_owned_by_caller() {
        let owner = Uuid::new_v4();
        let service = CreateBrandService::new(MockBrandRepository::default());

        let brand = service
            .execute(UserId::from(owner), input("  Lumen "))
            .await
            .unwrap();

        assert_eq!(brand.owner_id, Some(owner));
        assert_eq!(brand.name, "Lumen");
        assert_eq!(
            brand.website_url.as_deref(),
            Some("https://lumen.example.com")
        );
    }

    #[tokio::test]
    async fn test_blank_name_is_invalid() {
        let service = CreateBrandService::new(MockBrandRepository::default());

        let result = service
            .execute(UserId::from(Uuid::new_v4()), input("   "))
            .await;

        assert!(matches!(result, Err(CreateBrandError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_non_http_logo_is_invalid() {
        let service = CreateBrandService::new(MockBrandRepository::default());
        let mut bad = input("Lumen");
        bad.logo_url = Some("data:image/png;base64,AAAA".to_string());

        let result = service.execute(UserId::from(Uuid::new_v4()), bad).await;

        assert!(matches!(result, Err(CreateBrandError::InvalidInput(msg)) if msg.contains("logo_url")));
    }

    #[tokio::test]
    async fn test_duplicate_name_maps_to_name_taken() {
        let service = CreateBrandService::new(MockBrandRepository {
            error: Some(BrandRepositoryError::NameTaken),
            ..Default::default()
        });

        let result = service
            .execute(UserId::from(Uuid::new_v4()), input("Lumen"))
            .await;

        assert!(matches!(result, Err(CreateBrandError::NameTaken)));
    }
}
