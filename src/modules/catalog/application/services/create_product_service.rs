use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::catalog::application::domain::entities::{Product, DEFAULT_CURRENCY};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductInput, CreateProductUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError,
};
use crate::shared::text::{optional_text, required_text};
use crate::shared::url::is_http_url;

const MAX_NAME: usize = 200;
const MAX_DESCRIPTION: usize = 5000;
const MAX_IMAGES: usize = 20;

pub struct CreateProductService<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> CreateProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate(created_by: UserId, input: CreateProductInput) -> Result<CreateProductData, String> {
    let name = required_text("name", &input.name, MAX_NAME)?;
    let description = optional_text("description", input.description, MAX_DESCRIPTION)?;

    let source_url = input.source_url.trim().to_string();
    if !is_http_url(&source_url) {
        return Err("source_url must be an http(s) URL".to_string());
    }

    if input.image_urls.len() > MAX_IMAGES {
        return Err(format!("At most {MAX_IMAGES} image_urls are allowed"));
    }
    let mut image_urls = Vec::with_capacity(input.image_urls.len());
    for raw in input.image_urls {
        let url = raw.trim().to_string();
        if !is_http_url(&url) {
            return Err(format!("Invalid image URL: {url}"));
        }
        if !image_urls.contains(&url) {
            image_urls.push(url);
        }
    }

    if matches!(input.price_cents, Some(p) if p < 0) {
        return Err("price_cents must not be negative".to_string());
    }

    let currency = match input.currency.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_CURRENCY.to_string(),
        Some(c) if c.len() == 3 && c.chars().all(|ch| ch.is_ascii_alphabetic()) => {
            c.to_ascii_uppercase()
        }
        Some(_) => return Err("currency must be a 3-letter ISO code".to_string()),
    };

    Ok(CreateProductData {
        name,
        description,
        image_urls,
        price_cents: input.price_cents,
        currency,
        source_url,
        brand_id: input.brand_id,
        category_id: input.category_id,
        created_by: created_by.value(),
    })
}

#[async_trait]
impl<R> CreateProductUseCase for CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        created_by: UserId,
        input: CreateProductInput,
    ) -> Result<Product, CreateProductError> {
        let data = validate(created_by, input).map_err(CreateProductError::InvalidInput)?;

        self.repository
            .create_product(data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::InvalidReference(msg) => {
                    CreateProductError::InvalidReference(msg)
                }
                ProductRepositoryError::DatabaseError(msg)
                | ProductRepositoryError::SerializationError(msg) => {
                    CreateProductError::RepositoryError(msg)
                }
                ProductRepositoryError::NotFound => CreateProductError::RepositoryError(
                    "unexpected not found while creating product".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::catalog::application::services::test_doubles::MockProductRepository;

    fn input() -> CreateProductInput {
        CreateProductInput {
            name: " Arc Desk Lamp ".to_string(),
            source_url: "https://shop.example.com/lamp".to_string(),
            image_urls: vec![
                "https://cdn.example.com/a.jpg".to_string(),
                "https://cdn.example.com/a.jpg".to_string(),
            ],
            price_cents: Some(12_950),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_defaults_currency_and_dedupes_images() {
        let repo = MockProductRepository::default();
        let service = CreateProductService::new(repo);

        let product = service
            .execute(UserId::from(Uuid::new_v4()), input())
            .await
            .unwrap();

        assert_eq!(product.name, "Arc Desk Lamp");
        assert_eq!(product.currency, "USD");

        let created = service.repository.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.image_urls.len(), 1);
        assert_eq!(created.currency, "USD");
    }

    #[tokio::test]
    async fn test_currency_is_upper_cased() {
        let service = CreateProductService::new(MockProductRepository::default());
        let mut req = input();
        req.currency = Some("eur".to_string());

        let product = service
            .execute(UserId::from(Uuid::new_v4()), req)
            .await
            .unwrap();

        assert_eq!(product.currency, "EUR");
    }

    #[tokio::test]
    async fn test_rejects_non_http_source_url() {
        let service = CreateProductService::new(MockProductRepository::default());
        let mut req = input();
        req.source_url = "ftp://shop.example.com/lamp".to_string();

        let result = service.execute(UserId::from(Uuid::new_v4()), req).await;

        assert!(matches!(result, Err(CreateProductError::InvalidInput(msg)) if msg.contains("source_url")));
    }

    #[tokio::test]
    async fn test_rejects_negative_price() {
        let service = CreateProductService::new(MockProductRepository::default());
        let mut req = input();
        req.price_cents = Some(-1);

        let result = service.execute(UserId::from(Uuid::new_v4()), req).await;

        assert!(matches!(result, Err(CreateProductError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unknown_brand_maps_to_invalid_reference() {
        let service = CreateProductService::new(MockProductRepository {
            error: Some(ProductRepositoryError::InvalidReference(
                "brand_id does not exist".to_string(),
            )),
            ..Default::default()
        });

        let result = service.execute(UserId::from(Uuid::new_v4()), input()).await;

        assert!(matches!(result, Err(CreateProductError::InvalidReference(_))));
    }
}
