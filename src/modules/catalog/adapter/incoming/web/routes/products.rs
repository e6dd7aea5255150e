use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::catalog::application::domain::entities::{Product, ProductDetail, ProductDraft};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductInput, GetProductError, GetProductSummaryError,
    ProductSummary, ScrapeProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Arc Desk Lamp")]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Minor units of `currency`
    pub price_cents: Option<i64>,
    /// ISO 4217 code, USD when omitted
    pub currency: Option<String>,
    #[schema(example = "https://shop.example.com/lamp")]
    pub source_url: String,
    pub brand_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
}

impl From<CreateProductRequest> for CreateProductInput {
    fn from(req: CreateProductRequest) -> Self {
        CreateProductInput {
            name: req.name,
            description: req.description,
            image_urls: req.image_urls,
            price_cents: req.price_cents,
            currency: req.currency,
            source_url: req.source_url,
            brand_id: req.brand_id,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScrapeProductRequest {
    #[schema(example = "https://shop.example.com/lamp")]
    pub url: String,
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = inline(SuccessResponse<Product>)),
        (status = 400, description = "Invalid input or reference", body = ErrorResponse),
        (status = 403, description = "Caller is neither creator nor brand", body = ErrorResponse),
    )
)]
#[post("/api/products")]
pub async fn create_product_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(denied) = user.require_role(&[UserRole::Creator, UserRole::Brand]) {
        return denied;
    }

    match data
        .catalog
        .create_product
        .execute(user.user_id, req.into_inner().into())
        .await
    {
        Ok(product) => {
            info!(product_id = %product.id, created_by = %user.user_id, "Product created");
            ApiResponse::created(product)
        }
        Err(CreateProductError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateProductError::InvalidReference(field)) => {
            warn!(created_by = %user.user_id, field = %field, "Product references a missing row");
            ApiResponse::bad_request("INVALID_REFERENCE", &format!("Unknown {}", field))
        }
        Err(CreateProductError::RepositoryError(e)) => {
            error!(created_by = %user.user_id, error = %e, "Failed to create product");
            ApiResponse::internal_error()
        }
    }
}

/// Product with brand and category names
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = "catalog",
    params(("product_id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = inline(SuccessResponse<ProductDetail>)),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[get("/api/products/{product_id}")]
pub async fn get_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.catalog.get_product.execute(product_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetProductError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(GetProductError::RepositoryError(e)) => {
            error!(product_id = %product_id, error = %e, "Failed to load product");
            ApiResponse::internal_error()
        }
    }
}

/// Pre-fill product fields from a shop page. Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/products/scrape",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = ScrapeProductRequest,
    responses(
        (status = 200, description = "Product draft", body = inline(SuccessResponse<ProductDraft>)),
        (status = 400, description = "Not an http(s) URL", body = ErrorResponse),
        (status = 502, description = "Page could not be fetched", body = ErrorResponse),
    )
)]
#[post("/api/products/scrape")]
pub async fn scrape_product_handler(
    user: AuthenticatedUser,
    req: web::Json<ScrapeProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let url = req.into_inner().url;

    match data.catalog.scrape_product.execute(&url).await {
        Ok(draft) => ApiResponse::success(draft),
        Err(ScrapeProductError::InvalidUrl) => {
            ApiResponse::bad_request("INVALID_URL", "URL must be http or https")
        }
        Err(ScrapeProductError::FetchFailed(e)) => {
            warn!(user_id = %user.user_id, url = %url, error = %e, "Scrape failed");
            ApiResponse::bad_gateway("SCRAPE_FAILED", "Could not fetch the product page")
        }
    }
}

/// AI shopper summary, generated once and cached on the product
#[utoipa::path(
    get,
    path = "/api/products/{product_id}/summary",
    tag = "catalog",
    params(("product_id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Summary", body = inline(SuccessResponse<ProductSummary>)),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 429, description = "Daily AI budget spent", body = ErrorResponse),
        (status = 502, description = "AI provider failed", body = ErrorResponse),
    )
)]
#[get("/api/products/{product_id}/summary")]
pub async fn get_product_summary_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.catalog.product_summary.execute(product_id).await {
        Ok(summary) => ApiResponse::success(summary),
        Err(GetProductSummaryError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(GetProductSummaryError::BudgetExhausted) => ApiResponse::too_many_requests(
            "AI_BUDGET_EXHAUSTED",
            "Daily AI summary budget exhausted, try again tomorrow",
        ),
        Err(GetProductSummaryError::ProviderFailed(e)) => {
            warn!(product_id = %product_id, error = %e, "AI provider failed");
            ApiResponse::bad_gateway("AI_PROVIDER_FAILED", "Summary could not be generated")
        }
        Err(GetProductSummaryError::RepositoryError(e)) => {
            error!(product_id = %product_id, error = %e, "Failed to load product for summary");
            ApiResponse::internal_error()
        }
    }
}
