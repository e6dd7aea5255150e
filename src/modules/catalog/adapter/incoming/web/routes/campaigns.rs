use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::catalog::application::domain::entities::{Campaign, CampaignDetail};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCampaignError, CreateCampaignInput, GetCampaignError, LinkCampaignProductError,
    LinkOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCampaignRequest {
    pub brand_id: Uuid,
    #[schema(example = "Spring desk refresh")]
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    /// Open-ended when omitted
    pub ends_at: Option<DateTime<Utc>>,
}

impl From<CreateCampaignRequest> for CreateCampaignInput {
    fn from(req: CreateCampaignRequest) -> Self {
        CreateCampaignInput {
            brand_id: req.brand_id,
            name: req.name,
            description: req.description,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LinkProductRequest {
    pub product_id: Uuid,
}

fn not_owner() -> actix_web::HttpResponse {
    ApiResponse::forbidden("NOT_OWNER", "Only the brand owner can manage its campaigns")
}

/// Create a campaign for a brand the caller owns
#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreateCampaignRequest,
    responses(
        (status = 201, description = "Campaign created", body = inline(SuccessResponse<Campaign>)),
        (status = 400, description = "Invalid input or schedule", body = ErrorResponse),
        (status = 403, description = "Not the brand owner", body = ErrorResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
    )
)]
#[post("/api/campaigns")]
pub async fn create_campaign_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCampaignRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(denied) = user.require_role(&[UserRole::Brand]) {
        return denied;
    }

    match data
        .catalog
        .create_campaign
        .execute(user.actor(), req.into_inner().into())
        .await
    {
        Ok(campaign) => {
            info!(campaign_id = %campaign.id, brand_id = %campaign.brand_id, "Campaign created");
            ApiResponse::created(campaign)
        }
        Err(CreateCampaignError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(e @ CreateCampaignError::InvalidSchedule) => {
            ApiResponse::bad_request("INVALID_SCHEDULE", &e.to_string())
        }
        Err(CreateCampaignError::BrandNotFound) => {
            ApiResponse::not_found("BRAND_NOT_FOUND", "Brand not found")
        }
        Err(CreateCampaignError::NotOwner) => {
            warn!(user_id = %user.user_id, "Campaign creation for a foreign brand");
            not_owner()
        }
        Err(CreateCampaignError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create campaign");
            ApiResponse::internal_error()
        }
    }
}

/// Campaign with its products
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}",
    tag = "catalog",
    params(("campaign_id" = Uuid, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign", body = inline(SuccessResponse<CampaignDetail>)),
        (status = 404, description = "Campaign not found", body = ErrorResponse),
    )
)]
#[get("/api/campaigns/{campaign_id}")]
pub async fn get_campaign_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let campaign_id = path.into_inner();

    match data.catalog.get_campaign.execute(campaign_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetCampaignError::NotFound) => {
            ApiResponse::not_found("CAMPAIGN_NOT_FOUND", "Campaign not found")
        }
        Err(GetCampaignError::RepositoryError(e)) => {
            error!(campaign_id = %campaign_id, error = %e, "Failed to load campaign");
            ApiResponse::internal_error()
        }
    }
}

/// Link a product of the campaign's brand. 201 when added, 200 when already linked.
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaign_id}/products",
    tag = "catalog",
    security(("bearer_auth" = [])),
    params(("campaign_id" = Uuid, Path, description = "Campaign id")),
    request_body = LinkProductRequest,
    responses(
        (status = 201, description = "Product linked", body = inline(SuccessResponse<LinkOutcome>)),
        (status = 200, description = "Already linked", body = inline(SuccessResponse<LinkOutcome>)),
        (status = 400, description = "Product of another brand", body = ErrorResponse),
        (status = 403, description = "Not the brand owner", body = ErrorResponse),
        (status = 404, description = "Campaign or product not found", body = ErrorResponse),
    )
)]
#[post("/api/campaigns/{campaign_id}/products")]
pub async fn link_campaign_product_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<LinkProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let campaign_id = path.into_inner();
    let product_id = req.into_inner().product_id;

    match data
        .catalog
        .link_campaign_product
        .execute(user.actor(), campaign_id, product_id)
        .await
    {
        Ok(outcome) if outcome.added => {
            info!(campaign_id = %campaign_id, product_id = %product_id, "Product linked to campaign");
            ApiResponse::created(outcome)
        }
        Ok(outcome) => ApiResponse::success(outcome),
        Err(LinkCampaignProductError::CampaignNotFound) => {
            ApiResponse::not_found("CAMPAIGN_NOT_FOUND", "Campaign not found")
        }
        Err(LinkCampaignProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(LinkCampaignProductError::NotOwner) => not_owner(),
        Err(e @ LinkCampaignProductError::BrandMismatch) => {
            ApiResponse::bad_request("PRODUCT_BRAND_MISMATCH", &e.to_string())
        }
        Err(LinkCampaignProductError::RepositoryError(e)) => {
            error!(campaign_id = %campaign_id, error = %e, "Failed to link campaign product");
            ApiResponse::internal_error()
        }
    }
}
