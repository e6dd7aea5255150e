use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::catalog::application::domain::entities::{Brand, BrandDetail};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateBrandError, CreateBrandInput, GetBrandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBrandRequest {
    #[schema(example = "Lumen")]
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
}

/// Create a brand owned by the caller
#[utoipa::path(
    post,
    path = "/api/brands",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = inline(SuccessResponse<Brand>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Caller is not a brand account", body = ErrorResponse),
        (status = 409, description = "Name taken", body = ErrorResponse),
    )
)]
#[post("/api/brands")]
pub async fn create_brand_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBrandRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(denied) = user.require_role(&[UserRole::Brand]) {
        return denied;
    }

    let req = req.into_inner();
    let input = CreateBrandInput {
        name: req.name,
        website_url: req.website_url,
        logo_url: req.logo_url,
    };

    match data.catalog.create_brand.execute(user.user_id, input).await {
        Ok(brand) => {
            info!(brand_id = %brand.id, owner_id = %user.user_id, "Brand created");
            ApiResponse::created(brand)
        }
        Err(CreateBrandError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateBrandError::NameTaken) => {
            warn!(owner_id = %user.user_id, "Brand name already taken");
            ApiResponse::conflict("BRAND_NAME_TAKEN", "Brand name already taken")
        }
        Err(CreateBrandError::RepositoryError(e)) => {
            error!(owner_id = %user.user_id, error = %e, "Failed to create brand");
            ApiResponse::internal_error()
        }
    }
}

/// Brand with its product count
#[utoipa::path(
    get,
    path = "/api/brands/{brand_id}",
    tag = "catalog",
    params(("brand_id" = Uuid, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand", body = inline(SuccessResponse<BrandDetail>)),
        (status = 404, description = "Brand not found", body = ErrorResponse),
    )
)]
#[get("/api/brands/{brand_id}")]
pub async fn get_brand_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match data.catalog.get_brand.execute(brand_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetBrandError::NotFound) => ApiResponse::not_found("BRAND_NOT_FOUND", "Brand not found"),
        Err(GetBrandError::RepositoryError(e)) => {
            error!(brand_id = %brand_id, error = %e, "Failed to load brand");
            ApiResponse::internal_error()
        }
    }
}
