use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::analytics::application::domain::entities::{BrandReport, CreatorReport};
use crate::modules::analytics::application::ports::incoming::use_cases::{
    BrandReportError, CreatorReportError,
};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserRole;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Seven-day report for a brand's products
#[utoipa::path(
    get,
    path = "/api/analytics/brands/{brand_id}",
    tag = "analytics",
    security(("bearer_auth" = [])),
    params(("brand_id" = Uuid, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand report", body = inline(SuccessResponse<BrandReport>)),
        (status = 403, description = "Not the brand owner", body = ErrorResponse),
        (status = 404, description = "Brand not found", body = ErrorResponse),
    )
)]
#[get("/api/analytics/brands/{brand_id}")]
pub async fn brand_report_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match data
        .analytics
        .brand_report
        .execute(user.actor(), brand_id)
        .await
    {
        Ok(report) => ApiResponse::success(report),
        Err(BrandReportError::NotFound) => {
            ApiResponse::not_found("BRAND_NOT_FOUND", "Brand not found")
        }
        Err(e @ BrandReportError::NotOwner) => ApiResponse::forbidden("NOT_OWNER", &e.to_string()),
        Err(BrandReportError::RepositoryError(e)) => {
            error!(brand_id = %brand_id, error = %e, "Failed to build brand report");
            ApiResponse::internal_error()
        }
    }
}

/// Seven-day report for the calling creator's collections
#[utoipa::path(
    get,
    path = "/api/analytics/creators/me",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Creator report", body = inline(SuccessResponse<CreatorReport>)),
        (status = 403, description = "Caller is not a creator", body = ErrorResponse),
    )
)]
#[get("/api/analytics/creators/me")]
pub async fn creator_report_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = user.require_role(&[UserRole::Creator]) {
        return resp;
    }

    match data.analytics.creator_report.execute(user.user_id).await {
        Ok(report) => ApiResponse::success(report),
        Err(CreatorReportError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to build creator report");
            ApiResponse::internal_error()
        }
    }
}
