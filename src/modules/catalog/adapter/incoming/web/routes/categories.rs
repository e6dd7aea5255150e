use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserRole;
use crate::modules::catalog::application::domain::entities::{Category, CategoryNode};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCategoryError, CreateCategoryInput, ListCategoriesError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Lighting")]
    pub name: String,
    pub parent_id: Option<Uuid>,
}

/// Whole category tree, siblings ordered by name
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "Category tree", body = inline(SuccessResponse<Vec<CategoryNode>>)),
    )
)]
#[get("/api/categories")]
pub async fn list_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_categories.execute().await {
        Ok(tree) => ApiResponse::success(tree),
        Err(ListCategoriesError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list categories");
            ApiResponse::internal_error()
        }
    }
}

/// Create a category (admin)
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = inline(SuccessResponse<Category>)),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Parent not found", body = ErrorResponse),
        (status = 409, description = "Sibling with the same name exists", body = ErrorResponse),
    )
)]
#[post("/api/categories")]
pub async fn create_category_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(denied) = user.require_role(&[UserRole::Admin]) {
        return denied;
    }

    let req = req.into_inner();
    let input = CreateCategoryInput {
        name: req.name,
        parent_id: req.parent_id,
    };

    match data.catalog.create_category.execute(input).await {
        Ok(category) => {
            info!(category_id = %category.id, "Category created");
            ApiResponse::created(category)
        }
        Err(CreateCategoryError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(CreateCategoryError::ParentNotFound) => {
            ApiResponse::not_found("PARENT_NOT_FOUND", "Parent category not found")
        }
        Err(CreateCategoryError::NameTaken) => ApiResponse::conflict(
            "CATEGORY_NAME_TAKEN",
            "A category with this name already exists here",
        ),
        Err(CreateCategoryError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create category");
            ApiResponse::internal_error()
        }
    }
}
