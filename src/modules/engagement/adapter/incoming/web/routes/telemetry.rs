use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::auth::OptionalUser;
use crate::modules::engagement::application::ports::incoming::use_cases::{
    ClickRequest, RecordViewError, TrackClickError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Count a collection view; anonymous views are recorded without a user
#[utoipa::path(
    post,
    path = "/api/collections/{collection_id}/views",
    tag = "engagement",
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 204, description = "View recorded"),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[post("/api/collections/{collection_id}/views")]
pub async fn record_view_handler(
    viewer: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .engagement
        .record_view
        .execute(collection_id, viewer.actor())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(RecordViewError::NotFound) => {
            ApiResponse::not_found("COLLECTION_NOT_FOUND", "Collection not found")
        }
        Err(RecordViewError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to record view");
            ApiResponse::internal_error()
        }
    }
}

fn referrer(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn track_and_redirect(data: web::Data<AppState>, request: ClickRequest) -> HttpResponse {
    let product_id = request.product_id;

    match data.engagement.track_click.execute(request).await {
        Ok(url) => ApiResponse::found(&url),
        Err(TrackClickError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(TrackClickError::RepositoryError(e)) => {
            error!(product_id = %product_id, error = %e, "Failed to resolve click");
            ApiResponse::internal_error()
        }
    }
}

/// Outbound redirect to the merchant page
#[utoipa::path(
    get,
    path = "/r/p/{product_id}",
    tag = "engagement",
    params(("product_id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 302, description = "Redirect to the product source URL"),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[get("/r/p/{product_id}")]
pub async fn product_click_handler(
    req: HttpRequest,
    viewer: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = ClickRequest {
        product_id: path.into_inner(),
        collection_id: None,
        viewer: viewer.user_id(),
        referrer: referrer(&req),
    };
    track_and_redirect(data, request).await
}

/// Outbound redirect attributed to the collection it was clicked from
#[utoipa::path(
    get,
    path = "/r/{collection_id}/{product_id}",
    tag = "engagement",
    params(
        ("collection_id" = Uuid, Path, description = "Collection the click came from"),
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 302, description = "Redirect to the product source URL"),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[get("/r/{collection_id}/{product_id}")]
pub async fn collection_click_handler(
    req: HttpRequest,
    viewer: OptionalUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (collection_id, product_id) = path.into_inner();
    let request = ClickRequest {
        product_id,
        collection_id: Some(collection_id),
        viewer: viewer.user_id(),
        referrer: referrer(&req),
    };
    track_and_redirect(data, request).await
}
