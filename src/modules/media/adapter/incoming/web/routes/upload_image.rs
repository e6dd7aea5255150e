use actix_web::{http::header, post, web, HttpRequest, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::media::application::domain::image::{ImageKind, MAX_IMAGE_BYTES};
use crate::modules::media::application::ports::incoming::use_cases::UploadImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadedImageResponse {
    #[schema(example = "https://i.ibb.co/x1/lamp.png")]
    pub url: String,
}

fn unsupported() -> actix_web::HttpResponse {
    ApiResponse::unsupported_media_type(
        "UNSUPPORTED_MEDIA_TYPE",
        &format!("Content-Type must be one of {}", ImageKind::ACCEPTED.join(", ")),
    )
}

fn too_large() -> actix_web::HttpResponse {
    ApiResponse::payload_too_large(
        "PAYLOAD_TOO_LARGE",
        &format!("Images are limited to {} bytes", MAX_IMAGE_BYTES),
    )
}

/// Upload raw image bytes to the image host
#[utoipa::path(
    post,
    path = "/api/uploads/images",
    tag = "media",
    security(("bearer_auth" = [])),
    request_body(content = Vec<u8>, content_type = "image/png", description = "Raw image bytes"),
    responses(
        (status = 201, description = "Image stored", body = inline(SuccessResponse<UploadedImageResponse>)),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 415, description = "Unsupported image type", body = ErrorResponse),
        (status = 502, description = "Image host failed", body = ErrorResponse),
    )
)]
#[post("/api/uploads/images")]
pub async fn upload_image_handler(
    user: AuthenticatedUser,
    req: HttpRequest,
    mut payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if ImageKind::from_content_type(&content_type).is_none() {
        return unsupported();
    }

    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                return ApiResponse::bad_request("INVALID_BODY", &e.to_string());
            }
        };
        if body.len() + chunk.len() > MAX_IMAGE_BYTES {
            return too_large();
        }
        body.extend_from_slice(&chunk);
    }

    match data
        .media
        .upload_image
        .execute(user.user_id, &content_type, body)
        .await
    {
        Ok(image) => ApiResponse::created(UploadedImageResponse { url: image.url }),
        Err(UploadImageError::UnsupportedMediaType) => unsupported(),
        Err(UploadImageError::TooLarge { .. }) => too_large(),
        Err(e @ UploadImageError::Empty) => ApiResponse::bad_request("EMPTY_BODY", &e.to_string()),
        Err(UploadImageError::UploadFailed(e)) => {
            error!(user_id = %user.user_id, error = %e, "Image host rejected upload");
            ApiResponse::bad_gateway("UPLOAD_FAILED", "The image host did not accept the upload")
        }
    }
}
