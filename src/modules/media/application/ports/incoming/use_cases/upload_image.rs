use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedImage {
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadImageError {
    #[error("Only PNG, JPEG, WebP and GIF images are accepted")]
    UnsupportedMediaType,

    #[error("Image exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("Image body is empty")]
    Empty,

    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(
        &self,
        uploader: UserId,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, UploadImageError>;
}
