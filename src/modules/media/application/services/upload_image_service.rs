use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::media::application::domain::image::{ImageKind, MAX_IMAGE_BYTES};
use crate::modules::media::application::ports::incoming::use_cases::{
    UploadImageError, UploadImageUseCase, UploadedImage,
};
use crate::modules::media::application::ports::outgoing::{ImageHost, ImageUpload};

pub struct UploadImageService {
    host: Arc<dyn ImageHost>,
}

impl UploadImageService {
    pub fn new(host: Arc<dyn ImageHost>) -> Self {
        Self { host }
    }
}

#[async_trait]
impl UploadImageUseCase for UploadImageService {
    async fn execute(
        &self,
        uploader: UserId,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, UploadImageError> {
        let kind = ImageKind::from_content_type(content_type)
            .ok_or(UploadImageError::UnsupportedMediaType)?;

        if bytes.is_empty() {
            return Err(UploadImageError::Empty);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(UploadImageError::TooLarge {
                limit: MAX_IMAGE_BYTES,
            });
        }

        let size = bytes.len();
        let upload = ImageUpload {
            file_name: format!("{}.{}", Uuid::new_v4(), kind.extension()),
            content_type: kind.mime(),
            bytes,
        };

        let url = self.host.upload(upload).await.map_err(|e| {
            warn!(user_id = %uploader, error = %e, "Image upload failed");
            UploadImageError::UploadFailed(e.to_string())
        })?;

        info!(user_id = %uploader, bytes = size, "Image uploaded");
        Ok(UploadedImage { url })
    }
}
