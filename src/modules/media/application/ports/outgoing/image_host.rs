use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageHostError {
    #[error("Image host request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected image host response: {0}")]
    BadResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Third-party host that stores an image and answers with its public URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: ImageUpload) -> Result<String, ImageHostError>;
}
