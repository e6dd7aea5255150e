use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::ImageHostConfig;
use crate::modules::media::application::ports::outgoing::{ImageHost, ImageHostError, ImageUpload};

/// Uploads to an imgbb-compatible endpoint: the API key travels as the `key`
/// query parameter and the file as the `image` multipart field.
#[derive(Clone, Debug)]
pub struct ReqwestImageHost {
    client: Client,
    config: ImageHostConfig,
}

impl ReqwestImageHost {
    pub fn new(client: Client, config: ImageHostConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Debug, Deserialize)]
struct HostResponse {
    data: Option<HostImage>,
}

#[derive(Debug, Deserialize)]
struct HostImage {
    url: Option<String>,
}

#[async_trait]
impl ImageHost for ReqwestImageHost {
    async fn upload(&self, image: ImageUpload) -> Result<String, ImageHostError> {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name.clone())
            .mime_str(image.content_type)
            .map_err(|e| ImageHostError::RequestFailed(e.to_string()))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(&self.config.upload_url)
            .query(&[("key", self.config.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageHostError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageHostError::RequestFailed(format!(
                "image host answered with status {}",
                status.as_u16()
            )));
        }

        let body: HostResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::BadResponse(e.to_string()))?;

        let url = extract_url(body)?;
        debug!(file_name = %image.file_name, url = %url, "Image stored on host");
        Ok(url)
    }
}

fn extract_url(body: HostResponse) -> Result<String, ImageHostError> {
    body.data
        .and_then(|d| d.url)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ImageHostError::BadResponse("no image url returned".to_string()))
}
