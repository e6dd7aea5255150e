use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::modules::catalog::application::domain::entities::ProductDetail;
use crate::modules::catalog::application::ports::outgoing::{SummaryError, SummaryGenerator};

const SYSTEM_PROMPT: &str = "You write short, honest product summaries for shoppers. \
Use two or three sentences. Do not invent specifications that are not given.";

const MAX_TOKENS: u32 = 160;

/// Chat-completions client for any OpenAI-compatible endpoint.
#[derive(Clone, Debug)]
pub struct OpenAiSummaryGenerator {
    client: Client,
    config: AiConfig,
}

impl OpenAiSummaryGenerator {
    pub fn new(client: Client, config: AiConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl SummaryGenerator for OpenAiSummaryGenerator {
    async fn generate_summary(&self, product: &ProductDetail) -> Result<String, SummaryError> {
        let payload = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(product),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: 0.4,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SummaryError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::RequestFailed(format!(
                "provider answered with status {}",
                status.as_u16()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::BadResponse(e.to_string()))?;

        extract_summary(body)
    }
}

fn build_prompt(detail: &ProductDetail) -> String {
    let product = &detail.product;
    let mut lines = vec![format!("Product: {}", product.name)];

    if let Some(brand) = &detail.brand_name {
        lines.push(format!("Brand: {}", brand));
    }
    if let Some(category) = &detail.category_name {
        lines.push(format!("Category: {}", category));
    }
    if let Some(cents) = product.price_cents {
        lines.push(format!(
            "Price: {}.{:02} {}",
            cents / 100,
            cents % 100,
            product.currency
        ));
    }
    if let Some(description) = &product.description {
        lines.push(format!("Description: {}", description));
    }

    lines.push("Write the summary.".to_string());
    lines.join("\n")
}

fn extract_summary(body: ChatResponse) -> Result<String, SummaryError> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| SummaryError::BadResponse("no completion returned".to_string()))
}
