use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{GenerativeModel, ModelError};
use crate::domain::DecodedImage;

/// Client for the Gemini generateContent API. Text and vision requests
/// go to two separately configured models.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    text_model: String,
    vision_model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        text_model: Option<String>,
        vision_model: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
            text_model: text_model.unwrap_or_else(|| "gemma-3n-e4b-it".to_string()),
            vision_model: vision_model.unwrap_or_else(|| "gemini-2.0-flash-exp".to_string()),
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<serde_json::Value>,
    ) -> Result<String, ModelError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        tracing::debug!(model = %model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModelError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(format!("parse response: {}", e)))?;

        let candidate = result
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::InvalidResponse("no candidates".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err(ModelError::InvalidResponse(
                "candidate has no text parts".to_string(),
            ));
        }

        tracing::info!(model = %model, chars = text.len(), "Generation completed");

        Ok(text)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ModelError> {
        let parts = vec![json!({ "text": prompt })];
        self.generate_content(&self.text_model, parts).await
    }

    async fn generate_vision(
        &self,
        prompt: &str,
        image: &DecodedImage,
    ) -> Result<String, ModelError> {
        // Pixels are re-encoded to PNG regardless of the upload format
        // so the wire payload is deterministic.
        let png = image
            .to_png_bytes()
            .map_err(|e| ModelError::ApiRequestFailed(format!("encode image: {}", e)))?;

        let parts = vec![
            json!({ "text": prompt }),
            json!({
                "inlineData": {
                    "mimeType": "image/png",
                    "data": BASE64.encode(png),
                }
            }),
        ];
        self.generate_content(&self.vision_model, parts).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
