use async_trait::async_trait;

use crate::domain::DecodedImage;

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ModelError>;

    async fn generate_vision(
        &self,
        prompt: &str,
        image: &DecodedImage,
    ) -> Result<String, ModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
