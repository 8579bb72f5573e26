use crate::domain::DecodedImage;

pub trait ImageCodec: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage, ImageDecodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageDecodeError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("image decode failed: {0}")]
    DecodeFailed(String),
}
