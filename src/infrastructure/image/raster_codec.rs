use crate::application::ports::{ImageCodec, ImageDecodeError};
use crate::domain::DecodedImage;

/// Decodes uploaded bytes with the formats compiled into the `image`
/// crate (PNG and JPEG here). No resizing, no color-space
/// normalization, no EXIF handling; decoded pixels pass through as-is.
pub struct RasterCodec;

impl ImageCodec for RasterCodec {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage, ImageDecodeError> {
        let format = image::guess_format(data)
            .map_err(|e| ImageDecodeError::UnsupportedFormat(e.to_string()))?;

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| ImageDecodeError::DecodeFailed(e.to_string()))?;

        tracing::debug!(
            format = ?format,
            width = decoded.width(),
            height = decoded.height(),
            "Image decoded"
        );

        Ok(DecodedImage::new(decoded, format))
    }
}
