use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

/// An in-memory pixel buffer produced by the image decode adapter.
/// Owned by the single request that decoded it; never cached.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
    format: ImageFormat,
}

impl DecodedImage {
    pub fn new(image: DynamicImage, format: ImageFormat) -> Self {
        Self { image, format }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The format the source bytes were detected as, not necessarily
    /// the format sent over the wire.
    pub fn source_format(&self) -> ImageFormat {
        self.format
    }

    /// Re-encode the decoded pixels as PNG for inline transport.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}
