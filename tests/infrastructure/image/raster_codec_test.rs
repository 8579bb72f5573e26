use std::io::Cursor;

use image::ImageFormat;

use nerva::application::ports::{ImageCodec, ImageDecodeError};
use nerva::infrastructure::image::RasterCodec;

fn encode(format: ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::new_rgb8(10, 10);
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn given_valid_png_when_decoding_then_returns_image_with_dimensions() {
    let decoded = RasterCodec.decode(&encode(ImageFormat::Png)).unwrap();

    assert_eq!(decoded.width(), 10);
    assert_eq!(decoded.height(), 10);
    assert_eq!(decoded.source_format(), ImageFormat::Png);
}

#[test]
fn given_valid_jpeg_when_decoding_then_returns_image_with_dimensions() {
    let decoded = RasterCodec.decode(&encode(ImageFormat::Jpeg)).unwrap();

    assert_eq!(decoded.width(), 10);
    assert_eq!(decoded.height(), 10);
    assert_eq!(decoded.source_format(), ImageFormat::Jpeg);
}

#[test]
fn given_arbitrary_bytes_when_decoding_then_returns_unsupported_format() {
    let result = RasterCodec.decode(b"definitely not an image");

    assert!(matches!(result, Err(ImageDecodeError::UnsupportedFormat(_))));
}

#[test]
fn given_png_magic_with_garbage_when_decoding_then_returns_decode_failed() {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&[0u8; 32]);

    let result = RasterCodec.decode(&bytes);

    assert!(matches!(result, Err(ImageDecodeError::DecodeFailed(_))));
}

#[test]
fn given_decoded_image_when_reencoding_then_png_bytes_round_trip() {
    let decoded = RasterCodec.decode(&encode(ImageFormat::Jpeg)).unwrap();

    let png = decoded.to_png_bytes().unwrap();
    let redecoded = RasterCodec.decode(&png).unwrap();

    assert_eq!(redecoded.source_format(), ImageFormat::Png);
    assert_eq!(redecoded.width(), 10);
}
