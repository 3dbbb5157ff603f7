//! Rasterization and JPEG encoding.
//!
//! This module provides functionality for:
//! - Flattening RGBA pixels onto an opaque background color
//! - Encoding the flattened pixels as JPEG at a configurable quality
//! - Producing the base64 data URI form of the encoded bytes
//!
//! # Architecture
//!
//! [`rasterize_and_encode`] is the single entry point the pipeline uses. The
//! working RGB surface lives only for the duration of one call.
//!
//! # Examples
//!
//! ```ignore
//! use image::Rgb;
//! use jpegify_core::decode::load_image;
//! use jpegify_core::encode::rasterize_and_encode;
//!
//! let decoded = load_image(&std::fs::read("logo.png").unwrap()).unwrap();
//! let encoded = rasterize_and_encode(&decoded, Rgb([255, 255, 255]), 0.8).unwrap();
//! println!("{} bytes, {}", encoded.bytes.len(), &encoded.data_uri[..30]);
//! ```

mod data_uri;
mod flatten;
mod jpeg;
mod quality;

use image::Rgb;

use crate::decode::DecodedImage;

pub use data_uri::{parse_data_uri, to_data_uri, DataUriError};
pub use flatten::flatten;
pub use jpeg::{encode_jpeg, EncodeError};
pub use quality::{effective_quality, jpeg_quality, DEFAULT_QUALITY};

/// MIME type of the encoded output.
pub const TARGET_MIME: &str = "image/jpeg";

/// The encoded form of one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    /// JPEG bytes.
    pub bytes: Vec<u8>,
    /// `data:image/jpeg;base64,...` rendering of `bytes`.
    pub data_uri: String,
}

/// Flatten `image` onto `background` and encode it as JPEG.
///
/// `quality` is a factor in (0, 1]; values outside that range fall back to
/// [`DEFAULT_QUALITY`] instead of failing.
pub fn rasterize_and_encode(
    image: &DecodedImage,
    background: Rgb<u8>,
    quality: f32,
) -> Result<EncodedImage, EncodeError> {
    let surface = flatten(image, background)?;
    let bytes = encode_jpeg(&surface, jpeg_quality(quality))?;
    let data_uri = to_data_uri(TARGET_MIME, &bytes);

    Ok(EncodedImage {
        width: image.width,
        height: image.height,
        bytes,
        data_uri,
    })
}
