//! Core types for image loading.

use thiserror::Error;

/// Error types for image loading operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not match any image format the loader understands.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image header was recognized but the data could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image exceeds the decoder's allocation limits.
    #[error("Image too large to decode: {0}")]
    TooLarge(String),

    /// The image decoded to zero pixels.
    #[error("Invalid dimensions: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(_) => DecodeError::InvalidFormat,
            image::ImageError::Limits(e) => DecodeError::TooLarge(e.to_string()),
            other => DecodeError::CorruptedFile(other.to_string()),
        }
    }
}

/// A decoded image with straight (non-premultiplied) RGBA pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// True when at least one pixel is not fully opaque.
    pub fn has_transparency(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] != u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_image_creation() {
        let img = DecodedImage::new(20, 10, vec![0u8; 20 * 10 * 4]);
        assert_eq!(img.pixel_count(), 200);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_has_transparency() {
        let opaque = DecodedImage::new(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]);
        assert!(!opaque.has_transparency());

        let partial = DecodedImage::new(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 128]);
        assert!(partial.has_transparency());
    }

    #[test]
    fn test_from_rgba_image_keeps_layout() {
        let mut rgba = image::RgbaImage::new(3, 2);
        rgba.put_pixel(2, 1, image::Rgba([9, 8, 7, 6]));
        let img = DecodedImage::from_rgba_image(rgba);

        assert_eq!((img.width, img.height), (3, 2));
        let last = &img.pixels[img.pixels.len() - 4..];
        assert_eq!(last, &[9, 8, 7, 6]);
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::InvalidFormat.to_string(),
            "Invalid or unsupported image format"
        );
        let err = DecodeError::EmptyImage { width: 0, height: 4 };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x4");
    }
}
