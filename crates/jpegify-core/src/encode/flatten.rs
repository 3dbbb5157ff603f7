//! Background flattening.
//!
//! JPEG has no alpha channel, so every pixel is composited (source-over)
//! onto an opaque background before encoding. Fully transparent pixels
//! become the background color; fully opaque pixels are copied unchanged.

use image::{Rgb, RgbImage};

use super::EncodeError;
use crate::decode::DecodedImage;

/// Composite an RGBA image onto a solid background, producing RGB.
///
/// Fails if the pixel buffer is not exactly `width * height * 4` bytes.
pub fn flatten(image: &DecodedImage, background: Rgb<u8>) -> Result<RgbImage, EncodeError> {
    let expected = image.pixel_count() * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::BufferMismatch {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut out = Vec::with_capacity(image.pixel_count() * 3);

    for px in image.pixels.chunks_exact(4) {
        let alpha = px[3];
        for c in 0..3 {
            out.push(blend(px[c], background.0[c], alpha));
        }
    }

    RgbImage::from_raw(image.width, image.height, out).ok_or(EncodeError::BufferMismatch {
        expected,
        actual: image.pixels.len(),
    })
}

#[inline]
fn blend(src: u8, bg: u8, alpha: u8) -> u8 {
    match alpha {
        u8::MAX => src,
        0 => bg,
        a => {
            let a = a as u32;
            ((src as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
        }
    }
}
