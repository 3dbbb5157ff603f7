//! Image loading from in-memory file bytes.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode image bytes into an RGBA bitmap.
///
/// The container format is sniffed from the data itself, never from a file
/// name or declared MIME type. Alpha is preserved so the rasterizer can
/// flatten it against a background later.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognizable
/// image, `DecodeError::CorruptedFile` if decoding fails part way, and
/// `DecodeError::TooLarge` when the decoder's limits are exceeded.
pub fn load_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = guessed_reader(bytes)?;
    let img = reader.decode()?;

    let decoded = DecodedImage::from_rgba_image(img.into_rgba8());
    if decoded.is_empty() {
        return Err(DecodeError::EmptyImage {
            width: decoded.width,
            height: decoded.height,
        });
    }

    Ok(decoded)
}

/// Read pixel dimensions from the image header without decoding pixels.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    let reader = guessed_reader(bytes)?;
    Ok(reader.into_dimensions()?)
}

fn guessed_reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }
    Ok(reader)
}
