//! Stateless conversion bindings.
//!
//! For pages that manage their own file list, these functions convert a
//! single file or unpack a data URI without a session.
//!
//! # Functions
//!
//! - [`convert_png`] - Convert one PNG file to a `JsConvertedItem`
//! - [`data_uri_to_bytes`] - Decode a base64 data URI back into bytes
//! - [`jpeg_file_name`] - The download name for a source file name
//!
//! # Example
//!
//! ```typescript
//! import { convert_png } from '@jpegify/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const item = convert_png(file.name, bytes, { quality: 0.8, backgroundColor: '#000' });
//! img.src = item.dataUri;
//! ```

use jpegify_core::encode::parse_data_uri;
use jpegify_core::export::target_file_name;
use jpegify_core::{load_image, rasterize_and_encode, ConversionOptions, ConvertedItem};
use wasm_bindgen::prelude::*;

use crate::types::{options_from_js, JsConvertedItem};

/// Convert one PNG file to JPEG.
///
/// # Arguments
///
/// * `name` - Source file name, used for the download name
/// * `bytes` - File contents as a `Uint8Array`
/// * `options` - `{ quality?, backgroundColor? }`, or `undefined` for defaults
///
/// # Errors
///
/// Returns an error if the options are malformed, the background color is
/// not a color, or the bytes cannot be decoded as an image.
#[wasm_bindgen]
pub fn convert_png(name: &str, bytes: &[u8], options: JsValue) -> Result<JsConvertedItem, JsValue> {
    let options = options_from_js(options)?;
    convert_one(name, bytes, &options)
        .map(JsConvertedItem::from)
        .map_err(|e| JsValue::from_str(&e))
}

/// Decode a base64 data URI to its payload bytes.
#[wasm_bindgen]
pub fn data_uri_to_bytes(uri: &str) -> Result<Vec<u8>, JsValue> {
    parse_data_uri(uri)
        .map(|(_, bytes)| bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Download name for a source file, e.g. `photo.png` -> `photo.jpg`.
#[wasm_bindgen]
pub fn jpeg_file_name(name: &str) -> String {
    target_file_name(name)
}

fn convert_one(
    name: &str,
    bytes: &[u8],
    options: &ConversionOptions,
) -> Result<ConvertedItem, String> {
    let background = options.background().map_err(|e| e.to_string())?;
    let decoded = load_image(bytes).map_err(|e| e.to_string())?;
    let encoded = rasterize_and_encode(&decoded, background, options.effective_quality())
        .map_err(|e| e.to_string())?;
    Ok(ConvertedItem::from_encoded(name, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(5, 4, Rgba([0, 0, 255, 0]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_convert_one() {
        let item = convert_one("blue.png", &png(), &ConversionOptions::default()).unwrap();
        assert_eq!(item.download_name(), "blue.jpg");
        assert_eq!((item.width, item.height), (5, 4));
        assert_eq!(&item.encoded_bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_convert_one_bad_color() {
        let opts = ConversionOptions::default().with_background("#xyz");
        let err = convert_one("a.png", &png(), &opts).unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_convert_one_bad_bytes() {
        let err = convert_one("a.png", b"nope", &ConversionOptions::default()).unwrap_err();
        assert_eq!(err, "Invalid or unsupported image format");
    }

    #[test]
    fn test_jpeg_file_name() {
        assert_eq!(jpeg_file_name("x.PNG"), "x.jpg");
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_data_uri_to_bytes() {
        assert_eq!(
            data_uri_to_bytes("data:image/jpeg;base64,/9j/").unwrap(),
            vec![0xFF, 0xD8, 0xFF]
        );
        assert!(data_uri_to_bytes("not a uri").is_err());
    }

    #[wasm_bindgen_test]
    fn test_convert_png_rejects_garbage() {
        assert!(convert_png("a.png", b"nope", JsValue::UNDEFINED).is_err());
    }
}
