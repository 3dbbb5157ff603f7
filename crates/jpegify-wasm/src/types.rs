//! WASM-compatible wrapper types for conversion results.
//!
//! This module provides JavaScript-friendly types that wrap the core jpegify
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use jpegify_core::export::Download;
use jpegify_core::{ConversionOptions, ConvertedItem, Preview, RunReport};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A converted image for JavaScript.
///
/// The JPEG bytes live in WASM memory; `bytes()` copies them out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsConvertedItem {
    inner: ConvertedItem,
}

#[wasm_bindgen]
impl JsConvertedItem {
    /// Name of the source file, e.g. `photo.png`
    #[wasm_bindgen(getter, js_name = originalName)]
    pub fn original_name(&self) -> String {
        self.inner.original_name.clone()
    }

    /// Name to download the JPEG under, e.g. `photo.jpg`
    #[wasm_bindgen(getter, js_name = downloadName)]
    pub fn download_name(&self) -> String {
        self.inner.download_name()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Encoded size in bytes
    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.inner.encoded_size()
    }

    /// `data:image/jpeg;base64,...` form, usable directly as an `<img>` src
    #[wasm_bindgen(getter, js_name = dataUri)]
    pub fn data_uri(&self) -> String {
        self.inner.encoded_data_uri.clone()
    }

    /// Returns the JPEG bytes as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.encoded_bytes.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl From<ConvertedItem> for JsConvertedItem {
    fn from(inner: ConvertedItem) -> Self {
        Self { inner }
    }
}

/// One file the page should hand to the browser as a download.
#[wasm_bindgen]
pub struct JsDownload {
    inner: Download,
}

#[wasm_bindgen]
impl JsDownload {
    #[wasm_bindgen(getter, js_name = fileName)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type.clone()
    }

    /// Returns the file contents as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }
}

impl From<Download> for JsDownload {
    fn from(inner: Download) -> Self {
        Self { inner }
    }
}

/// Result of a conversion run, serialized to a plain JS object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunOutcome {
    pub state: jpegify_core::PipelineState,
    pub report: Option<RunReport>,
    pub previews: Vec<Preview>,
    pub notices: Vec<String>,
    /// Set when the run did not complete.
    pub error: Option<String>,
}

/// Read options from a JS object. `undefined`/`null` mean defaults.
pub(crate) fn options_from_js(value: JsValue) -> Result<ConversionOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ConversionOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid conversion options: {}", e)))
}
