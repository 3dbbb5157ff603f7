//! Jpegify WASM - WebAssembly bindings for jpegify
//!
//! This crate exposes the jpegify-core conversion pipeline to a browser
//! page. The page keeps the DOM work (file pickers, preview cards, alerts,
//! anchors for downloads); everything else happens here.
//!
//! # Module Structure
//!
//! - `session` - A stateful conversion session (selection, results, exports)
//! - `encode` - Stateless single-file conversion helpers
//! - `types` - WASM-compatible wrapper types for results and downloads
//! - `logger` - Forwards `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsConversionSession } from '@jpegify/wasm';
//!
//! await init();
//! const session = new JsConversionSession();
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod logger;
mod session;
mod types;

pub use encode::{convert_png, data_uri_to_bytes, jpeg_file_name};
pub use session::JsConversionSession;
pub use types::{JsConvertedItem, JsDownload};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Info);
}

/// Raise or lower console logging: 0 = off ... 5 = trace.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: u8) {
    log::set_max_level(level_filter(level));
}

fn level_filter(level: u8) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0), log::LevelFilter::Off);
        assert_eq!(level_filter(3), log::LevelFilter::Info);
        assert_eq!(level_filter(200), log::LevelFilter::Trace);
    }
}
