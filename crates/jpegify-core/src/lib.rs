//! Jpegify Core - PNG to JPEG conversion
//!
//! This crate converts a selection of PNG files to JPEG: each image is
//! decoded, flattened onto a background color (JPEG cannot store alpha),
//! and encoded at a configurable quality. Results can be downloaded one by
//! one, bundled into a ZIP archive, or copied to a clipboard as a data URI.
//!
//! # Module Structure
//!
//! - `decode` - Image loading from file bytes
//! - `encode` - Background flattening, JPEG encoding, data URIs
//! - `pipeline` - The conversion session and its run state machine
//! - `export` - Download sinks, archive building, clipboard
//! - `options` / `color` - Run configuration
//!
//! # Example
//!
//! ```ignore
//! use jpegify_core::{ConversionOptions, ConversionSession, SourceFile};
//!
//! let mut session = ConversionSession::new();
//! session.select(vec![SourceFile::png("logo.png", std::fs::read("logo.png")?)]);
//! let report = session.convert_all(&ConversionOptions::new().with_quality(0.8), &mut ())?;
//! println!("{} converted", report.converted);
//! ```

pub mod color;
pub mod decode;
pub mod encode;
pub mod export;
pub mod options;
pub mod pipeline;

pub use decode::{load_image, DecodeError, DecodedImage};
pub use encode::{rasterize_and_encode, EncodeError, EncodedImage};
pub use export::{
    ArchiveBuilder, BundleOutcome, Clipboard, ClipboardError, DirectorySink, DownloadSink,
    ExportError, ZipArchiveBuilder,
};
pub use options::{ConfigError, ConversionOptions, FailurePolicy};
pub use pipeline::{
    ConversionObserver, ConversionSession, ConvertedItem, Notice, PipelineError, PipelineState,
    Preview, RunReport, SourceFile,
};
