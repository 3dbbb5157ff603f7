//! Image loading for the conversion pipeline.
//!
//! This module turns the raw bytes of a selected file into an RGBA bitmap
//! with known dimensions. Loading is a single synchronous step per file: it
//! either yields a [`DecodedImage`] or a [`DecodeError`] that the pipeline
//! classifies according to its failure policy.
//!
//! # Examples
//!
//! ```ignore
//! use jpegify_core::decode::load_image;
//!
//! let png_bytes = std::fs::read("logo.png").unwrap();
//! let image = load_image(&png_bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod load;
mod types;

pub use load::{load_image, probe_dimensions};
pub use types::{DecodeError, DecodedImage};
