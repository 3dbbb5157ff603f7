//! Inputs and outputs of a conversion run.

use crate::encode::{to_data_uri, EncodedImage, TARGET_MIME};
use crate::export::target_file_name;

/// MIME type accepted from drag-and-drop selections.
pub const SOURCE_MIME: &str = "image/png";

/// A file selected by the user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    /// Declared MIME type, as reported by the selection mechanism.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// A PNG file as declared by its MIME type.
    pub fn png(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, SOURCE_MIME, bytes)
    }

    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }

    /// True when the declared MIME type is exactly the source format.
    pub fn is_source_format(&self) -> bool {
        self.mime_type == SOURCE_MIME
    }
}

/// The converted output for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedItem {
    pub original_name: String,
    pub width: u32,
    pub height: u32,
    pub encoded_bytes: Vec<u8>,
    pub encoded_data_uri: String,
}

impl ConvertedItem {
    /// Build an item from raw JPEG bytes, deriving the data URI.
    pub fn new(original_name: impl Into<String>, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        let encoded_data_uri = to_data_uri(TARGET_MIME, &bytes);
        Self {
            original_name: original_name.into(),
            width,
            height,
            encoded_bytes: bytes,
            encoded_data_uri,
        }
    }

    /// Build an item from an encoder result.
    pub fn from_encoded(original_name: &str, encoded: EncodedImage) -> Self {
        Self {
            original_name: original_name.to_string(),
            width: encoded.width,
            height: encoded.height,
            encoded_bytes: encoded.bytes,
            encoded_data_uri: encoded.data_uri,
        }
    }

    /// File name used when this item is downloaded or archived.
    pub fn download_name(&self) -> String {
        target_file_name(&self.original_name)
    }

    pub fn encoded_size(&self) -> usize {
        self.encoded_bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_check() {
        assert!(SourceFile::png("a.png", vec![]).is_source_format());
        assert!(!SourceFile::new("a.jpg", "image/jpeg", vec![]).is_source_format());
        assert!(!SourceFile::new("a.png", "IMAGE/PNG", vec![]).is_source_format());
    }

    #[test]
    fn test_converted_item_names_and_uri() {
        let item = ConvertedItem::new("holiday.PNG", 2, 2, vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(item.download_name(), "holiday.jpg");
        assert_eq!(item.encoded_size(), 3);
        assert_eq!(item.encoded_data_uri, "data:image/jpeg;base64,/9j/");
    }
}
