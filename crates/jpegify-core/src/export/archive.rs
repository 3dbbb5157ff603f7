//! Archive building.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::ExportError;

/// One named file inside an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveEntry<'a> {
    pub name: &'a str,
    pub bytes: &'a [u8],
}

/// Bundles named byte entries into a single archive blob.
pub trait ArchiveBuilder {
    /// Build the archive. Entry names are expected to be unique.
    fn build(&self, entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>, ExportError>;

    /// MIME type of the produced blob.
    fn mime_type(&self) -> &'static str;
}

/// Builds ZIP archives with the `zip` crate.
///
/// Entries are stored without compression and with a fixed timestamp, so
/// the same entries always produce the same archive bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveBuilder;

impl ZipArchiveBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveBuilder for ZipArchiveBuilder {
    fn build(&self, entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>, ExportError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        for entry in entries {
            zip.start_file(entry.name, options)?;
            zip.write_all(entry.bytes)?;
        }

        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();
        log::info!("built zip archive: {} entries, {} bytes", entries.len(), bytes.len());
        Ok(bytes)
    }

    fn mime_type(&self) -> &'static str {
        "application/zip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut data = Vec::new();
                file.read_to_end(&mut data).unwrap();
                (file.name().to_string(), data)
            })
            .collect()
    }

    #[test]
    fn test_entries_round_trip() {
        let entries = [
            ArchiveEntry { name: "a.jpg", bytes: &[1, 2, 3] },
            ArchiveEntry { name: "b.jpg", bytes: &[0xFF, 0xD8, 0xFF, 0xD9] },
        ];
        let zip = ZipArchiveBuilder::new().build(&entries).unwrap();

        let read = read_entries(&zip);
        assert_eq!(read.len(), 2);
        assert_eq!(read[0], ("a.jpg".to_string(), vec![1, 2, 3]));
        assert_eq!(read[1], ("b.jpg".to_string(), vec![0xFF, 0xD8, 0xFF, 0xD9]));
    }

    #[test]
    fn test_empty_archive_is_valid() {
        let zip = ZipArchiveBuilder::new().build(&[]).unwrap();
        assert!(read_entries(&zip).is_empty());
    }

    #[test]
    fn test_archive_is_deterministic() {
        let entries = [ArchiveEntry { name: "x.jpg", bytes: &[9; 64] }];
        let a = ZipArchiveBuilder::new().build(&entries).unwrap();
        let b = ZipArchiveBuilder::new().build(&entries).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_names_fail() {
        let entries = [
            ArchiveEntry { name: "x.jpg", bytes: &[1] },
            ArchiveEntry { name: "x.jpg", bytes: &[2] },
        ];
        assert!(matches!(
            ZipArchiveBuilder::new().build(&entries),
            Err(ExportError::Archive(_))
        ));
    }
}
