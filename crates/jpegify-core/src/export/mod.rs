//! Output artifacts: individual downloads, bundled archives, clipboard.
//!
//! The front end supplies the collaborators: a [`DownloadSink`] that
//! receives finished files, an optional [`ArchiveBuilder`], and a
//! [`Clipboard`]. When no archive builder is available, a bundled download
//! degrades to one individual download per item.

mod archive;
mod clipboard;
mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::encode::TARGET_MIME;
use crate::pipeline::ConvertedItem;

pub use archive::{ArchiveBuilder, ArchiveEntry, ZipArchiveBuilder};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use naming::{
    target_file_name, unique_names, ARCHIVE_FILE_NAME, SOURCE_EXTENSION, TARGET_EXTENSION,
};

/// Errors while handing output to the outside world.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No converted item at index {0}")]
    NoSuchItem(usize),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid download name: {0:?}")]
    InvalidName(String),
}

/// Receives finished files, one call per download action.
pub trait DownloadSink {
    fn save(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// A download sink that writes files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, file_name: &str, _mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        // Only the final path component is honored.
        let leaf = Path::new(file_name)
            .file_name()
            .ok_or_else(|| ExportError::InvalidName(file_name.to_string()))?;

        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(leaf), bytes)?;
        Ok(())
    }
}

/// Records every download action in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub downloads: Vec<Download>,
}

/// One recorded download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DownloadSink for RecordingSink {
    fn save(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        self.downloads.push(Download {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

/// How a bundled download was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleOutcome {
    /// One archive download holding `entries` files.
    Archive { entries: usize },
    /// No archive builder was available; `count` individual downloads.
    Individual { count: usize },
}

/// Save one converted item under its target file name.
pub fn download_item(item: &ConvertedItem, sink: &mut dyn DownloadSink) -> Result<(), ExportError> {
    sink.save(&item.download_name(), TARGET_MIME, &item.encoded_bytes)
}

/// Deliver all items as one archive, or one by one without an archiver.
pub fn bundle_download(
    items: &[ConvertedItem],
    archiver: Option<&dyn ArchiveBuilder>,
    sink: &mut dyn DownloadSink,
) -> Result<BundleOutcome, ExportError> {
    let Some(archiver) = archiver else {
        log::warn!("no archive builder available, downloading {} files individually", items.len());
        for item in items {
            download_item(item, sink)?;
        }
        return Ok(BundleOutcome::Individual { count: items.len() });
    };

    let target_names: Vec<String> = items.iter().map(ConvertedItem::download_name).collect();
    let names = unique_names(target_names.iter().map(String::as_str));
    let entries: Vec<ArchiveEntry<'_>> = names
        .iter()
        .zip(items)
        .map(|(name, item)| ArchiveEntry {
            name: name.as_str(),
            bytes: &item.encoded_bytes,
        })
        .collect();

    let archive = archiver.build(&entries)?;
    sink.save(ARCHIVE_FILE_NAME, archiver.mime_type(), &archive)?;
    Ok(BundleOutcome::Archive {
        entries: entries.len(),
    })
}
