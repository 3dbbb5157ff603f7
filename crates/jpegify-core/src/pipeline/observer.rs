//! Progress reporting from the pipeline to the presentation layer.

use std::fmt;

use serde::Serialize;

use crate::export::ClipboardError;

/// User-facing notices. Each one maps to a blocking message in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Conversion was requested with nothing selected.
    EmptySelection,
    /// A run finished.
    ConversionComplete { converted: usize, skipped: usize },
    /// Copy was requested before anything was converted.
    NothingToCopy,
    /// The first item's data URI is on the clipboard.
    Copied,
    /// The clipboard refused the write.
    ClipboardUnavailable,
    /// Download-all was requested before anything was converted.
    NothingToDownload,
}

impl Notice {
    /// The notice reporting how a clipboard write went.
    pub fn for_copy(result: &Result<(), ClipboardError>) -> Self {
        match result {
            Ok(()) => Notice::Copied,
            Err(_) => Notice::ClipboardUnavailable,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptySelection => f.write_str("Select PNG files first"),
            Notice::ConversionComplete { skipped: 0, .. } => f.write_str(
                "Conversion complete. Previews ready below. Use Download buttons or Download All.",
            ),
            Notice::ConversionComplete { converted, skipped } => write!(
                f,
                "Conversion complete. {converted} converted, {skipped} skipped."
            ),
            Notice::NothingToCopy => f.write_str("No converted image found. Convert first."),
            Notice::Copied => f.write_str("First JPG (base64) copied to clipboard"),
            Notice::ClipboardUnavailable => f.write_str("Copy failed, see console"),
            Notice::NothingToDownload => f.write_str("No converted files to download"),
        }
    }
}

/// A preview card's worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Size in bytes of the file the preview shows.
    pub byte_size: usize,
    /// `None` for source previews that have not been converted yet.
    pub data_uri: Option<String>,
}

impl Preview {
    /// Byte size rounded to whole kilobytes.
    pub fn size_kb(&self) -> usize {
        (self.byte_size + 512) / 1024
    }

    /// Caption text, e.g. `640 x 480px • 12 KB`.
    pub fn caption(&self) -> String {
        format!("{} x {}px • {} KB", self.width, self.height, self.size_kb())
    }
}

/// Receives previews and notices as a run progresses.
pub trait ConversionObserver {
    fn on_preview(&mut self, _preview: &Preview) {}

    fn on_notice(&mut self, _notice: Notice) {}
}

/// Observer that ignores everything.
impl ConversionObserver for () {}

/// Observer that keeps everything it is told, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub previews: Vec<Preview>,
    pub notices: Vec<Notice>,
}

impl ConversionObserver for RecordingObserver {
    fn on_preview(&mut self, preview: &Preview) {
        self.previews.push(preview.clone());
    }

    fn on_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
