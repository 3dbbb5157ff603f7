//! The conversion session: selection, results and the run state machine.

use image::Rgb;
use serde::Serialize;
use thiserror::Error;

use super::item::{ConvertedItem, SourceFile};
use super::observer::{ConversionObserver, Notice, Preview};
use crate::color::to_hex;
use crate::decode::{load_image, probe_dimensions, DecodeError};
use crate::encode::{rasterize_and_encode, EncodeError};
use crate::export::{self, ArchiveBuilder, BundleOutcome, Clipboard, DownloadSink, ExportError};
use crate::options::{ConfigError, ConversionOptions, FailurePolicy};

/// Run-level errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No files selected")]
    EmptyInput,

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] ConfigError),

    #[error("Failed to load {name} (file {index}): {source}")]
    Decode {
        index: usize,
        name: String,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to encode {name} (file {index}): {source}")]
    Encode {
        index: usize,
        name: String,
        #[source]
        source: EncodeError,
    },
}

/// Where the session is in its run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    #[default]
    Idle,
    Running,
    Completed,
    /// The last run stopped at a failing file.
    Halted,
}

/// A file passed over under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub converted: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Holds the current selection and the results of the latest run.
///
/// The caller owns the session; independent sessions share nothing.
#[derive(Debug, Default)]
pub struct ConversionSession {
    selection: Vec<SourceFile>,
    results: Vec<ConvertedItem>,
    state: PipelineState,
}

impl ConversionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `files`, keeping every file.
    ///
    /// Results from an earlier run stay available until the next run or
    /// [`clear`](Self::clear).
    pub fn select(&mut self, files: Vec<SourceFile>) {
        log::debug!("selected {} files", files.len());
        self.selection = files;
    }

    /// Replace the selection with the dropped files whose declared MIME
    /// type is the source format. Returns how many were kept.
    pub fn select_dropped(&mut self, files: Vec<SourceFile>) -> usize {
        let total = files.len();
        let kept: Vec<SourceFile> = files
            .into_iter()
            .filter(SourceFile::is_source_format)
            .collect();
        if kept.len() < total {
            log::debug!("ignored {} dropped files of another type", total - kept.len());
        }
        let count = kept.len();
        self.select(kept);
        count
    }

    pub fn selection(&self) -> &[SourceFile] {
        &self.selection
    }

    /// Short description of the selection for the file picker label.
    pub fn selection_label(&self) -> String {
        match self.selection.as_slice() {
            [] => "No file chosen".to_string(),
            [only] => only.name.clone(),
            many => format!("{} files selected", many.len()),
        }
    }

    /// Header-only previews of the selected files. Files whose dimensions
    /// cannot be read are left out.
    pub fn probe_selection(&self) -> Vec<Preview> {
        self.selection
            .iter()
            .filter_map(|file| match probe_dimensions(&file.bytes) {
                Ok((width, height)) => Some(Preview {
                    name: file.name.clone(),
                    width,
                    height,
                    byte_size: file.byte_size(),
                    data_uri: None,
                }),
                Err(e) => {
                    log::debug!("cannot preview {}: {}", file.name, e);
                    None
                }
            })
            .collect()
    }

    pub fn results(&self) -> &[ConvertedItem] {
        &self.results
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Drop the selection and all results.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.results.clear();
        self.state = PipelineState::Idle;
    }

    /// Convert every selected file, strictly in selection order.
    ///
    /// With nothing selected this only emits [`Notice::EmptySelection`] and
    /// changes nothing. Otherwise results of the previous run are discarded
    /// before the first file is touched. Under [`FailurePolicy::Abort`] the
    /// first failure ends the run: items already converted are kept, later
    /// files are never attempted and the session is left `Halted`.
    pub fn convert_all(
        &mut self,
        options: &ConversionOptions,
        observer: &mut dyn ConversionObserver,
    ) -> Result<RunReport, PipelineError> {
        if self.selection.is_empty() {
            observer.on_notice(Notice::EmptySelection);
            return Err(PipelineError::EmptyInput);
        }

        let background = options.background()?;
        let quality = options.effective_quality();

        self.results.clear();
        self.state = PipelineState::Running;
        log::info!(
            "converting {} files at quality {:.2} onto {}",
            self.selection.len(),
            quality,
            to_hex(background)
        );

        let mut report = RunReport::default();
        for (index, file) in self.selection.iter().enumerate() {
            match convert_file(index, file, background, quality) {
                Ok(item) => {
                    log::debug!(
                        "converted {} ({} -> {} bytes)",
                        file.name,
                        file.byte_size(),
                        item.encoded_size()
                    );
                    observer.on_preview(&Preview {
                        name: item.original_name.clone(),
                        width: item.width,
                        height: item.height,
                        byte_size: item.encoded_size(),
                        data_uri: Some(item.encoded_data_uri.clone()),
                    });
                    self.results.push(item);
                    report.converted += 1;
                }
                Err(err) if options.failure_policy == FailurePolicy::Skip => {
                    log::warn!("skipping {}: {}", file.name, err);
                    report.skipped.push(SkippedFile {
                        index,
                        name: file.name.clone(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    log::warn!("halting run: {}", err);
                    self.state = PipelineState::Halted;
                    return Err(err);
                }
            }
        }

        self.state = PipelineState::Completed;
        log::info!(
            "conversion complete: {} converted, {} skipped",
            report.converted,
            report.skipped.len()
        );
        observer.on_notice(Notice::ConversionComplete {
            converted: report.converted,
            skipped: report.skipped.len(),
        });
        Ok(report)
    }

    /// Data URI of the first converted item, the one "copy" puts on the
    /// clipboard.
    pub fn first_data_uri(&self) -> Option<&str> {
        self.results.first().map(|item| item.encoded_data_uri.as_str())
    }

    /// Copy the first item's data URI to `clipboard`.
    ///
    /// Every outcome is reported as a notice; returns whether the copy
    /// happened.
    pub fn copy_first(
        &self,
        clipboard: &mut dyn Clipboard,
        observer: &mut dyn ConversionObserver,
    ) -> bool {
        let Some(text) = self.first_data_uri() else {
            observer.on_notice(Notice::NothingToCopy);
            return false;
        };

        let result = clipboard.write_text(text);
        if let Err(e) = &result {
            log::warn!("copy failed: {}", e);
        }
        observer.on_notice(Notice::for_copy(&result));
        result.is_ok()
    }

    /// Download a single converted item.
    pub fn download_item(
        &self,
        index: usize,
        sink: &mut dyn DownloadSink,
    ) -> Result<(), ExportError> {
        let item = self.results.get(index).ok_or(ExportError::NoSuchItem(index))?;
        export::download_item(item, sink)
    }

    /// Download every converted item, bundled when an archiver is available.
    ///
    /// Returns `Ok(None)` after a notice when there is nothing to download.
    pub fn download_all(
        &self,
        archiver: Option<&dyn ArchiveBuilder>,
        sink: &mut dyn DownloadSink,
        observer: &mut dyn ConversionObserver,
    ) -> Result<Option<BundleOutcome>, ExportError> {
        if self.results.is_empty() {
            observer.on_notice(Notice::NothingToDownload);
            return Ok(None);
        }
        export::bundle_download(&self.results, archiver, sink).map(Some)
    }
}

/// Load then encode one file. The decoded bitmap is dropped on return.
fn convert_file(
    index: usize,
    file: &SourceFile,
    background: Rgb<u8>,
    quality: f32,
) -> Result<ConvertedItem, PipelineError> {
    let decoded = load_image(&file.bytes).map_err(|source| PipelineError::Decode {
        index,
        name: file.name.clone(),
        source,
    })?;
    if decoded.has_transparency() {
        log::debug!(
            "{} has transparent pixels, flattening onto {}",
            file.name,
            to_hex(background)
        );
    }

    let encoded =
        rasterize_and_encode(&decoded, background, quality).map_err(|source| PipelineError::Encode {
            index,
            name: file.name.clone(),
            source,
        })?;

    Ok(ConvertedItem::from_encoded(&file.name, encoded))
}
