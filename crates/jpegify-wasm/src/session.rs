//! Conversion session bindings.
//!
//! A page creates one `JsConversionSession`, stages the picked or dropped
//! files, commits them as the selection and then drives conversion,
//! copying and downloads. `convertAll` returns its notices with the run
//! outcome and `copyFirst` resolves to its notice; notices from
//! downloading are queued and drained with `takeNotices()`. The page shows
//! them as alerts.
//!
//! # Example
//!
//! ```typescript
//! const session = new JsConversionSession();
//! for (const file of input.files) {
//!   session.stageFile(file.name, file.type, new Uint8Array(await file.arrayBuffer()));
//! }
//! label.textContent = session.commitSelection();
//!
//! const outcome = session.convertAll({ quality: 0.8, backgroundColor: '#ffffff' });
//! outcome.notices.forEach(alert);
//!
//! alert(await session.copyFirst((text) => navigator.clipboard.writeText(text)));
//!
//! for (const d of session.downloadAll(typeof JSZip !== 'undefined')) {
//!   saveBlob(new Blob([d.bytes()], { type: d.mimeType }), d.fileName);
//! }
//! ```

use jpegify_core::export::RecordingSink;
use jpegify_core::pipeline::RecordingObserver;
use jpegify_core::{
    ArchiveBuilder, ClipboardError, ConversionOptions, ConversionSession, Notice, SourceFile,
    ZipArchiveBuilder,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use crate::types::{options_from_js, JsConvertedItem, JsDownload, RunOutcome};

/// Calls `write(text)`. A returned promise is awaited, so an async
/// clipboard API that rejects counts as a failed write.
async fn write_clipboard(write: js_sys::Function, text: String) -> Result<(), ClipboardError> {
    let returned = write
        .call1(&JsValue::NULL, &JsValue::from_str(&text))
        .map_err(unavailable)?;

    if let Ok(pending) = returned.dyn_into::<js_sys::Promise>() {
        JsFuture::from(pending).await.map_err(unavailable)?;
    }
    Ok(())
}

fn unavailable(e: JsValue) -> ClipboardError {
    let reason = e.as_string().unwrap_or_else(|| format!("{:?}", e));
    ClipboardError::Unavailable(reason)
}

#[wasm_bindgen]
pub struct JsConversionSession {
    inner: ConversionSession,
    staged: Vec<SourceFile>,
    observer: RecordingObserver,
}

impl Default for JsConversionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsConversionSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsConversionSession {
        JsConversionSession {
            inner: ConversionSession::new(),
            staged: Vec::new(),
            observer: RecordingObserver::default(),
        }
    }

    /// Stage one file for the next `commitSelection`/`commitDrop`.
    #[wasm_bindgen(js_name = stageFile)]
    pub fn stage_file(&mut self, name: String, mime_type: String, bytes: Vec<u8>) {
        self.staged.push(SourceFile::new(name, mime_type, bytes));
    }

    /// Make the staged files the selection. Returns the picker label.
    #[wasm_bindgen(js_name = commitSelection)]
    pub fn commit_selection(&mut self) -> String {
        let files = std::mem::take(&mut self.staged);
        self.inner.select(files);
        self.inner.selection_label()
    }

    /// Like `commitSelection`, keeping only `image/png` files.
    #[wasm_bindgen(js_name = commitDrop)]
    pub fn commit_drop(&mut self) -> String {
        let files = std::mem::take(&mut self.staged);
        self.inner.select_dropped(files);
        self.inner.selection_label()
    }

    /// Previews of the selected (not yet converted) files.
    #[wasm_bindgen(js_name = selectionPreviews)]
    pub fn selection_previews(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.probe_selection())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Convert the selection.
    ///
    /// `options` is `{ quality?, backgroundColor?, failurePolicy? }`. The
    /// result is `{ state, report, previews, notices, error }`; a failed
    /// run is reported through `error`, not thrown.
    #[wasm_bindgen(js_name = convertAll)]
    pub fn convert_all(&mut self, options: JsValue) -> Result<JsValue, JsValue> {
        let options = options_from_js(options)?;
        let outcome = self.run(&options);
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.inner.results().len()
    }

    /// The converted item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<JsConvertedItem> {
        self.inner.results().get(index).cloned().map(JsConvertedItem::from)
    }

    /// Copy the first item's data URI by calling `write(text)`.
    ///
    /// Resolves to the notice text once `write` (and the promise it
    /// returns, if any) has settled. Never rejects.
    #[wasm_bindgen(js_name = copyFirst)]
    pub fn copy_first(&self, write: js_sys::Function) -> js_sys::Promise {
        let Some(text) = self.inner.first_data_uri().map(str::to_owned) else {
            let notice = Notice::NothingToCopy.to_string();
            return js_sys::Promise::resolve(&JsValue::from_str(&notice));
        };

        future_to_promise(async move {
            let result = write_clipboard(write, text).await;
            if let Err(e) = &result {
                log::warn!("copy failed: {}", e);
            }
            Ok(JsValue::from_str(&Notice::for_copy(&result).to_string()))
        })
    }

    /// Files to download for "download all": one ZIP when `use_archive`,
    /// otherwise one file per item.
    #[wasm_bindgen(js_name = downloadAll)]
    pub fn download_all(&mut self, use_archive: bool) -> Result<js_sys::Array, JsValue> {
        let downloads = self.collect_downloads(use_archive)?;
        Ok(downloads.into_iter().map(JsValue::from).collect())
    }

    /// Notices queued since the last call, as display strings.
    #[wasm_bindgen(js_name = takeNotices)]
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.observer.notices)
            .into_iter()
            .map(|n| n.to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.observer = RecordingObserver::default();
        self.inner.clear();
    }
}

impl JsConversionSession {
    fn run(&mut self, options: &ConversionOptions) -> RunOutcome {
        let mut observer = RecordingObserver::default();
        let result = self.inner.convert_all(options, &mut observer);

        let (report, error) = match result {
            Ok(report) => (Some(report), None),
            Err(e) => (None, Some(e.to_string())),
        };
        RunOutcome {
            state: self.inner.state(),
            report,
            previews: observer.previews,
            notices: observer.notices.iter().map(ToString::to_string).collect(),
            error,
        }
    }

    fn collect_downloads(&mut self, use_archive: bool) -> Result<Vec<JsDownload>, JsValue> {
        let zip = ZipArchiveBuilder::new();
        let archiver: Option<&dyn ArchiveBuilder> = if use_archive { Some(&zip) } else { None };
        let mut sink = RecordingSink::default();

        self.inner
            .download_all(archiver, &mut sink, &mut self.observer)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(sink.downloads.into_iter().map(JsDownload::from).collect())
    }
}
