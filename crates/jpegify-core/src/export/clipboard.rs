//! Clipboard seam.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard API is missing or permission was refused.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// A text clipboard the first converted item can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard, useful for headless front ends.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
