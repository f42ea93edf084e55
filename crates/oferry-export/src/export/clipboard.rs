//! Primary clipboard path.
//!
//! `ClipboardBackend` is the seam between the export service and the
//! platform clipboard, so shells and tests can substitute their own
//! implementation.  `SystemClipboard` is the production backend.

use crate::export::types::ClipError;

/// Writes text to a clipboard.
pub trait ClipboardBackend: Send + Sync + 'static {
    /// Place `text` on the clipboard verbatim.
    fn set_text(&self, text: &str) -> Result<(), ClipError>;
}

/// System clipboard via `arboard`.  A fresh context is opened per write;
/// writes are rare enough that setup cost does not matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipError::WriteFailed(e.to_string()))
    }
}
