//! Copy-to-clipboard action for sample environment blocks
//!
//! Uses arboard for the system clipboard.

use arboard::Clipboard;
use tracing::error;

use super::notify::{Notification, NotificationSink};

pub const COPIED_TITLE: &str = "Copied to clipboard";
pub const COPY_FAILED_TITLE: &str = "Failed to copy to clipboard";

/// Error type for clipboard writes
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    Write(String),
}

/// Write-text primitive of the host clipboard
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard.
///
/// The handle is opened lazily on first write so a headless session can
/// still render the panel.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not initialized".to_string()));
        };

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Copy `text` and report the outcome through `sink`.
///
/// Failures are logged and turned into an error notification; they never
/// propagate to the caller.
pub fn copy_to_clipboard(
    clipboard: &mut dyn ClipboardWriter,
    sink: &mut dyn NotificationSink,
    text: &str,
) {
    match clipboard.write_text(text) {
        Ok(()) => sink.notify(Notification::success(COPIED_TITLE)),
        Err(e) => {
            error!("[devtools] Failed to copy to clipboard: {}", e);
            sink.notify(Notification::error(COPY_FAILED_TITLE));
        }
    }
}
