#![forbid(unsafe_code)]

//! Clipboard seam for the copy action.
//!
//! Each readout row carries a copy button. The clipboard itself is an
//! external capability that either succeeds or fails; a failure is reported
//! to the user as a transient notification and never touches the color model.

use thiserror::Error;

/// The clipboard write did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed: {reason}")]
pub struct ClipboardError {
    /// Host-provided failure description.
    pub reason: String,
}

impl ClipboardError {
    /// Build an error from a host failure description.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External clipboard-write capability.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory [`Clipboard`] for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// The last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Copy one labeled readout value to the clipboard.
///
/// Failures are logged and returned so the host can show its transient
/// notification; nothing is retried.
pub fn copy_value(
    clipboard: &mut impl Clipboard,
    label: &str,
    value: &str,
) -> Result<(), ClipboardError> {
    match clipboard.write_text(value) {
        Ok(()) => {
            tracing::debug!(label, "copied value to clipboard");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(label, %err, "clipboard write failed");
            Err(err)
        }
    }
}
