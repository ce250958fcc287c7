//! Stub implementation for platforms without a supported clipboard.
use crate::{ClipboardError, NativeImage, Result};

use super::ClipboardBackend;

/// Placeholder for the system clipboard on unsupported platforms.
///
/// Opening it always fails, so no operation ever reaches the clipboard.
#[derive(Debug)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Always fails with [`ClipboardError::ClipboardAccess`].
    ///
    /// # Errors
    ///
    /// Clipboard access is not available on this platform.
    pub fn new() -> Result<Self> {
        Err(unsupported())
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        Err(unsupported())
    }

    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(unsupported())
    }

    fn get_image(&mut self) -> Result<NativeImage<'static>> {
        Err(unsupported())
    }

    fn set_image(&mut self, _image: NativeImage<'_>) -> Result<()> {
        Err(unsupported())
    }

    fn clear(&mut self) -> Result<()> {
        Err(unsupported())
    }
}

fn unsupported() -> ClipboardError {
    ClipboardError::ClipboardAccess("clipboard access is not supported on this platform".into())
}
