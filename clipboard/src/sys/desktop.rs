use crate::{ClipboardError, ImageFormat, NativeImage, Result};
use arboard::Clipboard;
use std::borrow::Cow;
use std::fmt;

use super::ClipboardBackend;

/// The operating system clipboard, accessed through `arboard`.
///
/// arboard exchanges images as RGBA8 bytes, which is byte for byte the
/// [`ImageFormat::argb32`] layout, so images pass through without conversion.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::ClipboardAccess`] if the clipboard cannot be opened.
    pub fn new() -> Result<Self> {
        let inner = Clipboard::new().map_err(access_error)?;
        Ok(Self { inner })
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        let text = self
            .inner
            .get_text()
            .map_err(|e| read_error(e, ClipboardError::NoTextAvailable))?;
        log::debug!("read {} bytes of text from the clipboard", text.len());
        Ok(text)
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        log::debug!("writing {} bytes of text to the clipboard", text.len());
        self.inner.set_text(text).map_err(access_error)
    }

    fn get_image(&mut self) -> Result<NativeImage<'static>> {
        let image = self
            .inner
            .get_image()
            .map_err(|e| read_error(e, ClipboardError::NoImageAvailable))?;
        log::debug!(
            "read {}x{} image ({} bytes) from the clipboard",
            image.width,
            image.height,
            image.bytes.len()
        );
        Ok(NativeImage {
            format: ImageFormat::argb32(image.width, image.height),
            bytes: Cow::Owned(image.bytes.into_owned()),
        })
    }

    fn set_image(&mut self, image: NativeImage<'_>) -> Result<()> {
        if !image.format.is_argb32() {
            return Err(ClipboardError::UnsupportedFormat(format!(
                "{} bits per pixel",
                image.format.bits_per_pixel
            )));
        }
        log::debug!(
            "writing {}x{} image to the clipboard",
            image.format.width,
            image.format.height
        );
        self.inner
            .set_image(arboard::ImageData {
                width: image.format.width,
                height: image.format.height,
                bytes: image.bytes,
            })
            .map_err(access_error)
    }

    fn clear(&mut self) -> Result<()> {
        log::debug!("clearing the clipboard");
        self.inner.clear().map_err(access_error)
    }
}

/// Map a failed read, reporting `missing` when the clipboard lacks that content.
fn read_error(error: arboard::Error, missing: ClipboardError) -> ClipboardError {
    match error {
        arboard::Error::ContentNotAvailable => missing,
        e => access_error(e),
    }
}

fn access_error(error: arboard::Error) -> ClipboardError {
    log::warn!("clipboard access failed: {error}");
    ClipboardError::ClipboardAccess(error.to_string())
}
