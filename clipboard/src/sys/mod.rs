//! Clipboard backends.
//!
//! A [`ClipboardBackend`] is the seam to whatever actually stores clipboard
//! content. The platform backend is exported as [`SystemClipboard`];
//! [`MemoryClipboard`] keeps content inside the process.

use crate::{NativeImage, Result};

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub use desktop::SystemClipboard;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
/// Fallback for platforms without clipboard support.
pub mod stub;
#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub use stub::SystemClipboard;

mod memory;
pub use memory::MemoryClipboard;

/// Storage for the current clipboard content.
///
/// Every call is a single synchronous request. Implementations are not
/// required to be reentrant; callers sharing one backend across threads must
/// serialize access themselves.
pub trait ClipboardBackend {
    /// Read the current text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClipboardError::NoTextAvailable`] if no text is held.
    fn get_text(&mut self) -> Result<String>;

    /// Replace the clipboard content with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClipboardError::ClipboardAccess`] if the write fails.
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Read the current image.
    ///
    /// The returned bytes are owned; nothing in them refers back into the
    /// backend after the call returns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClipboardError::NoImageAvailable`] if no image is held.
    fn get_image(&mut self) -> Result<NativeImage<'static>>;

    /// Replace the clipboard content with `image`.
    ///
    /// The image may borrow caller memory; implementations copy whatever they
    /// need to keep before returning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClipboardError::ClipboardAccess`] if the write fails.
    fn set_image(&mut self, image: NativeImage<'_>) -> Result<()>;

    /// Remove all clipboard content.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClipboardError::ClipboardAccess`] if the clear fails.
    fn clear(&mut self) -> Result<()>;
}

impl<B: ClipboardBackend + ?Sized> ClipboardBackend for &mut B {
    fn get_text(&mut self) -> Result<String> {
        (**self).get_text()
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }

    fn get_image(&mut self) -> Result<NativeImage<'static>> {
        (**self).get_image()
    }

    fn set_image(&mut self, image: NativeImage<'_>) -> Result<()> {
        (**self).set_image(image)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

impl<B: ClipboardBackend + ?Sized> ClipboardBackend for Box<B> {
    fn get_text(&mut self) -> Result<String> {
        (**self).get_text()
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }

    fn get_image(&mut self) -> Result<NativeImage<'static>> {
        (**self).get_image()
    }

    fn set_image(&mut self, image: NativeImage<'_>) -> Result<()> {
        (**self).set_image(image)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
