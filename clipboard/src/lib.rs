//! Clipboard text and packed-pixel image access.
//!
//! This crate moves text and raw pixel images between a caller and the system
//! clipboard. Images travel as flat buffers of packed 32-bit pixels; the
//! [`marshal`] module turns such a buffer into a [`NativeImage`] with an explicit
//! [`ImageFormat`] descriptor and back again without touching channel order.
//!
//! The free functions in this crate open the platform clipboard for the duration
//! of a single call and hold no state between calls. Use the [`marshal`] and
//! [`text`] modules directly with any [`ClipboardBackend`] (for example
//! [`MemoryClipboard`]) when the system clipboard is not wanted.
//!
//! ```rust,no_run
//! let pixels: [u32; 6] = [0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF, 0x7FFF_0000, 0x7F00_FF00, 0x7F00_00FF];
//! clipbridge_clipboard::set_image(&pixels, 3, 2)?;
//!
//! let image = clipbridge_clipboard::get_image()?;
//! assert_eq!(image.pixels, pixels);
//! # Ok::<(), clipbridge_clipboard::ClipboardError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod format;
pub mod marshal;
pub mod sys;
pub mod text;

pub use error::ClipboardError;
pub use format::{ChannelMask, ImageFormat, NativeImage, PixelImage};
pub use sys::{ClipboardBackend, MemoryClipboard, SystemClipboard};

/// Result alias used throughout the crate.
pub type Result<T, E = ClipboardError> = std::result::Result<T, E>;

/// Get text from the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError::NoTextAvailable`] if the clipboard holds no text,
/// or [`ClipboardError::ClipboardAccess`] if the clipboard cannot be opened.
pub fn get_text() -> Result<String> {
    text::get_text(&mut SystemClipboard::new()?)
}

/// Set text to the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError::ClipboardAccess`] if the clipboard cannot be written.
pub fn set_text(text: &str) -> Result<()> {
    text::set_text(&mut SystemClipboard::new()?, text)
}

/// Get image from the system clipboard as packed 32-bit pixels.
///
/// # Errors
///
/// Returns [`ClipboardError::NoImageAvailable`] if the clipboard holds no image.
pub fn get_image() -> Result<PixelImage> {
    marshal::get_image(&mut SystemClipboard::new()?)
}

/// Set image to the system clipboard from packed 32-bit pixels.
///
/// `pixels` is borrowed for the duration of the call only.
///
/// # Errors
///
/// Returns [`ClipboardError::InvalidDimensions`] or
/// [`ClipboardError::InvalidBufferSize`] if the buffer does not describe a
/// `width` x `height` image. Validation happens before the clipboard is opened.
pub fn set_image(pixels: &[u32], width: usize, height: usize) -> Result<()> {
    let image = marshal::to_native(pixels, width, height)?;
    SystemClipboard::new()?.set_image(image)
}

/// Remove all content from the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError::ClipboardAccess`] if the clipboard cannot be cleared.
pub fn clear() -> Result<()> {
    SystemClipboard::new()?.clear()
}
