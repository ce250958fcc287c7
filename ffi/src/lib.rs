//! C ABI over `clipbridge-clipboard` for managed runtimes.
//!
//! Every export returns a [`ClipStatus`] code and never unwinds. Input buffers
//! are borrowed for the duration of the call only. Output buffers are allocated
//! here, copied out of the clipboard before the call returns, and must be handed
//! back through the matching `clip_*_free` function.
//!
//! A .NET caller binds the exports with `DllImport`:
//!
//! ```csharp
//! [DllImport("clipbridge_ffi")]
//! static extern int clip_set_image(uint[] pixels, nuint len, int width, int height);
//!
//! [DllImport("clipbridge_ffi")]
//! static extern int clip_get_image(out ClipImage image);
//!
//! [DllImport("clipbridge_ffi")]
//! static extern void clip_image_free(ref ClipImage image);
//! ```

#![warn(missing_docs)]

pub mod bridge;
mod buffer;
mod status;

use std::ffi::c_char;
use std::panic::{self, AssertUnwindSafe};

use clipbridge_clipboard::SystemClipboard;

pub use buffer::{ClipImage, ClipText8, ClipText16};
pub use status::ClipStatus;

fn guard<F>(name: &str, f: F) -> ClipStatus
where
    F: FnOnce() -> Result<(), ClipStatus>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => ClipStatus::Ok,
        Ok(Err(status)) => {
            log::debug!("{name} failed: {}", status.message().to_string_lossy());
            status
        }
        Err(_) => {
            log::error!("{name} panicked");
            ClipStatus::Panic
        }
    }
}

/// Install a logger that honors `RUST_LOG`. Safe to call more than once.
#[unsafe(no_mangle)]
pub extern "C" fn clip_init_logging() -> ClipStatus {
    guard("clip_init_logging", || {
        let _ = env_logger::Builder::from_default_env().try_init();
        Ok(())
    })
}

/// Static description of a status code, or null for an unknown code.
#[unsafe(no_mangle)]
pub extern "C" fn clip_status_message(code: i32) -> *const c_char {
    ClipStatus::from_code(code).map_or(std::ptr::null(), |status| status.message().as_ptr())
}

/// Replace the clipboard content with UTF-8 text.
///
/// # Safety
///
/// `text` must be valid for reads of `len` bytes, or `len` must be zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_set_text_utf8(text: *const u8, len: usize) -> ClipStatus {
    guard("clip_set_text_utf8", || {
        // SAFETY: forwarded from the caller.
        unsafe { bridge::set_text_utf8(SystemClipboard::new, text, len) }
    })
}

/// Replace the clipboard content with UTF-16 text.
///
/// # Safety
///
/// `text` must be valid for reads of `len` code units, or `len` must be zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_set_text_utf16(text: *const u16, len: usize) -> ClipStatus {
    guard("clip_set_text_utf16", || {
        // SAFETY: forwarded from the caller.
        unsafe { bridge::set_text_utf16(SystemClipboard::new, text, len) }
    })
}

/// Read clipboard text as UTF-8. Release the result with [`clip_text8_free`].
///
/// `*out` is reset to empty before the clipboard is read, so releasing it is
/// safe whatever the status.
///
/// # Safety
///
/// `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_get_text_utf8(out: *mut ClipText8) -> ClipStatus {
    guard("clip_get_text_utf8", || {
        // SAFETY: forwarded from the caller.
        unsafe { bridge::get_text_utf8(SystemClipboard::new, out) }
    })
}

/// Read clipboard text as UTF-16. Release the result with [`clip_text16_free`].
///
/// `*out` is reset to empty before the clipboard is read, so releasing it is
/// safe whatever the status.
///
/// # Safety
///
/// `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_get_text_utf16(out: *mut ClipText16) -> ClipStatus {
    guard("clip_get_text_utf16", || {
        // SAFETY: forwarded from the caller.
        unsafe { bridge::get_text_utf16(SystemClipboard::new, out) }
    })
}

/// Replace the clipboard content with a `width` x `height` image of packed pixels.
///
/// Arguments are validated before the clipboard is opened.
///
/// # Safety
///
/// `pixels` must be valid for reads of `len` pixels, or `len` must be zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_set_image(
    pixels: *const u32,
    len: usize,
    width: i32,
    height: i32,
) -> ClipStatus {
    guard("clip_set_image", || {
        // SAFETY: forwarded from the caller.
        unsafe { bridge::set_image(SystemClipboard::new, pixels, len, width, height) }
    })
}

/// Read the clipboard image as packed pixels. Release the result with
/// [`clip_image_free`].
///
/// `*out` is reset to empty before the clipboard is read, so releasing it is
/// safe whatever the status.
///
/// # Safety
///
/// `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_get_image(out: *mut ClipImage) -> ClipStatus {
    guard("clip_get_image", || {
        // SAFETY: forwarded from the caller.
        unsafe { bridge::get_image(SystemClipboard::new, out) }
    })
}

/// Remove all clipboard content.
#[unsafe(no_mangle)]
pub extern "C" fn clip_clear() -> ClipStatus {
    guard("clip_clear", || bridge::clear(SystemClipboard::new))
}

/// Release text returned by [`clip_get_text_utf8`]. Null is ignored.
///
/// # Safety
///
/// `text` must be null or point to a value filled in by this library that has
/// not been released yet. It is reset to empty afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_text8_free(text: *mut ClipText8) {
    // SAFETY: forwarded from the caller.
    if let Some(text) = unsafe { text.as_mut() } {
        // SAFETY: forwarded from the caller.
        unsafe { text.release() };
    }
}

/// Release text returned by [`clip_get_text_utf16`]. Null is ignored.
///
/// # Safety
///
/// `text` must be null or point to a value filled in by this library that has
/// not been released yet. It is reset to empty afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_text16_free(text: *mut ClipText16) {
    // SAFETY: forwarded from the caller.
    if let Some(text) = unsafe { text.as_mut() } {
        // SAFETY: forwarded from the caller.
        unsafe { text.release() };
    }
}

/// Release pixels returned by [`clip_get_image`]. Null is ignored.
///
/// # Safety
///
/// `image` must be null or point to a value filled in by this library that
/// has not been released yet. It is reset to empty afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clip_image_free(image: *mut ClipImage) {
    // SAFETY: forwarded from the caller.
    if let Some(image) = unsafe { image.as_mut() } {
        // SAFETY: forwarded from the caller.
        unsafe { image.release() };
    }
}
