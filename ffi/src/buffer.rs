//! Buffers handed across the boundary and released by the caller.
//!
//! Every buffer is a boxed slice leaked into raw parts. The caller reads it in
//! place and returns it through the matching `clip_*_free` function, which
//! rebuilds the box with the same length and drops it.

use std::ptr;

use clipbridge_clipboard::{ClipboardError, PixelImage};

use crate::ClipStatus;

/// UTF-8 text owned by this library. Not NUL-terminated.
#[repr(C)]
#[derive(Debug)]
pub struct ClipText8 {
    /// First byte, or dangling when `len` is zero.
    pub ptr: *mut u8,
    /// Length in bytes.
    pub len: usize,
}

/// UTF-16 text owned by this library. Not NUL-terminated.
#[repr(C)]
#[derive(Debug)]
pub struct ClipText16 {
    /// First code unit, or dangling when `len` is zero.
    pub ptr: *mut u16,
    /// Length in code units.
    pub len: usize,
}

/// Packed 32-bit pixels owned by this library.
#[repr(C)]
#[derive(Debug)]
pub struct ClipImage {
    /// First pixel, row-major.
    pub pixels: *mut u32,
    /// Number of pixels, always `width * height`.
    pub len: usize,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl ClipText8 {
    /// An empty value for out-parameters.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    pub(crate) fn from_string(text: String) -> Self {
        let (ptr, len) = leak(text.into_bytes());
        Self { ptr, len }
    }

    /// Release the buffer.
    ///
    /// # Safety
    ///
    /// `self` must have been produced by this library and not released before.
    pub(crate) unsafe fn release(&mut self) {
        // SAFETY: forwarded from the caller.
        unsafe { reclaim(self.ptr, self.len) };
        *self = Self::empty();
    }
}

impl ClipText16 {
    /// An empty value for out-parameters.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    pub(crate) fn from_units(units: Vec<u16>) -> Self {
        let (ptr, len) = leak(units);
        Self { ptr, len }
    }

    /// Release the buffer.
    ///
    /// # Safety
    ///
    /// `self` must have been produced by this library and not released before.
    pub(crate) unsafe fn release(&mut self) {
        // SAFETY: forwarded from the caller.
        unsafe { reclaim(self.ptr, self.len) };
        *self = Self::empty();
    }
}

impl ClipImage {
    /// An empty value for out-parameters.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pixels: ptr::null_mut(),
            len: 0,
            width: 0,
            height: 0,
        }
    }

    pub(crate) fn from_pixels(image: PixelImage) -> Result<Self, ClipStatus> {
        let too_large = || {
            ClipStatus::from(ClipboardError::UnsupportedFormat(format!(
                "{}x{} image does not fit 32-bit dimensions",
                image.width, image.height
            )))
        };
        let width = i32::try_from(image.width).map_err(|_| too_large())?;
        let height = i32::try_from(image.height).map_err(|_| too_large())?;
        let (pixels, len) = leak(image.pixels);
        Ok(Self {
            pixels,
            len,
            width,
            height,
        })
    }

    /// Release the pixels.
    ///
    /// # Safety
    ///
    /// `self` must have been produced by this library and not released before.
    pub(crate) unsafe fn release(&mut self) {
        // SAFETY: forwarded from the caller.
        unsafe { reclaim(self.pixels, self.len) };
        *self = Self::empty();
    }
}

fn leak<T>(items: Vec<T>) -> (*mut T, usize) {
    let boxed = items.into_boxed_slice();
    let len = boxed.len();
    (Box::into_raw(boxed).cast::<T>(), len)
}

/// # Safety
///
/// `ptr` is null, or `(ptr, len)` came from [`leak`] and was not reclaimed yet.
unsafe fn reclaim<T>(ptr: *mut T, len: usize) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: rebuilds the boxed slice leaked by `leak` with its original length.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_buffer_holds_bytes() {
        let mut text = ClipText8::from_string("héllo".to_owned());
        assert_eq!(text.len, 6);
        // SAFETY: produced above with `len` bytes.
        let bytes = unsafe { std::slice::from_raw_parts(text.ptr, text.len) };
        assert_eq!(bytes, "héllo".as_bytes());
        // SAFETY: produced above, released once.
        unsafe { text.release() };
        assert!(text.ptr.is_null());
        assert_eq!(text.len, 0);
    }

    #[test]
    fn empty_text_is_releasable() {
        let mut text = ClipText16::from_units(Vec::new());
        assert_eq!(text.len, 0);
        assert!(!text.ptr.is_null());
        // SAFETY: produced above, released once.
        unsafe { text.release() };
    }

    #[test]
    fn release_of_empty_value_is_a_no_op() {
        let mut image = ClipImage::empty();
        // SAFETY: null buffers are ignored.
        unsafe { image.release() };
        assert!(image.pixels.is_null());
    }

    #[test]
    fn oversized_image_is_rejected() {
        let image = PixelImage {
            width: usize::try_from(i32::MAX).unwrap() + 1,
            height: 1,
            pixels: Vec::new(),
        };
        assert_eq!(
            ClipImage::from_pixels(image).unwrap_err(),
            ClipStatus::UnsupportedFormat
        );
    }
}
