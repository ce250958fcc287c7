//! Backend-generic halves of the exported functions.
//!
//! Each `clip_*` export is one call into this module with
//! `SystemClipboard::new` as the opener. Arguments are validated and
//! out-pointers reset before the opener runs, so bad input never opens the
//! clipboard.

use std::slice;

use clipbridge_clipboard::{ClipboardBackend, NativeImage, marshal, text};

use crate::{ClipImage, ClipStatus, ClipText8, ClipText16};

/// View `(ptr, len)` as a slice. A null pointer is only accepted with `len == 0`.
///
/// # Safety
///
/// If `ptr` is non-null it must be valid for reads of `len` elements, properly
/// aligned, and not mutated for the lifetime `'a`.
pub unsafe fn borrow_slice<'a, T>(ptr: *const T, len: usize) -> Result<&'a [T], ClipStatus> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(ClipStatus::NullPointer);
    }
    // SAFETY: non-null and valid for `len` reads per the caller contract.
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Decode a UTF-8 argument.
///
/// # Safety
///
/// See [`borrow_slice`].
pub unsafe fn utf8_arg(ptr: *const u8, len: usize) -> Result<String, ClipStatus> {
    // SAFETY: forwarded from the caller.
    let bytes = unsafe { borrow_slice(ptr, len) }?;
    Ok(text::decode_utf8(bytes)?)
}

/// Decode a UTF-16 argument.
///
/// # Safety
///
/// See [`borrow_slice`].
pub unsafe fn utf16_arg(ptr: *const u16, len: usize) -> Result<String, ClipStatus> {
    // SAFETY: forwarded from the caller.
    let units = unsafe { borrow_slice(ptr, len) }?;
    Ok(text::decode_utf16(units)?)
}

/// Validate image arguments and describe the pixels as a native image.
///
/// # Safety
///
/// See [`borrow_slice`]; the returned image borrows `pixels`.
pub unsafe fn image_arg<'a>(
    pixels: *const u32,
    len: usize,
    width: i32,
    height: i32,
) -> Result<NativeImage<'a>, ClipStatus> {
    let dimensions = usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .filter(|&(w, h)| w > 0 && h > 0);
    let Some((width, height)) = dimensions else {
        return Err(ClipStatus::InvalidDimensions);
    };
    // SAFETY: forwarded from the caller.
    let pixels = unsafe { borrow_slice(pixels, len) }?;
    Ok(marshal::to_native(pixels, width, height)?)
}

/// Write `value` through a caller-supplied out-pointer.
///
/// # Safety
///
/// If `out` is non-null it must be valid for writes and properly aligned.
pub unsafe fn write_out<T>(out: *mut T, value: T) -> Result<(), ClipStatus> {
    if out.is_null() {
        return Err(ClipStatus::NullPointer);
    }
    // SAFETY: non-null and writable per the caller contract.
    unsafe { out.write(value) };
    Ok(())
}

/// Write UTF-8 text to the backend returned by `open`.
///
/// # Safety
///
/// See [`borrow_slice`].
pub unsafe fn set_text_utf8<B, F>(open: F, ptr: *const u8, len: usize) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    // SAFETY: forwarded from the caller.
    let value = unsafe { utf8_arg(ptr, len) }?;
    Ok(text::set_text(&mut open()?, &value)?)
}

/// Write UTF-16 text to the backend returned by `open`.
///
/// # Safety
///
/// See [`borrow_slice`].
pub unsafe fn set_text_utf16<B, F>(open: F, ptr: *const u16, len: usize) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    // SAFETY: forwarded from the caller.
    let value = unsafe { utf16_arg(ptr, len) }?;
    Ok(text::set_text(&mut open()?, &value)?)
}

/// Read text as an owned UTF-8 buffer into `out`.
///
/// `out` is reset to empty first, so it is safe to release on any status.
///
/// # Safety
///
/// See [`write_out`].
pub unsafe fn get_text_utf8<B, F>(open: F, out: *mut ClipText8) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    // SAFETY: forwarded from the caller.
    unsafe { write_out(out, ClipText8::empty()) }?;
    let value = text::get_text(&mut open()?)?;
    // SAFETY: forwarded from the caller.
    unsafe { write_out(out, ClipText8::from_string(value)) }
}

/// Read text as an owned UTF-16 buffer into `out`.
///
/// `out` is reset to empty first, so it is safe to release on any status.
///
/// # Safety
///
/// See [`write_out`].
pub unsafe fn get_text_utf16<B, F>(open: F, out: *mut ClipText16) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    // SAFETY: forwarded from the caller.
    unsafe { write_out(out, ClipText16::empty()) }?;
    let value = text::get_text(&mut open()?)?;
    // SAFETY: forwarded from the caller.
    unsafe { write_out(out, ClipText16::from_units(text::encode_utf16(&value))) }
}

/// Validate packed pixels and write them to the backend returned by `open`.
///
/// # Safety
///
/// See [`borrow_slice`].
pub unsafe fn set_image<B, F>(
    open: F,
    pixels: *const u32,
    len: usize,
    width: i32,
    height: i32,
) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    // SAFETY: forwarded from the caller.
    let image = unsafe { image_arg(pixels, len, width, height) }?;
    Ok(open()?.set_image(image)?)
}

/// Read the current image into `out` as an owned pixel buffer.
///
/// `out` is reset to empty first, so it is safe to release on any status.
///
/// # Safety
///
/// See [`write_out`].
pub unsafe fn get_image<B, F>(open: F, out: *mut ClipImage) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    // SAFETY: forwarded from the caller.
    unsafe { write_out(out, ClipImage::empty()) }?;
    let image = ClipImage::from_pixels(marshal::get_image(&mut open()?)?)?;
    // SAFETY: forwarded from the caller.
    unsafe { write_out(out, image) }
}

/// Remove all content from the backend returned by `open`.
///
/// # Errors
///
/// Returns the status of any clipboard failure.
pub fn clear<B, F>(open: F) -> Result<(), ClipStatus>
where
    B: ClipboardBackend,
    F: FnOnce() -> clipbridge_clipboard::Result<B>,
{
    Ok(open()?.clear()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn null_with_zero_length_is_empty() {
        // SAFETY: zero-length input never dereferences the pointer.
        let slice = unsafe { borrow_slice::<u32>(ptr::null(), 0) }.unwrap();
        assert!(slice.is_empty());
    }

    #[test]
    fn null_with_length_is_rejected() {
        // SAFETY: null is checked before any read.
        let result = unsafe { borrow_slice::<u8>(ptr::null(), 3) };
        assert_eq!(result.unwrap_err(), ClipStatus::NullPointer);
    }

    #[test]
    fn image_dimensions_are_validated_first() {
        for (width, height) in [(0, 1), (1, 0), (-3, 2), (2, -1)] {
            // SAFETY: dimensions are rejected before the null pointer is read.
            let result = unsafe { image_arg(ptr::null(), 4, width, height) };
            assert_eq!(result.unwrap_err(), ClipStatus::InvalidDimensions);
        }
    }

    #[test]
    fn image_length_mismatch() {
        let pixels = [1u32, 2, 3];
        // SAFETY: `pixels` is valid for three reads.
        let result = unsafe { image_arg(pixels.as_ptr(), pixels.len(), 2, 2) };
        assert_eq!(result.unwrap_err(), ClipStatus::InvalidBufferSize);
    }

    #[test]
    fn null_out_pointer_is_rejected() {
        // SAFETY: null is checked before writing.
        let result = unsafe { write_out::<i32>(ptr::null_mut(), 7) };
        assert_eq!(result, Err(ClipStatus::NullPointer));
    }

    #[test]
    fn invalid_utf16_argument() {
        let units = [0xDC00u16];
        // SAFETY: `units` is valid for one read.
        let result = unsafe { utf16_arg(units.as_ptr(), units.len()) };
        assert_eq!(result.unwrap_err(), ClipStatus::InvalidText);
    }
}
