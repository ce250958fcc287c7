//! Conversion between packed pixel buffers and native clipboard images.
//!
//! A pixel buffer is a row-major slice of `u32`, one packed pixel per element.
//! Its native counterpart is the little-endian byte image of that slice plus
//! an [`ImageFormat::argb32`] descriptor. Conversion is a word-for-word copy in
//! both directions; the descriptor documents where the channels are but is
//! never used to reorder them.

use std::borrow::Cow;

use crate::sys::ClipboardBackend;
use crate::{ClipboardError, ImageFormat, NativeImage, PixelImage, Result};

/// Describe `pixels` as a native `width` x `height` image.
///
/// On little-endian hosts the returned image borrows `pixels` directly;
/// elsewhere the pixels are re-encoded into an owned little-endian buffer.
///
/// # Errors
///
/// Returns [`ClipboardError::InvalidDimensions`] if either dimension is zero or
/// the image is too large to address, and [`ClipboardError::InvalidBufferSize`]
/// if `pixels.len() != width * height`.
pub fn to_native(pixels: &[u32], width: usize, height: usize) -> Result<NativeImage<'_>> {
    let expected = checked_pixel_count(width, height)
        .ok_or(ClipboardError::InvalidDimensions { width, height })?;

    if pixels.len() != expected {
        return Err(ClipboardError::InvalidBufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let bytes = if cfg!(target_endian = "little") {
        Cow::Borrowed(bytemuck::cast_slice(pixels))
    } else {
        Cow::Owned(pixels.iter().flat_map(|pixel| pixel.to_le_bytes()).collect())
    };

    Ok(NativeImage {
        bytes,
        format: ImageFormat::argb32(width, height),
    })
}

/// Copy a native image out into a freshly allocated pixel buffer.
///
/// # Errors
///
/// Returns [`ClipboardError::UnsupportedFormat`] if the descriptor is not the
/// packed 32-bit layout or the bytes are shorter than the descriptor claims,
/// and [`ClipboardError::NoImageAvailable`] for an image with no pixels.
pub fn from_native(image: &NativeImage<'_>) -> Result<PixelImage> {
    let format = &image.format;
    if !format.is_argb32() {
        return Err(ClipboardError::UnsupportedFormat(format!(
            "{} bits per pixel, {} bytes per row for width {}",
            format.bits_per_pixel, format.bytes_per_row, format.width
        )));
    }

    if format.width == 0 || format.height == 0 {
        return Err(ClipboardError::NoImageAvailable);
    }

    let byte_len = format
        .pixel_count()
        .and_then(|count| count.checked_mul(ImageFormat::BYTES_PER_PIXEL))
        .ok_or_else(|| {
            ClipboardError::UnsupportedFormat(format!(
                "{}x{} image is too large",
                format.width, format.height
            ))
        })?;

    let bytes = image.bytes.get(..byte_len).ok_or_else(|| {
        ClipboardError::UnsupportedFormat(format!(
            "expected {byte_len} bytes, got {}",
            image.bytes.len()
        ))
    })?;

    let pixels = bytes
        .chunks_exact(ImageFormat::BYTES_PER_PIXEL)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Ok(PixelImage {
        width: format.width,
        height: format.height,
        pixels,
    })
}

/// Validate `pixels` and write them to `backend` as an image.
///
/// Nothing is written if validation fails.
///
/// # Errors
///
/// See [`to_native`]; backend failures are passed through.
pub fn set_image<B>(backend: &mut B, pixels: &[u32], width: usize, height: usize) -> Result<()>
where
    B: ClipboardBackend + ?Sized,
{
    let image = to_native(pixels, width, height)?;
    backend.set_image(image)
}

/// Read the current image from `backend` as packed pixels.
///
/// # Errors
///
/// Returns [`ClipboardError::NoImageAvailable`] if the backend holds no image,
/// or any error from [`from_native`].
pub fn get_image<B>(backend: &mut B) -> Result<PixelImage>
where
    B: ClipboardBackend + ?Sized,
{
    let image = backend.get_image()?;
    from_native(&image)
}

fn checked_pixel_count(width: usize, height: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    let count = width.checked_mul(height)?;
    count.checked_mul(ImageFormat::BYTES_PER_PIXEL)?;
    Some(count)
}
