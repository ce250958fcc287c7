use std::borrow::Cow;

/// Bit mask and shift locating one channel inside a packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelMask {
    /// Mask selecting the channel bits in place.
    pub mask: u32,
    /// Position of the lowest channel bit.
    pub shift: u32,
}

impl ChannelMask {
    const fn byte(shift: u32) -> Self {
        Self {
            mask: 0xFF << shift,
            shift,
        }
    }

    /// Extract the channel value from a packed pixel.
    #[must_use]
    pub const fn extract(self, pixel: u32) -> u8 {
        ((pixel & self.mask) >> self.shift) as u8
    }
}

/// Layout descriptor for a native image.
///
/// The only layout this crate produces or accepts is [`ImageFormat::argb32`]:
/// 32 bits per pixel, rows packed without padding, one byte per channel with
/// red in the lowest byte and alpha in the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageFormat {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// Bits used by a single pixel.
    pub bits_per_pixel: u32,
    /// Row stride in bytes.
    pub bytes_per_row: usize,
    /// Red channel location.
    pub red: ChannelMask,
    /// Green channel location.
    pub green: ChannelMask,
    /// Blue channel location.
    pub blue: ChannelMask,
    /// Alpha channel location.
    pub alpha: ChannelMask,
}

impl ImageFormat {
    /// Bytes occupied by one packed pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// The packed 32-bit layout for a `width` x `height` image.
    ///
    /// Dimensions are not validated here; see [`crate::marshal::to_native`].
    #[must_use]
    pub const fn argb32(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: 32,
            bytes_per_row: width.saturating_mul(Self::BYTES_PER_PIXEL),
            red: ChannelMask::byte(0),
            green: ChannelMask::byte(8),
            blue: ChannelMask::byte(16),
            alpha: ChannelMask::byte(24),
        }
    }

    /// Returns true if this descriptor is the packed 32-bit layout.
    #[must_use]
    pub fn is_argb32(&self) -> bool {
        *self == Self::argb32(self.width, self.height)
    }

    /// Number of pixels described, or `None` on overflow.
    #[must_use]
    pub const fn pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

/// An image as handed to or received from a clipboard backend.
///
/// On write the bytes usually borrow the caller's pixel buffer. On read they
/// are owned by whoever produced them and must be copied out before the
/// backend call returns to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeImage<'a> {
    /// Raw pixel bytes laid out as described by `format`.
    pub bytes: Cow<'a, [u8]>,
    /// Layout of `bytes`.
    pub format: ImageFormat,
}

impl NativeImage<'_> {
    /// Detach the image from any borrowed buffer.
    #[must_use]
    pub fn into_owned(self) -> NativeImage<'static> {
        NativeImage {
            bytes: Cow::Owned(self.bytes.into_owned()),
            format: self.format,
        }
    }
}

/// Packed pixels read from the clipboard, with their dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelImage {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// Packed pixels, row-major, `width * height` long.
    pub pixels: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb32_descriptor_constants() {
        let format = ImageFormat::argb32(3, 2);
        assert_eq!(format.bits_per_pixel, 32);
        assert_eq!(format.bytes_per_row, 12);
        assert_eq!(format.red, ChannelMask { mask: 0xFF, shift: 0 });
        assert_eq!(format.green, ChannelMask { mask: 0xFF00, shift: 8 });
        assert_eq!(format.blue, ChannelMask { mask: 0xFF_0000, shift: 16 });
        assert_eq!(format.alpha, ChannelMask { mask: 0xFF00_0000, shift: 24 });
        assert!(format.is_argb32());
    }

    #[test]
    fn other_layouts_are_not_argb32() {
        let mut format = ImageFormat::argb32(4, 4);
        format.bytes_per_row = 20;
        assert!(!format.is_argb32());

        let mut format = ImageFormat::argb32(4, 4);
        std::mem::swap(&mut format.red, &mut format.blue);
        assert!(!format.is_argb32());
    }

    #[test]
    fn channel_extraction() {
        let format = ImageFormat::argb32(1, 1);
        let pixel = 0x7F11_2233;
        assert_eq!(format.alpha.extract(pixel), 0x7F);
        assert_eq!(format.blue.extract(pixel), 0x11);
        assert_eq!(format.green.extract(pixel), 0x22);
        assert_eq!(format.red.extract(pixel), 0x33);
    }

    #[test]
    fn pixel_count_overflow() {
        assert_eq!(ImageFormat::argb32(3, 2).pixel_count(), Some(6));
        let format = ImageFormat {
            width: usize::MAX,
            height: 2,
            ..ImageFormat::argb32(1, 1)
        };
        assert_eq!(format.pixel_count(), None);
    }
}
