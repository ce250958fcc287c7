use thiserror::Error;

/// Errors that can occur when using the clipboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard holds no text.
    #[error("no text available on the clipboard")]
    NoTextAvailable,

    /// The clipboard holds no image.
    #[error("no image available on the clipboard")]
    NoImageAvailable,

    /// The pixel buffer length does not match `width * height`.
    #[error("invalid buffer size: expected {expected} pixels, got {actual}")]
    InvalidBufferSize {
        /// Pixel count implied by the dimensions.
        expected: usize,
        /// Pixel count actually supplied.
        actual: usize,
    },

    /// Width or height is zero, or the image is too large to address.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The clipboard image is not in the packed 32-bit layout.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Text could not be transcoded across the string boundary.
    #[error("invalid text encoding: {0}")]
    InvalidText(String),

    /// The underlying clipboard could not be accessed.
    #[error("clipboard access failed: {0}")]
    ClipboardAccess(String),
}
