use std::ffi::CStr;

use clipbridge_clipboard::ClipboardError;

/// Result code returned by every exported function.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipStatus {
    /// The call succeeded.
    Ok = 0,
    /// The clipboard holds no text.
    NoTextAvailable = 1,
    /// The clipboard holds no image.
    NoImageAvailable = 2,
    /// The pixel count does not match `width * height`.
    InvalidBufferSize = 3,
    /// Width or height is not positive or too large.
    InvalidDimensions = 4,
    /// The clipboard image is not packed 32-bit pixels.
    UnsupportedFormat = 5,
    /// Text is not valid UTF-8 or UTF-16.
    InvalidText = 6,
    /// The system clipboard could not be accessed.
    ClipboardAccess = 7,
    /// A required pointer was null.
    NullPointer = 8,
    /// The call panicked; nothing was written.
    Panic = 9,
}

impl ClipStatus {
    const ALL: [Self; 10] = [
        Self::Ok,
        Self::NoTextAvailable,
        Self::NoImageAvailable,
        Self::InvalidBufferSize,
        Self::InvalidDimensions,
        Self::UnsupportedFormat,
        Self::InvalidText,
        Self::ClipboardAccess,
        Self::NullPointer,
        Self::Panic,
    ];

    /// Look up a status by its numeric code.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| *status as i32 == code)
    }

    /// Static, NUL-terminated description of the status.
    #[must_use]
    pub const fn message(self) -> &'static CStr {
        match self {
            Self::Ok => c"ok",
            Self::NoTextAvailable => c"no text available on the clipboard",
            Self::NoImageAvailable => c"no image available on the clipboard",
            Self::InvalidBufferSize => c"pixel count does not match width * height",
            Self::InvalidDimensions => c"width and height must be positive and addressable",
            Self::UnsupportedFormat => c"clipboard image is not packed 32-bit pixels",
            Self::InvalidText => c"text is not valid unicode",
            Self::ClipboardAccess => c"clipboard access failed",
            Self::NullPointer => c"required pointer was null",
            Self::Panic => c"internal panic",
        }
    }
}

impl From<ClipboardError> for ClipStatus {
    fn from(error: ClipboardError) -> Self {
        match error {
            ClipboardError::NoTextAvailable => Self::NoTextAvailable,
            ClipboardError::NoImageAvailable => Self::NoImageAvailable,
            ClipboardError::InvalidBufferSize { .. } => Self::InvalidBufferSize,
            ClipboardError::InvalidDimensions { .. } => Self::InvalidDimensions,
            ClipboardError::UnsupportedFormat(_) => Self::UnsupportedFormat,
            ClipboardError::InvalidText(_) => Self::InvalidText,
            ClipboardError::ClipboardAccess(_) => Self::ClipboardAccess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        for (code, status) in ClipStatus::ALL.into_iter().enumerate() {
            assert_eq!(status as i32, i32::try_from(code).unwrap());
            assert_eq!(ClipStatus::from_code(status as i32), Some(status));
        }
        assert_eq!(ClipStatus::from_code(-1), None);
        assert_eq!(ClipStatus::from_code(10), None);
    }

    #[test]
    fn errors_map_to_statuses() {
        assert_eq!(
            ClipStatus::from(ClipboardError::InvalidBufferSize {
                expected: 6,
                actual: 5
            }),
            ClipStatus::InvalidBufferSize
        );
        assert_eq!(
            ClipStatus::from(ClipboardError::ClipboardAccess("locked".into())),
            ClipStatus::ClipboardAccess
        );
        assert_eq!(
            ClipStatus::from(ClipboardError::NoImageAvailable),
            ClipStatus::NoImageAvailable
        );
    }

    #[test]
    fn dimension_message_covers_overflow() {
        assert_eq!(
            ClipStatus::from(ClipboardError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            }),
            ClipStatus::InvalidDimensions
        );
        assert_eq!(
            ClipStatus::InvalidDimensions.message().to_str().unwrap(),
            "width and height must be positive and addressable"
        );
    }

    #[test]
    fn every_status_has_a_message() {
        for status in ClipStatus::ALL {
            assert!(!status.message().to_bytes().is_empty());
        }
    }
}
