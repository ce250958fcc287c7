//! Text transcoding across the runtime/native string boundary.
//!
//! Managed runtimes hand strings over as UTF-16 code units, C callers as UTF-8
//! bytes. Both are length-delimited, so interior NUL characters survive.

use crate::sys::ClipboardBackend;
use crate::{ClipboardError, Result};

/// Encode a string as UTF-16 code units.
#[must_use]
pub fn encode_utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decode UTF-16 code units into a string.
///
/// # Errors
///
/// Returns [`ClipboardError::InvalidText`] on an unpaired surrogate.
pub fn decode_utf16(units: &[u16]) -> Result<String> {
    String::from_utf16(units).map_err(|e| ClipboardError::InvalidText(e.to_string()))
}

/// Decode UTF-8 bytes into a string.
///
/// # Errors
///
/// Returns [`ClipboardError::InvalidText`] if `bytes` is not valid UTF-8.
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ClipboardError::InvalidText(e.to_string()))
}

/// Write `text` to `backend` verbatim.
///
/// # Errors
///
/// Backend failures are passed through.
pub fn set_text<B>(backend: &mut B, text: &str) -> Result<()>
where
    B: ClipboardBackend + ?Sized,
{
    backend.set_text(text)
}

/// Read the current text from `backend`.
///
/// # Errors
///
/// Returns [`ClipboardError::NoTextAvailable`] if the backend holds no text.
pub fn get_text<B>(backend: &mut B) -> Result<String>
where
    B: ClipboardBackend + ?Sized,
{
    backend.get_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_round_trip() {
        for text in ["", "plain", "naïve café", "日本語", "emoji 🦀 crab", "nul\0inside"] {
            assert_eq!(decode_utf16(&encode_utf16(text)).unwrap(), text);
        }
    }

    #[test]
    fn surrogate_pairs_are_two_units() {
        assert_eq!(encode_utf16("🦀"), vec![0xD83E, 0xDD80]);
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        assert!(matches!(
            decode_utf16(&[0x0061, 0xD800]),
            Err(ClipboardError::InvalidText(_))
        ));
    }

    #[test]
    fn utf8_decoding() {
        assert_eq!(decode_utf8("héllo".as_bytes()).unwrap(), "héllo");
        assert_eq!(decode_utf8(&[]).unwrap(), "");
        assert!(matches!(
            decode_utf8(&[0xFF, 0xFE]),
            Err(ClipboardError::InvalidText(_))
        ));
    }
}
