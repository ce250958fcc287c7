use crate::{ClipboardError, NativeImage, Result};

use super::ClipboardBackend;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Content {
    #[default]
    Empty,
    Text(String),
    Image(NativeImage<'static>),
}

/// An in-process clipboard holding at most one payload.
///
/// Writing text drops any stored image and writing an image drops any stored
/// text, matching a system clipboard that was last written by one producer.
/// Images are copied on write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: Content,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content == Content::Empty
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        match &self.content {
            Content::Text(text) => Ok(text.clone()),
            _ => Err(ClipboardError::NoTextAvailable),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        log::debug!("storing {} bytes of text in memory clipboard", text.len());
        self.content = Content::Text(text.to_owned());
        Ok(())
    }

    fn get_image(&mut self) -> Result<NativeImage<'static>> {
        match &self.content {
            Content::Image(image) => Ok(image.clone()),
            _ => Err(ClipboardError::NoImageAvailable),
        }
    }

    fn set_image(&mut self, image: NativeImage<'_>) -> Result<()> {
        log::debug!(
            "storing {}x{} image in memory clipboard",
            image.format.width,
            image.format.height
        );
        self.content = Content::Image(image.into_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.content = Content::Empty;
        Ok(())
    }
}
