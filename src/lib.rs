//! # Clipbridge
//!
//! Clipboard text and packed-pixel images for callers on the far side of a
//! native boundary, such as a .NET runtime binding through P/Invoke.
//!
//! ## Features
//!
//! - `clipboard` (default): the Rust API, including the image marshaling layer
//!   and the clipboard backends.
//! - `ffi`: the C ABI exports and their owned buffer types.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```rust,no_run
//! use clipbridge::clipboard;
//!
//! clipboard::set_text("copied from Rust")?;
//! assert_eq!(clipboard::get_text()?, "copied from Rust");
//! # Ok::<(), clipboard::ClipboardError>(())
//! ```

#[cfg(feature = "clipboard")]
pub use clipbridge_clipboard as clipboard;

#[cfg(feature = "ffi")]
pub use clipbridge_ffi as ffi;
