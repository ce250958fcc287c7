//! Clipboard reading demo.
#![allow(clippy::cast_possible_truncation)]

use clipbridge_clipboard::ClipboardError;

fn main() {
    println!("Reading clipboard...");
    match clipbridge_clipboard::get_text() {
        Ok(text) => println!("Clipboard text content:\n{text}"),
        Err(ClipboardError::NoTextAvailable) => println!("Clipboard does not contain text."),
        Err(e) => println!("Failed to read text: {e}"),
    }

    match clipbridge_clipboard::get_image() {
        Ok(image) => {
            println!(
                "Clipboard contains image: {}x{} ({} pixels)",
                image.width,
                image.height,
                image.pixels.len()
            );

            let bytes: Vec<u8> = image.pixels.iter().flat_map(|p| p.to_le_bytes()).collect();
            match image::save_buffer(
                "clipboard_preview.png",
                &bytes,
                image.width as u32,
                image.height as u32,
                image::ColorType::Rgba8,
            ) {
                Ok(()) => println!("Image saved to clipboard_preview.png"),
                Err(e) => println!("Failed to save image: {e}"),
            }
        }
        Err(ClipboardError::NoImageAvailable) => println!("Clipboard does not contain image."),
        Err(e) => println!("Failed to read image: {e}"),
    }
}
