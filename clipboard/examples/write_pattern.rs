//! Writes a 3x2 test pattern to the clipboard and reads it back.

use clipbridge_clipboard::{ImageFormat, PixelImage};

fn print_channels(image: &PixelImage) {
    let format = ImageFormat::argb32(image.width, image.height);
    for (i, &pixel) in image.pixels.iter().enumerate() {
        println!(
            "  ({}, {}): r={:3} g={:3} b={:3} a={:3}",
            i % image.width,
            i / image.width,
            format.red.extract(pixel),
            format.green.extract(pixel),
            format.blue.extract(pixel),
            format.alpha.extract(pixel),
        );
    }
}

fn main() {
    #[rustfmt::skip]
    let pattern: [u32; 6] = [
        0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF,
        0x7FFF_0000, 0x7F00_FF00, 0x7F00_00FF,
    ];

    if let Err(e) = clipbridge_clipboard::set_image(&pattern, 3, 2) {
        eprintln!("Failed to write image: {e}");
        return;
    }
    println!("Wrote 3x2 pattern to the clipboard.");

    match clipbridge_clipboard::get_image() {
        Ok(image) => {
            let verdict = if image.pixels == pattern { "match" } else { "differ" };
            println!(
                "Read back {}x{} image, pixels {verdict}:",
                image.width, image.height
            );
            print_channels(&image);
        }
        Err(e) => eprintln!("Failed to read image: {e}"),
    }
}
