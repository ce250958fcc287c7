//! Round-trip behavior of the marshaling layer against an in-memory clipboard.

use clipbridge_clipboard::{ClipboardBackend, ClipboardError, MemoryClipboard, marshal, text};
use proptest::prelude::*;

const PATTERN: [u32; 6] = [
    0xFFFF_0000,
    0xFF00_FF00,
    0xFF00_00FF,
    0x7FFF_0000,
    0x7F00_FF00,
    0x7F00_00FF,
];

#[test]
fn three_by_two_pattern_round_trips() {
    let mut clipboard = MemoryClipboard::new();
    marshal::set_image(&mut clipboard, &PATTERN, 3, 2).unwrap();

    let image = marshal::get_image(&mut clipboard).unwrap();
    assert_eq!(image.width, 3);
    assert_eq!(image.height, 2);
    assert_eq!(image.pixels, PATTERN);
}

#[test]
fn single_pixel_round_trips() {
    let mut clipboard = MemoryClipboard::new();
    marshal::set_image(&mut clipboard, &[0x8012_3456], 1, 1).unwrap();

    let image = marshal::get_image(&mut clipboard).unwrap();
    assert_eq!((image.width, image.height), (1, 1));
    assert_eq!(image.pixels, vec![0x8012_3456]);
}

#[test]
fn caller_buffer_is_free_after_set() {
    let mut clipboard = MemoryClipboard::new();
    let mut pixels = PATTERN.to_vec();
    marshal::set_image(&mut clipboard, &pixels, 2, 3).unwrap();
    pixels.fill(0);
    drop(pixels);

    assert_eq!(marshal::get_image(&mut clipboard).unwrap().pixels, PATTERN);
}

#[test]
fn text_round_trips() {
    let mut clipboard = MemoryClipboard::new();
    for s in ["", "hello", "Grüße, 世界", "🦀\u{200d}🔥", "tab\tand\nnewline"] {
        text::set_text(&mut clipboard, s).unwrap();
        assert_eq!(text::get_text(&mut clipboard).unwrap(), s);
    }
}

#[test]
fn get_text_on_cleared_clipboard_fails() {
    let mut clipboard = MemoryClipboard::new();
    text::set_text(&mut clipboard, "stale").unwrap();
    clipboard.clear().unwrap();
    assert_eq!(
        text::get_text(&mut clipboard),
        Err(ClipboardError::NoTextAvailable)
    );
}

#[test]
fn get_text_on_image_only_clipboard_fails() {
    let mut clipboard = MemoryClipboard::new();
    marshal::set_image(&mut clipboard, &PATTERN, 3, 2).unwrap();
    assert_eq!(
        text::get_text(&mut clipboard),
        Err(ClipboardError::NoTextAvailable)
    );
}

#[test]
fn get_image_on_text_only_clipboard_fails() {
    let mut clipboard = MemoryClipboard::new();
    text::set_text(&mut clipboard, "just text").unwrap();
    assert_eq!(
        marshal::get_image(&mut clipboard),
        Err(ClipboardError::NoImageAvailable)
    );
}

#[test]
fn rejected_image_leaves_clipboard_unchanged() {
    let mut clipboard = MemoryClipboard::new();
    text::set_text(&mut clipboard, "keep me").unwrap();

    assert_eq!(
        marshal::set_image(&mut clipboard, &PATTERN, 4, 2),
        Err(ClipboardError::InvalidBufferSize {
            expected: 8,
            actual: 6
        })
    );
    assert_eq!(text::get_text(&mut clipboard).unwrap(), "keep me");
}

#[test]
fn boxed_backend_is_usable() {
    let mut clipboard: Box<dyn ClipboardBackend> = Box::new(MemoryClipboard::new());
    marshal::set_image(&mut clipboard, &PATTERN, 6, 1).unwrap();
    assert_eq!(marshal::get_image(&mut clipboard).unwrap().width, 6);
}

fn image_strategy() -> impl Strategy<Value = (usize, usize, Vec<u32>)> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(width, height)| {
        (
            Just(width),
            Just(height),
            proptest::collection::vec(any::<u32>(), width * height),
        )
    })
}

proptest! {
    #[test]
    fn any_image_round_trips((width, height, pixels) in image_strategy()) {
        let mut clipboard = MemoryClipboard::new();
        marshal::set_image(&mut clipboard, &pixels, width, height).unwrap();

        let image = marshal::get_image(&mut clipboard).unwrap();
        prop_assert_eq!(image.width, width);
        prop_assert_eq!(image.height, height);
        prop_assert_eq!(image.pixels, pixels);
    }

    #[test]
    fn any_text_round_trips(s in any::<String>()) {
        let mut clipboard = MemoryClipboard::new();
        text::set_text(&mut clipboard, &s).unwrap();
        prop_assert_eq!(text::get_text(&mut clipboard).unwrap(), s);
    }

    #[test]
    fn mismatched_length_is_rejected(
        (width, height, mut pixels) in image_strategy(),
        extra in 1usize..4,
    ) {
        pixels.extend(std::iter::repeat_n(0, extra));
        let mut clipboard = MemoryClipboard::new();
        let result = marshal::set_image(&mut clipboard, &pixels, width, height);
        prop_assert_eq!(
            result,
            Err(ClipboardError::InvalidBufferSize {
                expected: width * height,
                actual: width * height + extra,
            })
        );
        prop_assert!(clipboard.is_empty());
    }
}
