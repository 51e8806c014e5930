//! Integration tests for pixel buffers.

use retouch_core::image::{Rgba, RgbaImage};
use retouch_core::{Argb, CoreError, PixelBuffer};

#[test]
fn test_buffer_from_decoded_image() {
    let rgba = RgbaImage::from_fn(4, 2, |x, y| Rgba([x as u8 * 10, y as u8 * 20, 5, 255]));
    let buffer = PixelBuffer::from(&rgba);

    assert_eq!(buffer.dimensions(), (4, 2));
    assert_eq!(buffer.get(3, 1), Argb::new(255, 30, 20, 5));
    assert_eq!(buffer.to_rgba_image(), rgba);
}

#[test]
fn test_words_roundtrip_preserves_alpha() {
    let words = [0x0000_0000, 0x7F10_2030, 0xFFFF_FFFF, 0x01FE_FDFC];
    let buffer = PixelBuffer::from_argb_words(2, 2, &words).unwrap();

    assert_eq!(buffer.get(1, 0).a(), 0x7F);
    assert_eq!(buffer.get(1, 1).a(), 0x01);
    assert_eq!(buffer.as_words(), &words);
}

#[test]
fn test_mismatched_word_count_is_rejected() {
    let err = PixelBuffer::from_argb_words(3, 3, &[0; 8]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidPixelCount {
            expected: 9,
            actual: 8,
            ..
        }
    ));
    assert!(err.to_string().contains("3x3"));
}

#[test]
fn test_clone_is_independent() {
    let original = PixelBuffer::filled(2, 2, Argb::BLUE);
    let mut copy = original.clone();
    copy.set(0, 0, Argb::RED);

    assert_eq!(original.get(0, 0), Argb::BLUE);
    assert_ne!(original, copy);
}
