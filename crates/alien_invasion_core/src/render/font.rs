//! 4x5 bitmap glyphs, one byte per row with the pixels in the high nibble.

pub const GLYPH_WIDTH: u32 = 4;
pub const GLYPH_HEIGHT: u32 = 5;

const DIGITS: [[u8; 5]; 10] = [
    [0xF0, 0x90, 0x90, 0x90, 0xF0], // 0
    [0x20, 0x60, 0x20, 0x20, 0x70], // 1
    [0xF0, 0x10, 0xF0, 0x80, 0xF0], // 2
    [0xF0, 0x10, 0xF0, 0x10, 0xF0], // 3
    [0x90, 0x90, 0xF0, 0x10, 0x10], // 4
    [0xF0, 0x80, 0xF0, 0x10, 0xF0], // 5
    [0xF0, 0x80, 0xF0, 0x90, 0xF0], // 6
    [0xF0, 0x10, 0x20, 0x40, 0x40], // 7
    [0xF0, 0x90, 0xF0, 0x90, 0xF0], // 8
    [0xF0, 0x90, 0xF0, 0x10, 0xF0], // 9
];

const LETTER_A: [u8; 5] = [0xF0, 0x90, 0xF0, 0x90, 0x90];
const LETTER_L: [u8; 5] = [0x80, 0x80, 0x80, 0x80, 0xF0];
const LETTER_P: [u8; 5] = [0xF0, 0x90, 0xF0, 0x80, 0x80];
const LETTER_Y: [u8; 5] = [0x90, 0x90, 0xF0, 0x20, 0x20];
const COMMA: [u8; 5] = [0x00, 0x00, 0x00, 0x20, 0x40];
const BLANK: [u8; 5] = [0x00; 5];

/// Rows for `ch`; characters without a glyph render blank.
pub fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        d @ '0'..='9' => DIGITS[(d as u8 - b'0') as usize],
        'A' => LETTER_A,
        'L' => LETTER_L,
        'P' => LETTER_P,
        'Y' => LETTER_Y,
        ',' => COMMA,
        _ => BLANK,
    }
}

#[inline]
pub fn glyph_pixel(rows: &[u8; 5], col: u32, row: u32) -> bool {
    (rows[row as usize] >> (7 - col)) & 0x1 == 1
}

/// Horizontal distance from one glyph's origin to the next.
#[inline]
pub fn advance(scale: u32) -> u32 {
    (GLYPH_WIDTH + 1) * scale
}

/// Width in pixels of `text` drawn at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => n * advance(scale) - scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_use_high_nibble() {
        let one = glyph('1');
        assert!(glyph_pixel(&one, 2, 0));
        assert!(!glyph_pixel(&one, 0, 0));
        assert!((0..5).all(|row| one[row] & 0x0F == 0));
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(glyph('p'), glyph('P'));
        assert_eq!(glyph('?'), [0; 5]);
    }

    #[test]
    fn text_width_drops_trailing_gap() {
        assert_eq!(text_width("", 6), 0);
        assert_eq!(text_width("0", 6), 24);
        assert_eq!(text_width("PLAY", 6), 4 * 30 - 6);
    }
}
