//! Face number labels: text and texture pixels.
//!
//! Labels are drawn as white glyphs on a transparent square so the material
//! tint decides their final color. A 5x7 bitmap font covers the digits.

use crate::constants::label_constants::{
    LABEL_GLYPH_HEIGHT_RATIO, LABEL_UNDERLINE_THICKNESS, LABEL_UNDERLINE_WIDTH_PER_CHAR,
    LABEL_UNDERLINE_Y_RATIO,
};

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

// One byte per row, the 5 low bits are the columns (MSB = leftmost)
const DIGIT_GLYPHS: [[u8; GLYPH_ROWS as usize]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const INK: [u8; 4] = [255, 255, 255, 255];
const CLEAR: [u8; 4] = [255, 255, 255, 0];

/// Text printed on face `index` ("1" to "20").
pub fn label_text(index: usize) -> String {
    (index + 1).to_string()
}

/// 6 and 9 read the same upside down, so numbers ending in them get an underline.
pub fn needs_underline(text: &str) -> bool {
    text.ends_with('6') || text.ends_with('9')
}

/// Square RGBA8 label image, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelTexture {
    size: u32,
    pixels: Vec<u8>,
}

impl LabelTexture {
    pub fn render(text: &str, size: u32) -> Self {
        let mut texture = Self {
            size,
            pixels: CLEAR.repeat((size * size) as usize),
        };

        let digits: Vec<usize> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as usize)
            .collect();
        if digits.is_empty() {
            return texture;
        }

        let cell = ((size as f32 * LABEL_GLYPH_HEIGHT_RATIO) as u32 / GLYPH_ROWS).max(1);
        let glyph_width = GLYPH_COLUMNS * cell;
        let advance = glyph_width + cell;
        let text_width = digits.len() as u32 * advance - cell;
        let left = (size as i64 - text_width as i64) / 2;
        let top = (size as i64 - (GLYPH_ROWS * cell) as i64) / 2;

        for (n, &digit) in digits.iter().enumerate() {
            let origin_x = left + (n as u32 * advance) as i64;
            for (row, bits) in DIGIT_GLYPHS[digit].iter().enumerate() {
                for column in 0..GLYPH_COLUMNS {
                    if bits & (1 << (GLYPH_COLUMNS - 1 - column)) == 0 {
                        continue;
                    }
                    let x = origin_x + (column * cell) as i64;
                    let y = top + (row as u32 * cell) as i64;
                    texture.fill_rect(x, y, cell as i64, cell as i64);
                }
            }
        }

        if needs_underline(text) {
            let center_y = (size as f32 * LABEL_UNDERLINE_Y_RATIO) as i64;
            let width = (size as f32 * LABEL_UNDERLINE_WIDTH_PER_CHAR * text.len() as f32) as i64;
            let thickness = LABEL_UNDERLINE_THICKNESS as i64;
            texture.fill_rect(
                size as i64 / 2 - width / 2,
                center_y - thickness / 2,
                width,
                thickness,
            );
        }

        texture
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.size || y >= self.size {
            return 0;
        }
        self.pixels[((y * self.size + x) * 4 + 3) as usize]
    }

    fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64) {
        let size = self.size as i64;
        let (x0, x1) = (x.clamp(0, size), (x + width).clamp(0, size));
        let (y0, y1) = (y.clamp(0, size), (y + height).clamp(0, size));
        for py in y0..y1 {
            for px in x0..x1 {
                let offset = ((py * size + px) * 4) as usize;
                self.pixels[offset..offset + 4].copy_from_slice(&INK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn underline_probe(size: u32) -> (u32, u32) {
        (size / 2, (size as f32 * LABEL_UNDERLINE_Y_RATIO) as u32)
    }

    #[test]
    fn labels_count_from_one() {
        assert_eq!(label_text(0), "1");
        assert_eq!(label_text(19), "20");
    }

    #[test]
    fn six_and_nine_are_underlined() {
        for text in ["6", "9", "16", "19"] {
            assert!(needs_underline(text), "{text}");
        }
        for text in ["1", "8", "10", "20"] {
            assert!(!needs_underline(text), "{text}");
        }
    }

    #[test]
    fn underline_is_drawn_only_when_needed() {
        let (x, y) = underline_probe(128);
        assert_eq!(LabelTexture::render("6", 128).alpha_at(x, y), 255);
        assert_eq!(LabelTexture::render("19", 128).alpha_at(x, y), 255);
        assert_eq!(LabelTexture::render("8", 128).alpha_at(x, y), 0);
    }

    #[test]
    fn glyphs_are_centered_and_two_digits_fill_both_halves() {
        let size = 128;
        let texture = LabelTexture::render("20", size);
        assert_eq!(texture.pixels().len(), (size * size * 4) as usize);

        let column_has_ink = |x: u32| (0..size).any(|y| texture.alpha_at(x, y) == 255);
        assert!((0..size / 2).any(|x| column_has_ink(x)));
        assert!((size / 2..size).any(|x| column_has_ink(x)));
        // Corners stay transparent
        assert_eq!(texture.alpha_at(0, 0), 0);
        assert_eq!(texture.alpha_at(size - 1, size - 1), 0);
    }

    #[test]
    fn non_digits_render_an_empty_texture() {
        let texture = LabelTexture::render("", 32);
        assert!(texture.pixels().chunks(4).all(|p| p[3] == 0));
    }
}
