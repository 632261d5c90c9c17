// Advance widths of the base-14 Helvetica faces, so builtin-font text can be
// centred and right aligned. Widths are in 1/1000 em (Adobe AFM).

use crate::theme::MM_PER_PT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Printable ASCII, 0x20 through 0x7E
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Width used for characters outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(style: FontStyle, ch: char) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in points at `size` points.
pub fn text_width_pt(text: &str, style: FontStyle, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| glyph_width(style, ch) as u32).sum();
    units as f32 * size / 1000.0
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width_mm(text: &str, style: FontStyle, size: f32) -> f32 {
    text_width_pt(text, style, size) * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        // "Home" in Helvetica-Bold: 722 + 611 + 889 + 556
        assert!((text_width_pt("Home", FontStyle::Bold, 1000.0) - 2778.0).abs() < 1e-3);
        assert!((text_width_pt("il", FontStyle::Regular, 10.0) - 4.44).abs() < 1e-3);
        assert_eq!(text_width_pt("", FontStyle::Regular, 12.0), 0.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = text_width_mm("Summary", FontStyle::Regular, 34.0);
        let bold = text_width_mm("Summary", FontStyle::Bold, 34.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_digits_are_tabular() {
        let a = text_width_pt("2025", FontStyle::Bold, 12.0);
        let b = text_width_pt("1999", FontStyle::Bold, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        assert_eq!(
            text_width_pt("é", FontStyle::Regular, 1000.0),
            FALLBACK_WIDTH as f32
        );
    }
}
