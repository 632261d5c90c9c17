// Page geometry, palette and type scale shared by every page painter.

use printpdf::{Color, Rgb};

// ============================================================================
// Page Geometry
// ============================================================================

/// Millimetres per PDF point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// iPad Pro 11" landscape: 2388 x 1668 px @ 264 ppi = 651.27 x 454.91 pt
pub const PAGE_WIDTH_PT: f32 = 651.27;
pub const PAGE_HEIGHT_PT: f32 = 454.91;
pub const PAGE_WIDTH_MM: f32 = PAGE_WIDTH_PT * MM_PER_PT;
pub const PAGE_HEIGHT_MM: f32 = PAGE_HEIGHT_PT * MM_PER_PT;

/// Outer page margin
pub const MARGIN_MM: f32 = 20.0;

/// Baseline of page titles, measured down from the top edge
pub const HEADER_OFFSET_MM: f32 = 22.0;

/// Content area shared by most pages
pub const CONTENT_TOP_OFFSET_MM: f32 = 40.0;
pub const CONTENT_BOTTOM_MM: f32 = 15.0;

/// Corner radius of cards and grouped lists
pub const CARD_RADIUS_MM: f32 = 5.0;

// ============================================================================
// Type Scale (points)
// ============================================================================

pub const TITLE_FONT_SIZE: f32 = 34.0;
pub const SECTION_FONT_SIZE: f32 = 13.0;
pub const TAB_FONT_SIZE: f32 = 10.0;
pub const BODY_FONT_SIZE: f32 = 10.0;
pub const SMALL_FONT_SIZE: f32 = 7.0;

// ============================================================================
// Palette
// ============================================================================

/// An opaque sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const fn hex(rgb: u32) -> Self {
        Swatch {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    pub fn components(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    pub fn to_color(self) -> Color {
        let (r, g, b) = self.components();
        Color::Rgb(Rgb::new(r, g, b, None))
    }

    /// Perceived brightness below 0.6 counts as dark.
    pub fn is_dark(self) -> bool {
        let (r, g, b) = self.components();
        0.299 * r + 0.587 * g + 0.114 * b < 0.6
    }

    /// Paint `self` with the given opacity over `backdrop`.
    pub fn over(self, backdrop: Swatch, alpha: f32) -> Swatch {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8
        };
        Swatch {
            r: mix(self.r, backdrop.r),
            g: mix(self.g, backdrop.g),
            b: mix(self.b, backdrop.b),
        }
    }
}

pub const WHITE: Swatch = Swatch::hex(0xFFFFFF);

pub const SYSTEM_GRAY: Swatch = Swatch::hex(0x8E8E93);
pub const SYSTEM_GRAY_2: Swatch = Swatch::hex(0xAEAEB2);
pub const SYSTEM_GRAY_4: Swatch = Swatch::hex(0xD1D1D6);
pub const LABEL_COLOR: Swatch = Swatch::hex(0x1D1D1F);
pub const SECONDARY_LABEL: Swatch = Swatch::hex(0x6E6E73);
pub const SEPARATOR_COLOR: Swatch = Swatch::hex(0xD2D2D7);

/// Warm cream page background
pub const BACKGROUND_COLOR: Swatch = Swatch::hex(0xE6E3D2);
/// Lighter cream for cards and grouped lists
pub const CARD_COLOR: Swatch = Swatch::hex(0xF2F0E6);
/// Slightly darker cream for weekend cells
pub const WEEKEND_COLOR: Swatch = Swatch::hex(0xEBE8D8);

/// Muted earth-tone accent per month, January first
pub const MONTH_COLORS: [Swatch; 12] = [
    Swatch::hex(0xD48C88), // rose
    Swatch::hex(0xD9A07E), // terracotta
    Swatch::hex(0xA3B18A), // sage
    Swatch::hex(0x84A59D), // teal
    Swatch::hex(0x90A8C3), // steel blue
    Swatch::hex(0xA594B1), // lavender
    Swatch::hex(0x8E7D9E), // dusty purple
    Swatch::hex(0xB5838D), // dusty rose
    Swatch::hex(0xE5989B), // coral
    Swatch::hex(0xDDBEA9), // sand
    Swatch::hex(0xA5A5A5), // gray
    Swatch::hex(0x6B705C), // olive
];

/// Accent colour of a month (1-based). Out-of-range months wrap.
pub fn month_color(month: u32) -> Swatch {
    MONTH_COLORS[(month.saturating_sub(1) % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_unpacks_channels() {
        let swatch = Swatch::hex(0xD48C88);
        assert_eq!((swatch.r, swatch.g, swatch.b), (0xD4, 0x8C, 0x88));
    }

    #[test]
    fn test_dark_detection() {
        assert!(LABEL_COLOR.is_dark());
        assert!(MONTH_COLORS[11].is_dark());
        assert!(!CARD_COLOR.is_dark());
        assert!(!MONTH_COLORS[9].is_dark());
    }

    #[test]
    fn test_over_blends_towards_backdrop() {
        let black = Swatch::hex(0x000000);
        assert_eq!(black.over(WHITE, 1.0), black);
        assert_eq!(black.over(WHITE, 0.0), WHITE);
        let half = black.over(WHITE, 0.5);
        assert_eq!(half.r, 128);
    }

    #[test]
    fn test_page_is_landscape() {
        assert!(PAGE_WIDTH_MM > PAGE_HEIGHT_MM);
        assert!((PAGE_WIDTH_MM - 229.75).abs() < 0.01);
        assert!((PAGE_HEIGHT_MM - 160.48).abs() < 0.01);
    }
}
