// Drawing surface for a single page: shapes, text, icons and internal links
// on top of a printpdf layer. Coordinates are millimetres from the
// bottom-left corner; line thicknesses and font sizes are points.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;

use crate::document::{Anchor, Destinations};
use crate::error::AppError;
use crate::icons::{raster_size, Icon, IconSet};
use crate::links::{LinkTable, PageLink};
use crate::metrics::{text_width_mm, FontStyle};
use crate::theme::{Swatch, MM_PER_PT};

/// Bezier handle length for a quarter circle of radius 1
const KAPPA: f32 = 0.552_284_8;

/// The two builtin faces every page uses.
pub struct Fonts {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
}

impl Fonts {
    pub fn builtin(doc: &PdfDocumentReference) -> Result<Self, AppError> {
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::PdfError(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::PdfError(e.to_string()))?;
        Ok(Fonts { regular, bold })
    }

    pub fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

pub struct Canvas<'a> {
    layer: PdfLayerReference,
    /// Position of this page in the document
    page: usize,
    fonts: &'a Fonts,
    icons: &'a IconSet,
    destinations: &'a Destinations,
    links: &'a LinkTable,
}

impl<'a> Canvas<'a> {
    pub fn new(
        layer: PdfLayerReference,
        page: usize,
        fonts: &'a Fonts,
        icons: &'a IconSet,
        destinations: &'a Destinations,
        links: &'a LinkTable,
    ) -> Self {
        Canvas {
            layer,
            page,
            fonts,
            icons,
            destinations,
            links,
        }
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    pub fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32, color: Swatch) {
        self.layer.set_fill_color(color.to_color());
        self.add_shape(rect_points(x, y, w, h), PaintMode::Fill);
    }

    pub fn stroke_rect(&self, x: f32, y: f32, w: f32, h: f32, color: Swatch, thickness: f32) {
        self.set_stroke(color, thickness);
        self.add_shape(rect_points(x, y, w, h), PaintMode::Stroke);
    }

    pub fn fill_round_rect(&self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Swatch) {
        self.layer.set_fill_color(color.to_color());
        self.add_shape(round_rect_points(x, y, w, h, radius), PaintMode::Fill);
    }

    pub fn stroke_round_rect(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        color: Swatch,
        thickness: f32,
    ) {
        self.set_stroke(color, thickness);
        self.add_shape(round_rect_points(x, y, w, h, radius), PaintMode::Stroke);
    }

    pub fn fill_circle(&self, cx: f32, cy: f32, radius: f32, color: Swatch) {
        self.layer.set_fill_color(color.to_color());
        self.add_shape(circle_points(cx, cy, radius), PaintMode::Fill);
    }

    pub fn stroke_circle(&self, cx: f32, cy: f32, radius: f32, color: Swatch, thickness: f32) {
        self.set_stroke(color, thickness);
        self.add_shape(circle_points(cx, cy, radius), PaintMode::Stroke);
    }

    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, color: Swatch, thickness: f32) {
        self.set_stroke(color, thickness);
        let points = vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ];
        self.layer.add_line(Line {
            points,
            is_closed: false,
        });
    }

    fn set_stroke(&self, color: Swatch, thickness: f32) {
        self.layer.set_outline_color(color.to_color());
        self.layer.set_outline_thickness(thickness);
    }

    fn add_shape(&self, points: Vec<(Point, bool)>, mode: PaintMode) {
        self.layer.add_polygon(Polygon {
            rings: vec![points],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    // ========================================================================
    // Text
    // ========================================================================

    pub fn text_width(&self, text: &str, style: FontStyle, size: f32) -> f32 {
        text_width_mm(text, style, size)
    }

    pub fn text(&self, text: &str, style: FontStyle, size: f32, x: f32, y: f32, color: Swatch) {
        self.layer.set_fill_color(color.to_color());
        self.layer
            .use_text(text, size, Mm(x), Mm(y), self.fonts.get(style));
    }

    pub fn text_centered(
        &self,
        text: &str,
        style: FontStyle,
        size: f32,
        center_x: f32,
        y: f32,
        color: Swatch,
    ) {
        let width = self.text_width(text, style, size);
        self.text(text, style, size, center_x - width / 2.0, y, color);
    }

    pub fn text_right(
        &self,
        text: &str,
        style: FontStyle,
        size: f32,
        right_x: f32,
        y: f32,
        color: Swatch,
    ) {
        let width = self.text_width(text, style, size);
        self.text(text, style, size, right_x - width, y, color);
    }

    /// Text running bottom-to-top, centred on `center_y`, with its baseline
    /// at `baseline_x`.
    pub fn text_vertical(
        &self,
        text: &str,
        style: FontStyle,
        size: f32,
        baseline_x: f32,
        center_y: f32,
        color: Swatch,
    ) {
        let font = self.fonts.get(style);
        let width = self.text_width(text, style, size);

        self.layer.set_fill_color(color.to_color());
        self.layer.begin_text_section();
        self.layer.set_font(font, size);
        self.layer.set_text_matrix(TextMatrix::TranslateRotate(
            Mm(baseline_x).into(),
            Mm(center_y - width / 2.0).into(),
            90.0,
        ));
        self.layer.write_text(text, font);
        self.layer.end_text_section();
    }

    // ========================================================================
    // Icons & Links
    // ========================================================================

    /// Draw `icon` as a `size` mm square with its bottom-left at (x, y),
    /// tinted `color` over a solid `backdrop`. Missing icons draw nothing.
    pub fn icon(&self, icon: Icon, x: f32, y: f32, size: f32, color: Swatch, backdrop: Swatch) {
        let Some(mask) = self.icons.mask(icon, raster_size(size)) else {
            return;
        };

        let rgb_image = mask.composite(color, backdrop);
        let (width, height) = rgb_image.dimensions();
        let raw_pixels = rgb_image.into_raw();

        let image = Image::from(ImageXObject {
            width: Px(width as usize),
            height: Px(height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: raw_pixels,
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });

        // DPI = pixels / inches
        let dpi = (width as f32) / (size / 25.4);

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(y)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    /// Make the rectangle at (x, y) a link to `anchor`. Anchors that are not
    /// part of this document are ignored.
    pub fn link(&self, x: f32, y: f32, w: f32, h: f32, anchor: Anchor) {
        let Some(target) = self.destinations.page_of(&anchor) else {
            tracing::trace!("No page for anchor {}, link skipped", anchor);
            return;
        };

        let pt = |mm: f32| mm / MM_PER_PT;
        self.links.push(PageLink {
            page: self.page,
            rect: [pt(x), pt(y), pt(x + w), pt(y + h)],
            target,
        });
    }
}

// ============================================================================
// Outlines
// ============================================================================

fn point(x: f32, y: f32, next_is_handle: bool) -> (Point, bool) {
    (Point::new(Mm(x), Mm(y)), next_is_handle)
}

fn rect_points(x: f32, y: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
    vec![
        point(x, y, false),
        point(x + w, y, false),
        point(x + w, y + h, false),
        point(x, y + h, false),
    ]
}

/// Rounded rectangle outline, counter-clockwise from the bottom edge. The
/// radius is clamped to half the shorter side.
fn round_rect_points(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Vec<(Point, bool)> {
    let r = radius.min(w.abs() / 2.0).min(h.abs() / 2.0);
    if r <= 0.0 {
        return rect_points(x, y, w, h);
    }
    let k = r * KAPPA;
    let (x2, y2) = (x + w, y + h);

    vec![
        point(x + r, y, false),
        // bottom-right corner
        point(x2 - r, y, true),
        point(x2 - r + k, y, true),
        point(x2, y + r - k, false),
        point(x2, y + r, false),
        // top-right corner
        point(x2, y2 - r, true),
        point(x2, y2 - r + k, true),
        point(x2 - r + k, y2, false),
        point(x2 - r, y2, false),
        // top-left corner
        point(x + r, y2, true),
        point(x + r - k, y2, true),
        point(x, y2 - r + k, false),
        point(x, y2 - r, false),
        // bottom-left corner
        point(x, y + r, true),
        point(x, y + r - k, true),
        point(x + r - k, y, false),
        point(x + r, y, false),
    ]
}

/// Circle as four cubic arcs, counter-clockwise from 3 o'clock.
fn circle_points(cx: f32, cy: f32, r: f32) -> Vec<(Point, bool)> {
    let k = r * KAPPA;
    vec![
        point(cx + r, cy, true),
        point(cx + r, cy + k, true),
        point(cx + k, cy + r, false),
        point(cx, cy + r, true),
        point(cx - k, cy + r, true),
        point(cx - r, cy + k, false),
        point(cx - r, cy, true),
        point(cx - r, cy - k, true),
        point(cx - k, cy - r, false),
        point(cx, cy - r, true),
        point(cx + k, cy - r, true),
        point(cx + r, cy - k, false),
        point(cx + r, cy, false),
    ]
}
