use crate::canvas::Canvas;
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets;

pub fn paint(canvas: &Canvas, year: i32) {
    widgets::background(canvas);

    let cx = PAGE_WIDTH_MM / 2.0;
    let cy = PAGE_HEIGHT_MM / 2.0;

    canvas.text_centered(&year.to_string(), FontStyle::Bold, 72.0, cx, cy - 5.0, LABEL_COLOR);
    canvas.text_centered("PLANNER", FontStyle::Regular, 24.0, cx, cy - 20.0, SECONDARY_LABEL);

    // Accent rule in the January colour
    canvas.line(cx - 20.0, cy - 30.0, cx + 20.0, cy - 30.0, MONTH_COLORS[0], 1.5);
}
