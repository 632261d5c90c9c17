// "<year> Tracker": a 12 x 31 grid of quadrant cells, one per date, for
// tracking up to four habits a day.

use crate::calendar;
use crate::canvas::Canvas;
use crate::document::Anchor;
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets::{self, NavTab};

const HABITS: usize = 4;

pub fn paint(canvas: &Canvas, year: i32) {
    widgets::background(canvas);
    widgets::page_title(canvas, &year.to_string(), Some("Tracker"), LABEL_COLOR);
    widgets::side_tabs(canvas, None);
    widgets::nav_tabs(canvas, Some(NavTab::Tracker), LABEL_COLOR);

    let grid_x = MARGIN_MM + 15.0;
    let grid_w = PAGE_WIDTH_MM - MARGIN_MM - grid_x - 10.0;

    paint_legend(canvas, grid_x, PAGE_HEIGHT_MM - 48.0, grid_w);
    paint_grid(canvas, year, grid_x, PAGE_HEIGHT_MM - 58.0, grid_w);
}

/// Tracking key: one shaded quadrant per habit and a line to name it.
fn paint_legend(canvas: &Canvas, x: f32, y: f32, width: f32) {
    let item_w = width / HABITS as f32;
    let box_stroke = SECONDARY_LABEL.over(CARD_COLOR, 0.4);
    let shade = SYSTEM_GRAY_4.over(BACKGROUND_COLOR, 0.3);

    canvas.text("TRACKING KEY", FontStyle::Bold, 8.0, x, y + 8.0, SECONDARY_LABEL);

    for habit in 0..HABITS {
        let lx = x + habit as f32 * item_w;
        let (qx, qy) = quadrant_origin(habit, lx, y + 1.0, 2.0);
        canvas.fill_rect(qx, qy, 2.0, 2.0, shade);

        canvas.stroke_round_rect(lx, y + 1.0, 4.0, 4.0, 0.5, box_stroke, 0.15);
        canvas.line(lx + 2.0, y + 1.0, lx + 2.0, y + 5.0, box_stroke, 0.15);
        canvas.line(lx, y + 3.0, lx + 4.0, y + 3.0, box_stroke, 0.15);

        canvas.line(lx + 6.0, y + 1.0, lx + item_w - 5.0, y + 1.0, SEPARATOR_COLOR, 0.15);
    }
}

/// Bottom-left corner of a habit's quadrant: top-left, top-right,
/// bottom-left, bottom-right.
fn quadrant_origin(habit: usize, x: f32, y: f32, half: f32) -> (f32, f32) {
    let dx = if habit % 2 == 1 { half } else { 0.0 };
    let dy = if habit < 2 { half } else { 0.0 };
    (x + dx, y + dy)
}

fn paint_grid(canvas: &Canvas, year: i32, grid_x: f32, grid_y: f32, grid_w: f32) {
    let grid_h = grid_y - CONTENT_BOTTOM_MM;
    let cell_w = grid_w / 31.0;
    let cell_h = grid_h / 12.0;
    let stroke = SECONDARY_LABEL.over(CARD_COLOR, 0.4);

    for day in 1..=31u32 {
        canvas.text_centered(
            &day.to_string(),
            FontStyle::Bold,
            SMALL_FONT_SIZE,
            grid_x + (day as f32 - 0.5) * cell_w,
            grid_y + 2.0,
            SECONDARY_LABEL,
        );
    }

    for month in 1..=12u32 {
        let my = grid_y - month as f32 * cell_h;
        canvas.text_right(
            &calendar::month_abbr(month),
            FontStyle::Bold,
            9.0,
            grid_x - 2.0,
            my + cell_h / 2.0 - 1.0,
            month_color(month),
        );

        for day in 1..=31u32 {
            // Days past the end of the month get no cell
            let Some(date) = calendar::date(year, month, day) else {
                continue;
            };
            let mx = grid_x + (day - 1) as f32 * cell_w;
            let fill = if calendar::is_weekend(date) {
                WEEKEND_COLOR
            } else {
                CARD_COLOR
            };

            let (x, y, w, h) = (mx + 0.4, my + 0.4, cell_w - 0.8, cell_h - 0.8);
            canvas.fill_round_rect(x, y, w, h, 0.5, fill);
            canvas.stroke_round_rect(x, y, w, h, 0.5, stroke, 0.15);

            // Quadrant split
            canvas.line(mx + cell_w / 2.0, y, mx + cell_w / 2.0, y + h, stroke, 0.15);
            canvas.line(x, my + cell_h / 2.0, x + w, my + cell_h / 2.0, stroke, 0.15);

            canvas.link(mx, my, cell_w, cell_h, Anchor::Day(date));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants_cover_each_corner_once() {
        let corners: Vec<(f32, f32)> = (0..HABITS).map(|h| quadrant_origin(h, 0.0, 0.0, 2.0)).collect();
        assert_eq!(corners, vec![(0.0, 2.0), (2.0, 2.0), (0.0, 0.0), (2.0, 0.0)]);
    }
}
