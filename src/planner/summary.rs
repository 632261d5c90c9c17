// "<year> Calendar": twelve mini months in a 4 x 3 grid.

use crate::calendar::{self, MonthGrid, WEEKDAY_INITIALS};
use crate::canvas::Canvas;
use crate::document::Anchor;
use crate::layout::split;
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets::{self, NavTab};

const COLUMNS: usize = 4;
const ROWS: usize = 3;
const WEEK_ROW_MM: f32 = 3.8;

pub fn paint(canvas: &Canvas, year: i32) {
    widgets::background(canvas);
    widgets::page_title(canvas, &year.to_string(), Some("Calendar"), LABEL_COLOR);
    widgets::side_tabs(canvas, None);
    widgets::nav_tabs(canvas, Some(NavTab::Calendar), LABEL_COLOR);

    let grid_top = widgets::content_top();
    let grid_w = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let cell_w = grid_w / COLUMNS as f32;
    let cell_h = (grid_top - CONTENT_BOTTOM_MM) / ROWS as f32;

    for month in 1..=12u32 {
        let index = (month - 1) as usize;
        let x = MARGIN_MM + (index % COLUMNS) as f32 * cell_w;
        let y = grid_top - (index / COLUMNS) as f32 * cell_h;
        paint_mini_month(canvas, year, month, x + 5.0, y, cell_w - 10.0);
    }
}

fn paint_mini_month(canvas: &Canvas, year: i32, month: u32, x: f32, top: f32, width: f32) {
    let color = month_color(month);
    let name = calendar::month_name(month);

    canvas.text(name, FontStyle::Bold, 12.0, x, top - 6.0, color);
    let name_w = canvas.text_width(name, FontStyle::Bold, 12.0);
    canvas.link(x, top - 8.0, name_w, 8.0, Anchor::Month(month));

    let header_y = top - 12.0;
    let col_w = width / 7.0;
    let centers: Vec<f32> = split(x, width, 7).into_iter().map(|c| c + col_w / 2.0).collect();

    for (label, cx) in WEEKDAY_INITIALS.iter().zip(&centers) {
        canvas.text_centered(label, FontStyle::Bold, 6.0, *cx, header_y, SYSTEM_GRAY);
    }

    for cell in MonthGrid::new(year, month).cells() {
        let cx = centers[cell.weekday];
        let wy = header_y - 4.5 - cell.week as f32 * WEEK_ROW_MM;
        let day_color = if calendar::is_weekend(cell.date) {
            SYSTEM_GRAY
        } else {
            LABEL_COLOR
        };
        canvas.text_centered(&cell.day.to_string(), FontStyle::Regular, 7.0, cx, wy, day_color);
        canvas.link(cx - 2.0, wy - 1.0, 4.0, 4.0, Anchor::Day(cell.date));
    }
}
