// "<year> Summary": six months side by side, one row per day.

use chrono::Datelike;

use crate::calendar::{self, WEEKDAY_INITIALS};
use crate::canvas::Canvas;
use crate::document::Anchor;
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets::{self, NavTab};

const COLUMNS: u32 = 6;

pub fn paint(canvas: &Canvas, year: i32, start_month: u32) {
    widgets::background(canvas);
    widgets::page_title(canvas, &year.to_string(), Some("Summary"), LABEL_COLOR);
    widgets::side_tabs(canvas, None);
    widgets::nav_tabs(canvas, Some(NavTab::Summary), LABEL_COLOR);

    let col_w = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / COLUMNS as f32;
    let top_y = widgets::content_top();
    let row_h = (top_y - CONTENT_BOTTOM_MM - 10.0) / 31.0;

    for i in 0..COLUMNS {
        let month = start_month + i;
        if month > 12 {
            break;
        }
        let x = MARGIN_MM + i as f32 * col_w;
        paint_month_column(canvas, year, month, x, top_y, col_w, row_h);
    }
}

fn paint_month_column(canvas: &Canvas, year: i32, month: u32, x: f32, top_y: f32, col_w: f32, row_h: f32) {
    let color = month_color(month);

    // Month header, links to the month page
    canvas.fill_round_rect(x + 1.0, top_y - 2.0, col_w - 2.0, 7.0, 2.0, CARD_COLOR);
    canvas.text_centered(
        &calendar::month_name(month).to_uppercase(),
        FontStyle::Bold,
        9.0,
        x + col_w / 2.0,
        top_y + 0.5,
        color,
    );
    canvas.link(x + 1.0, top_y - 2.0, col_w - 2.0, 7.0, Anchor::Month(month));

    for day in 1..=31u32 {
        let Some(date) = calendar::date(year, month, day) else {
            continue;
        };
        let y = top_y - 8.0 - (day - 1) as f32 * row_h;
        let weekend = calendar::is_weekend(date);

        let fill = if weekend { WEEKEND_COLOR } else { CARD_COLOR };
        canvas.fill_rect(x + 1.0, y - row_h / 2.0, col_w - 2.0, row_h, fill);
        canvas.line(x + 2.0, y - row_h / 2.0, x + col_w - 2.0, y - row_h / 2.0, SEPARATOR_COLOR, 0.05);

        let number_color = if weekend { SYSTEM_GRAY } else { LABEL_COLOR };
        canvas.text(&day.to_string(), FontStyle::Regular, 6.5, x + 2.5, y - 1.0, number_color);

        let initial = WEEKDAY_INITIALS[date.weekday().num_days_from_monday() as usize];
        canvas.text(initial, FontStyle::Regular, 5.0, x + 6.0, y - 1.0, SYSTEM_GRAY_2);

        canvas.link(x + 1.0, y - row_h / 2.0, col_w - 2.0, row_h, Anchor::Day(date));
    }
}
