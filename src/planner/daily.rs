// Day page: To Do, Priorities + Notes, and an hourly Schedule.

use chrono::{Datelike, NaiveDate};

use crate::calendar;
use crate::canvas::Canvas;
use crate::icons::Icon;
use crate::layout::{Frame, RowKind, RowLayout};
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets;

const TODO_ROWS: usize = 14;
const PRIORITY_ROWS: usize = 3;
const PRIORITY_HEIGHT_MM: f32 = 40.0;
const LIST_PADDING_MM: f32 = 4.0;
const FIRST_HOUR: u32 = 6;
const HOURS: u32 = 16;

pub fn paint(canvas: &Canvas, date: NaiveDate) {
    let color = month_color(date.month());

    widgets::background(canvas);
    paint_date_badge(canvas, date, color);
    widgets::side_tabs(canvas, Some(date.month()));
    widgets::nav_tabs(canvas, None, color);

    let col_gap = 10.0;
    let usable_w = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 2.0 * col_gap;
    let col1_w = usable_w * 0.30;
    let col2_w = usable_w * 0.30;
    let col3_w = usable_w * 0.40;
    let top_y = widgets::content_top();

    let x1 = MARGIN_MM;
    let x2 = x1 + col1_w + col_gap;
    let x3 = x2 + col2_w + col_gap;

    paint_todo(canvas, Frame::spanning(x1, CONTENT_BOTTOM_MM, col1_w, top_y), color);
    paint_priorities_and_notes(canvas, Frame::spanning(x2, CONTENT_BOTTOM_MM, col2_w, top_y), color);
    paint_schedule(canvas, Frame::spanning(x3, CONTENT_BOTTOM_MM, col3_w, top_y), color);

    widgets::progress_bar(canvas, calendar::year_progress(date), color);
}

fn paint_date_badge(canvas: &Canvas, date: NaiveDate, color: Swatch) {
    let date_str = date.format("%A, %B %d").to_string().to_uppercase();
    let year_str = date.format("%Y").to_string();

    let badge_h = 10.0;
    let badge_y = widgets::header_y();
    let badge_w = canvas.text_width(&format!("{} {}", date_str, year_str), FontStyle::Bold, 12.0) + 10.0;
    canvas.fill_round_rect(MARGIN_MM, badge_y, badge_w, badge_h, 3.0, CARD_COLOR);

    let text_y = badge_y + badge_h / 2.0 - 1.8;
    canvas.text(&date_str, FontStyle::Bold, 12.0, MARGIN_MM + 5.0, text_y, color);
    let offset = canvas.text_width(&format!("{} ", date_str), FontStyle::Bold, 12.0);
    canvas.text(&year_str, FontStyle::Regular, 12.0, MARGIN_MM + 5.0 + offset, text_y, SECONDARY_LABEL);
}

/// Reminders-style list of circle checkboxes filling the whole column.
fn paint_todo(canvas: &Canvas, column: Frame, color: Swatch) {
    widgets::section_heading(canvas, column.x, column.top + 5.0, "To Do", Icon::Todo, color);
    canvas.fill_round_rect(column.x, column.bottom(), column.width, column.height, CARD_RADIUS_MM, CARD_COLOR);

    let inner = Frame::new(
        column.x,
        column.top - LIST_PADDING_MM,
        column.width,
        column.height - 2.0 * LIST_PADDING_MM,
    );
    let rows = RowLayout::in_frame(&inner, TODO_ROWS, inner.height / TODO_ROWS as f32);
    let ring = color.over(CARD_COLOR, 0.4);

    for row in rows.rows() {
        if row.index > 0 {
            canvas.line(column.x + 12.0, row.top, column.right() - 4.0, row.top, SEPARATOR_COLOR, 0.1);
        }
        canvas.stroke_circle(column.x + 6.0, row.center, 2.2, ring, 0.6);
    }
}

fn paint_priorities_and_notes(canvas: &Canvas, column: Frame, color: Swatch) {
    widgets::section_heading(canvas, column.x, column.top + 5.0, "Priorities", Icon::Priorities, color);

    let priorities = Frame::new(column.x, column.top, column.width, PRIORITY_HEIGHT_MM);
    canvas.fill_round_rect(
        priorities.x,
        priorities.bottom(),
        priorities.width,
        priorities.height,
        CARD_RADIUS_MM,
        CARD_COLOR,
    );
    let inner = priorities.inset(LIST_PADDING_MM);
    let rows = RowLayout::in_frame(&inner, PRIORITY_ROWS, inner.height / PRIORITY_ROWS as f32);
    for row in rows.rows().skip(1) {
        canvas.line(priorities.x + 4.0, row.top, priorities.right() - 4.0, row.top, SEPARATOR_COLOR, 0.1);
    }

    let notes_top = priorities.bottom() - 12.0;
    widgets::section_heading(canvas, column.x, notes_top + 5.0, "Notes", Icon::Notes, color);
    canvas.fill_round_rect(
        column.x,
        column.bottom(),
        column.width,
        notes_top - column.bottom(),
        CARD_RADIUS_MM,
        CARD_COLOR,
    );
}

/// Hour labels from 06:00 to 21:00 along a vertical timeline.
fn paint_schedule(canvas: &Canvas, column: Frame, color: Swatch) {
    widgets::section_heading(canvas, column.x, column.top + 5.0, "Schedule", Icon::Schedule, color);

    let labels = hour_labels(FIRST_HOUR, HOURS);
    let rows = RowLayout::in_frame(&column, labels.len(), column.height / labels.len() as f32);

    canvas.line(column.x + 12.0, column.top, column.right(), column.top, SEPARATOR_COLOR, 0.1);
    for row in rows.rows() {
        widgets::paint_row(canvas, &column, &row, RowKind::Labeled { labels: &labels });
    }

    let timeline = color.over(BACKGROUND_COLOR, 0.4);
    canvas.line(column.x + 12.0, column.top, column.x + 12.0, column.bottom(), timeline, 0.5);
}

fn hour_labels(first: u32, count: u32) -> Vec<String> {
    (first..first + count).map(|h| format!("{:02}:00", h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_labels_cover_the_day() {
        let labels = hour_labels(FIRST_HOUR, HOURS);
        assert_eq!(labels.len(), 16);
        assert_eq!(labels.first().map(String::as_str), Some("06:00"));
        assert_eq!(labels.last().map(String::as_str), Some("21:00"));
    }
}
