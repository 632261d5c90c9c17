// Month page: grouped-list sidebar on the left, day grid on the right.

use crate::calendar::{self, MonthGrid, WEEKDAY_ABBRS};
use crate::canvas::Canvas;
use crate::document::Anchor;
use crate::icons::Icon;
use crate::layout::{Frame, RowLayout};
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets;

const LINE_HEIGHT_MM: f32 = 6.0;
const LIST_RADIUS_MM: f32 = 4.0;

/// Sidebar sections: title, ruled lines, icon
const SECTIONS: [(&str, usize, Icon); 3] = [
    ("Key Dates", 4, Icon::Important),
    ("Monthly Tasks", 4, Icon::Goals),
    ("Notes", 5, Icon::Notes),
];

pub fn paint(canvas: &Canvas, year: i32, month: u32) {
    let color = month_color(month);

    widgets::background(canvas);
    widgets::page_title(canvas, calendar::month_name(month), None, color);
    widgets::side_tabs(canvas, Some(month));
    widgets::nav_tabs(canvas, None, color);

    let sidebar_w = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) * 0.25;
    paint_sidebar(canvas, sidebar_w, color);

    let grid_x = MARGIN_MM + sidebar_w + 10.0;
    let grid = Frame::spanning(
        grid_x,
        CONTENT_BOTTOM_MM,
        PAGE_WIDTH_MM - MARGIN_MM - grid_x,
        widgets::content_top(),
    );
    paint_day_grid(canvas, year, month, grid);
}

fn paint_sidebar(canvas: &Canvas, width: f32, color: Swatch) {
    let mut y = PAGE_HEIGHT_MM - 45.0;

    for (title, lines, icon) in SECTIONS {
        canvas.icon(icon, MARGIN_MM + 2.0, y, 4.0, color, BACKGROUND_COLOR);
        canvas.text(title, FontStyle::Bold, 11.0, MARGIN_MM + 8.0, y, color);
        y -= 4.5;

        let frame = Frame::new(MARGIN_MM, y, width, lines as f32 * LINE_HEIGHT_MM);
        canvas.fill_round_rect(frame.x, frame.bottom(), frame.width, frame.height, LIST_RADIUS_MM, CARD_COLOR);

        // Separators between lines only, none under the last
        let rows = RowLayout::in_frame(&frame, lines, LINE_HEIGHT_MM);
        for row in rows.rows().take(lines.saturating_sub(1)) {
            canvas.line(frame.x + 4.0, row.bottom, frame.right() - 4.0, row.bottom, SEPARATOR_COLOR, 0.1);
        }

        y -= frame.height + 6.0;
    }
}

fn paint_day_grid(canvas: &Canvas, year: i32, month: u32, grid: Frame) {
    let month_grid = MonthGrid::new(year, month);
    if month_grid.week_count() == 0 {
        return;
    }
    let cell_w = grid.width / 7.0;
    let cell_h = grid.height / month_grid.week_count() as f32;

    for (i, label) in WEEKDAY_ABBRS.iter().enumerate() {
        canvas.text_centered(
            label,
            FontStyle::Bold,
            BODY_FONT_SIZE,
            grid.x + i as f32 * cell_w + cell_w / 2.0,
            grid.top + 3.0,
            SYSTEM_GRAY,
        );
    }

    // Every slot gets a card, blank ones included
    for week in 0..month_grid.week_count() {
        for weekday in 0..7 {
            let x = grid.x + weekday as f32 * cell_w;
            let y = grid.top - (week + 1) as f32 * cell_h;
            canvas.fill_rect(x, y, cell_w, cell_h, CARD_COLOR);
            canvas.stroke_rect(x, y, cell_w, cell_h, SEPARATOR_COLOR, 0.2);
        }
    }

    for cell in month_grid.cells() {
        let x = grid.x + cell.weekday as f32 * cell_w;
        let y = grid.top - (cell.week + 1) as f32 * cell_h;

        if calendar::is_weekend(cell.date) {
            canvas.fill_rect(x + 0.1, y + 0.1, cell_w - 0.2, cell_h - 0.2, WEEKEND_COLOR);
        }
        canvas.text(&cell.day.to_string(), FontStyle::Bold, 12.0, x + 3.0, y + cell_h - 7.0, LABEL_COLOR);
        canvas.link(x, y, cell_w, cell_h, Anchor::Day(cell.date));
    }
}
