// Page furniture shared by the planner and the note templates.

use crate::calendar;
use crate::canvas::Canvas;
use crate::document::Anchor;
use crate::icons::Icon;
use crate::layout::{Frame, Row, RowLayout, RowKind};
use crate::metrics::FontStyle;
use crate::theme::*;

// ============================================================================
// Page Chrome
// ============================================================================

pub fn background(canvas: &Canvas) {
    canvas.fill_rect(0.0, 0.0, PAGE_WIDTH_MM, PAGE_HEIGHT_MM, BACKGROUND_COLOR);
}

/// Baseline of page titles
pub fn header_y() -> f32 {
    PAGE_HEIGHT_MM - HEADER_OFFSET_MM
}

/// Top edge of the content area below the header
pub fn content_top() -> f32 {
    PAGE_HEIGHT_MM - CONTENT_TOP_OFFSET_MM
}

/// Large page title: a bold lead word followed by a regular suffix.
pub fn page_title(canvas: &Canvas, lead: &str, suffix: Option<&str>, color: Swatch) {
    let y = header_y();
    canvas.text(lead, FontStyle::Bold, TITLE_FONT_SIZE, MARGIN_MM, y, color);
    if let Some(suffix) = suffix {
        let offset = canvas.text_width(&format!("{} ", lead), FontStyle::Bold, TITLE_FONT_SIZE);
        canvas.text(suffix, FontStyle::Regular, TITLE_FONT_SIZE, MARGIN_MM + offset, y, color);
    }
}

// ============================================================================
// Tabs
// ============================================================================

const TAB_WIDTH_MM: f32 = 32.0;
const TAB_HEIGHT_MM: f32 = 9.0;
const TAB_GAP_MM: f32 = 3.0;
const TAB_RIGHT_MARGIN_MM: f32 = 15.0;
const TAB_RADIUS_MM: f32 = 2.5;

/// The three year-level views reachable from every planner page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Calendar,
    Summary,
    Tracker,
}

impl NavTab {
    pub const ALL: [NavTab; 3] = [NavTab::Calendar, NavTab::Summary, NavTab::Tracker];

    fn label(self) -> &'static str {
        match self {
            NavTab::Calendar => "Calendar",
            NavTab::Summary => "Summary",
            NavTab::Tracker => "Tracker",
        }
    }

    fn icon(self) -> Icon {
        match self {
            NavTab::Calendar => Icon::Calendar,
            NavTab::Summary => Icon::Overview,
            NavTab::Tracker => Icon::Goals,
        }
    }

    fn target(self) -> Anchor {
        match self {
            NavTab::Calendar => Anchor::YearlySummary,
            NavTab::Summary => Anchor::SixMonth(1),
            NavTab::Tracker => Anchor::YearlyTracker,
        }
    }
}

/// Calendar / Summary / Tracker buttons in the top-right corner.
pub fn nav_tabs(canvas: &Canvas, active: Option<NavTab>, color: Swatch) {
    let y = header_y();
    let count = NavTab::ALL.len() as f32;
    let first_x = PAGE_WIDTH_MM - TAB_RIGHT_MARGIN_MM - TAB_WIDTH_MM * count - TAB_GAP_MM * (count - 1.0);

    for (i, tab) in NavTab::ALL.iter().enumerate() {
        let x = first_x + i as f32 * (TAB_WIDTH_MM + TAB_GAP_MM);
        button(
            canvas,
            Frame::new(x, y + TAB_HEIGHT_MM, TAB_WIDTH_MM, TAB_HEIGHT_MM),
            tab.label(),
            active == Some(*tab),
            Some(tab.target()),
            color,
            Some(tab.icon()),
        );
    }
}

/// Segmented-control style button with optional icon and link.
pub fn button(
    canvas: &Canvas,
    frame: Frame,
    text: &str,
    active: bool,
    destination: Option<Anchor>,
    color: Swatch,
    icon: Option<Icon>,
) {
    let (x, y, w, h) = (frame.x, frame.bottom(), frame.width, frame.height);

    let (fill, text_color) = if active {
        (color, WHITE)
    } else {
        (CARD_COLOR, color)
    };
    canvas.fill_round_rect(x, y, w, h, TAB_RADIUS_MM, fill);
    if !active {
        canvas.stroke_round_rect(x, y, w, h, TAB_RADIUS_MM, SEPARATOR_COLOR, 0.1);
    }

    let text_y = y + h / 2.0 - 1.2;
    match icon {
        Some(icon) => {
            canvas.icon(icon, x + 3.0, y + 2.2, 4.5, text_color, fill);
            canvas.text(text, FontStyle::Bold, TAB_FONT_SIZE, x + 9.0, text_y, text_color);
        }
        None => {
            canvas.text_centered(text, FontStyle::Bold, TAB_FONT_SIZE, x + w / 2.0, text_y, text_color);
        }
    }

    if let Some(anchor) = destination {
        canvas.link(x, y, w, h, anchor);
    }
}

/// Vertical month tabs along the right edge; the current month pops out.
pub fn side_tabs(canvas: &Canvas, current_month: Option<u32>) {
    let tab_w = 8.0;
    let tab_h = (PAGE_HEIGHT_MM - 40.0) / 12.0;
    // Runs off the page edge so only the rounded left side shows
    let x = PAGE_WIDTH_MM - tab_w + 2.0;

    for month in 1..=12u32 {
        let y = PAGE_HEIGHT_MM - 30.0 - month as f32 * tab_h;
        let color = month_color(month);
        let pop = if current_month == Some(month) { 4.0 } else { 0.0 };
        let draw_x = x - pop;

        canvas.fill_round_rect(draw_x, y, tab_w + pop, tab_h - 0.5, 2.0, color);

        let label_color = if color.is_dark() {
            WHITE.over(color, 0.9)
        } else {
            LABEL_COLOR.over(color, 0.8)
        };
        canvas.text_vertical(
            &calendar::month_abbr(month),
            FontStyle::Bold,
            SMALL_FONT_SIZE,
            draw_x + 4.0,
            y + tab_h / 2.0,
            label_color,
        );

        canvas.link(draw_x, y, PAGE_WIDTH_MM - draw_x, tab_h, Anchor::Month(month));
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Icon plus bold heading sitting on `baseline`.
pub fn section_heading(canvas: &Canvas, x: f32, baseline: f32, title: &str, icon: Icon, color: Swatch) {
    canvas.icon(icon, x + 1.5, baseline - 0.8, 4.5, color, BACKGROUND_COLOR);
    canvas.text(title, FontStyle::Bold, SECTION_FONT_SIZE, x + 7.5, baseline, color);
}

/// Rounded card containing rows laid out by `rows` and decorated per `kind`.
pub fn grouped_list(canvas: &Canvas, frame: Frame, radius: f32, rows: &RowLayout, kind: RowKind) {
    canvas.fill_round_rect(frame.x, frame.bottom(), frame.width, frame.height, radius, CARD_COLOR);
    for row in rows.rows() {
        paint_row(canvas, &frame, &row, kind);
    }
}

/// Decorate one row of a grouped list.
pub fn paint_row(canvas: &Canvas, frame: &Frame, row: &Row, kind: RowKind) {
    let rule_y = row.bottom + 2.0;
    let right = frame.right() - 5.0;

    match kind {
        RowKind::Separator { indent } => {
            canvas.line(frame.x + indent, rule_y, right, rule_y, SEPARATOR_COLOR, 0.5);
        }
        RowKind::Checkbox { color } => {
            canvas.line(frame.x + 12.0, rule_y, right, rule_y, SEPARATOR_COLOR, 0.5);
            canvas.stroke_rect(frame.x + 5.0, row.center - 2.0, 4.0, 4.0, color, 0.8);
        }
        RowKind::Bulleted { color } => {
            canvas.line(frame.x + 10.0, rule_y, right, rule_y, SEPARATOR_COLOR, 0.5);
            canvas.fill_circle(frame.x + 7.0, row.center, 1.0, color);
        }
        RowKind::Labeled { labels } => {
            if let Some(label) = labels.get(row.index) {
                canvas.text_right(
                    label,
                    FontStyle::Bold,
                    8.0,
                    frame.x + 10.0,
                    label_baseline(row),
                    SYSTEM_GRAY,
                );
            }
            canvas.line(frame.x + 12.0, row.bottom, frame.right(), row.bottom, SEPARATOR_COLOR, 0.1);
        }
    }
}

/// Row labels sit 1 mm above the row's centre line.
fn label_baseline(row: &Row) -> f32 {
    row.center + 1.0
}

/// Full card with a dotted writing grid inset 5 mm from its edges.
pub fn dotted_card(canvas: &Canvas, frame: Frame) {
    canvas.fill_round_rect(
        frame.x,
        frame.bottom(),
        frame.width,
        frame.height,
        CARD_RADIUS_MM,
        CARD_COLOR,
    );
    for (x, y) in crate::layout::dot_grid(&frame.inset(5.0), 5.0) {
        canvas.fill_circle(x, y, 0.25, SEPARATOR_COLOR);
    }
}

/// "Label: ______" info line, right aligned.
pub fn blank_field_right(canvas: &Canvas, label: &str, right_x: f32, y: f32) {
    canvas.text_right(
        &format!("{}: ________________", label),
        FontStyle::Regular,
        BODY_FONT_SIZE,
        right_x,
        y,
        SYSTEM_GRAY,
    );
}

// ============================================================================
// Progress
// ============================================================================

/// Thin bar centred at the bottom of the page with a percentage label.
pub fn progress_bar(canvas: &Canvas, progress: f32, color: Swatch) {
    let progress = progress.clamp(0.0, 1.0);
    let bar_w = 80.0;
    let bar_h = 1.2;
    let text_space = 12.0;
    let bar_x = (PAGE_WIDTH_MM - bar_w - text_space) / 2.0;
    let bar_y = 6.0;

    canvas.fill_round_rect(bar_x, bar_y, bar_w, bar_h, 0.6, SYSTEM_GRAY_4);
    if progress > 0.0 {
        canvas.fill_round_rect(bar_x, bar_y, bar_w * progress, bar_h, 0.6, color);
    }
    canvas.text(
        &format!("{}%", (progress * 100.0) as u32),
        FontStyle::Bold,
        SMALL_FONT_SIZE,
        bar_x + bar_w + 2.0,
        bar_y - 0.5,
        SECONDARY_LABEL,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_sit_above_row_center() {
        let layout = RowLayout::centered(100.0, 80.0, 16, 5.0);
        let row = layout.row(3);
        assert!((label_baseline(&row) - (row.bottom + 2.5 + 1.0)).abs() < 1e-4);
        assert!(label_baseline(&row) < row.top);
    }

    #[test]
    fn test_nav_tab_targets() {
        assert_eq!(NavTab::Calendar.target(), Anchor::YearlySummary);
        assert_eq!(NavTab::Summary.target(), Anchor::SixMonth(1));
        assert_eq!(NavTab::Tracker.target(), Anchor::YearlyTracker);
    }
}
