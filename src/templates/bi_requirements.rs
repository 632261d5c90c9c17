// BI requirements interview sheet: discovery questions beside a dotted
// notes panel, then a full page of notes.

use crate::canvas::Canvas;
use crate::icons::Icon;
use crate::layout::Frame;
use crate::metrics::FontStyle;
use crate::theme::*;
use crate::widgets;

pub const DISCOVERY_QUESTIONS: [&str; 10] = [
    "What business decision will this data drive?",
    "Why is this important to the business?",
    "How are you currently getting this data?",
    "Overview vs. Deep Dive granularity?",
    "Core KPIs & how they are calculated?",
    "Dimensions needed (filters/slicing)?",
    "Compliance/Legal/GDPR implications?",
    "Does refresh align with data updates?",
    "What other departments use this data?",
    "What does 'Success' look like?",
];

const QUESTION_FONT_SIZE: f32 = 8.5;
const PANEL_BOTTOM_MM: f32 = 20.0;

pub fn paint_requirements(canvas: &Canvas) {
    widgets::background(canvas);
    widgets::page_title(canvas, "BI Requirements", None, LABEL_COLOR);

    let header_y = widgets::header_y();
    let right = PAGE_WIDTH_MM - MARGIN_MM;
    widgets::blank_field_right(canvas, "Date", right, header_y + 6.0);
    widgets::blank_field_right(canvas, "Stakeholder", right, header_y);

    let info_y = header_y - 15.0;
    canvas.text(
        "Project: ________________________________________________",
        FontStyle::Regular,
        12.0,
        MARGIN_MM,
        info_y,
        SYSTEM_GRAY,
    );

    let top_y = info_y - 15.0;
    let col_gap = 10.0;
    let usable_w = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - col_gap;
    let left_w = usable_w * 0.45;
    let right_w = usable_w * 0.55;

    let questions = Frame::spanning(MARGIN_MM, PANEL_BOTTOM_MM, left_w, top_y);
    paint_questions(canvas, questions, MONTH_COLORS[2]);

    let notes_color = MONTH_COLORS[4];
    let notes = Frame::spanning(MARGIN_MM + left_w + col_gap, PANEL_BOTTOM_MM, right_w, top_y);
    widgets::section_heading(canvas, notes.x, notes.top + 2.0, "Notes", Icon::Notes, notes_color);
    widgets::dotted_card(canvas, notes);
}

fn paint_questions(canvas: &Canvas, frame: Frame, color: Swatch) {
    widgets::section_heading(canvas, frame.x, frame.top + 2.0, "Discovery Questions", Icon::Discovery, color);
    canvas.fill_round_rect(frame.x, frame.bottom(), frame.width, frame.height, CARD_RADIUS_MM, CARD_COLOR);

    let spacing = (frame.height - 10.0) / DISCOVERY_QUESTIONS.len() as f32;
    let mut y = frame.top - 8.0;
    for question in DISCOVERY_QUESTIONS {
        canvas.stroke_rect(frame.x + 5.0, y - 0.5, 2.5, 2.5, color, 0.6);
        canvas.text(question, FontStyle::Regular, QUESTION_FONT_SIZE, frame.x + 10.0, y, SECONDARY_LABEL);
        y -= spacing;
    }
}

/// Dotted grid over the whole page inside the margins.
pub fn paint_notes(canvas: &Canvas) {
    widgets::background(canvas);
    let notes = Frame::spanning(
        MARGIN_MM,
        MARGIN_MM,
        PAGE_WIDTH_MM - 2.0 * MARGIN_MM,
        PAGE_HEIGHT_MM - MARGIN_MM,
    );
    widgets::dotted_card(canvas, notes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::text_width_mm;

    #[test]
    fn test_questions_fit_their_column() {
        let usable_w = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 10.0;
        let text_room = usable_w * 0.45 - 10.0;
        for question in DISCOVERY_QUESTIONS {
            let width = text_width_mm(question, FontStyle::Regular, QUESTION_FONT_SIZE);
            assert!(width < text_room, "{} is {} mm wide", question, width);
        }
    }
}
