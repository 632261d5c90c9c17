// Meeting notes: attendees, agenda, action items and decisions, then a
// dotted page for free-form notes.

use crate::canvas::Canvas;
use crate::icons::Icon;
use crate::layout::{rows_that_fit, Frame, RowKind, RowLayout};
use crate::theme::*;
use crate::widgets;

const BOX_GAP_MM: f32 = 10.0;
const TOP_BOX_HEIGHT_MM: f32 = 55.0;
const ATTENDEE_ROWS: usize = 6;
const AGENDA_ROW_MM: f32 = 8.0;
const ITEM_ROW_MM: f32 = 9.0;
const ROW_PADDING_MM: f32 = 4.0;

/// One titled card of the summary page
struct Section {
    title: &'static str,
    icon: Icon,
    color: Swatch,
}

pub fn paint_summary(canvas: &Canvas) {
    widgets::background(canvas);
    widgets::page_title(canvas, "Meeting Notes", None, LABEL_COLOR);
    widgets::blank_field_right(canvas, "Date", PAGE_WIDTH_MM - MARGIN_MM, widgets::header_y() + 6.0);

    let col_gap = 10.0;
    let usable_w = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - col_gap;
    let left_w = usable_w * 0.40;
    let right_w = usable_w * 0.60;
    let x1 = MARGIN_MM;
    let x2 = MARGIN_MM + left_w + col_gap;

    let top_y = widgets::content_top();
    let lower_top = top_y - TOP_BOX_HEIGHT_MM - BOX_GAP_MM;

    // Left column
    let attendees = Frame::new(x1, top_y, left_w, TOP_BOX_HEIGHT_MM);
    section(
        canvas,
        &Section {
            title: "Attendees",
            icon: Icon::Important,
            color: MONTH_COLORS[2],
        },
        attendees,
        ATTENDEE_ROWS,
        AGENDA_ROW_MM,
        RowKind::Separator { indent: 5.0 },
    );

    let agenda = Frame::spanning(x1, CONTENT_BOTTOM_MM, left_w, lower_top);
    let agenda_color = MONTH_COLORS[1];
    section(
        canvas,
        &Section {
            title: "Agenda",
            icon: Icon::Overview,
            color: agenda_color,
        },
        agenda,
        rows_that_fit(agenda.height, AGENDA_ROW_MM, ROW_PADDING_MM).max(1),
        AGENDA_ROW_MM,
        RowKind::Checkbox { color: agenda_color },
    );

    // Right column
    let actions = Frame::new(x2, top_y, right_w, TOP_BOX_HEIGHT_MM);
    let action_color = MONTH_COLORS[5];
    section(
        canvas,
        &Section {
            title: "Action Items",
            icon: Icon::Todo,
            color: action_color,
        },
        actions,
        rows_that_fit(actions.height, ITEM_ROW_MM, ROW_PADDING_MM),
        ITEM_ROW_MM,
        RowKind::Bulleted { color: action_color },
    );

    let decisions = Frame::spanning(x2, CONTENT_BOTTOM_MM, right_w, lower_top);
    let decision_color = MONTH_COLORS[4];
    section(
        canvas,
        &Section {
            title: "Key Decisions",
            icon: Icon::Priorities,
            color: decision_color,
        },
        decisions,
        rows_that_fit(decisions.height, ITEM_ROW_MM, ROW_PADDING_MM),
        ITEM_ROW_MM,
        RowKind::Bulleted { color: decision_color },
    );
}

fn section(
    canvas: &Canvas,
    section: &Section,
    frame: Frame,
    rows: usize,
    row_height: f32,
    kind: RowKind,
) {
    widgets::section_heading(canvas, frame.x, frame.top + 2.0, section.title, section.icon, section.color);
    let layout = RowLayout::in_frame(&frame, rows, row_height);
    widgets::grouped_list(canvas, frame, CARD_RADIUS_MM, &layout, kind);
}

pub fn paint_notes(canvas: &Canvas) {
    widgets::background(canvas);
    widgets::page_title(canvas, "Meeting Notes", None, LABEL_COLOR);

    let notes = Frame::spanning(
        MARGIN_MM,
        CONTENT_BOTTOM_MM,
        PAGE_WIDTH_MM - 2.0 * MARGIN_MM,
        widgets::content_top(),
    );
    widgets::dotted_card(canvas, notes);
}
