// Page plans, named destinations and PDF assembly.

use chrono::{Datelike, NaiveDate};
use printpdf::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::calendar;
use crate::canvas::{Canvas, Fonts};
use crate::error::AppError;
use crate::icons::IconSet;
use crate::links::{self, LinkTable};
use crate::planner;
use crate::templates;
use crate::theme::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

// ============================================================================
// Anchors
// ============================================================================

/// A named destination inside a document. Links and bookmarks target these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Cover,
    YearlySummary,
    YearlyTracker,
    /// Six-month overview starting at the given month
    SixMonth(u32),
    Month(u32),
    Day(NaiveDate),
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Cover => write!(f, "Cover"),
            Anchor::YearlySummary => write!(f, "YearlySummary"),
            Anchor::YearlyTracker => write!(f, "YearlyTracker"),
            Anchor::SixMonth(start) => write!(f, "SixMonth_{}", start),
            Anchor::Month(month) => write!(f, "Month_{}", month),
            Anchor::Day(date) => write!(f, "Day_{}_{}_{}", date.year(), date.month(), date.day()),
        }
    }
}

/// Position (0-based) of every anchored page in the document being built.
#[derive(Debug, Default)]
pub struct Destinations {
    pages: HashMap<Anchor, usize>,
}

impl Destinations {
    pub fn insert(&mut self, anchor: Anchor, page: usize) {
        self.pages.insert(anchor, page);
    }

    pub fn page_of(&self, anchor: &Anchor) -> Option<usize> {
        self.pages.get(anchor).copied()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

// ============================================================================
// Pages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Cover { year: i32 },
    YearlySummary { year: i32 },
    YearlyTracker { year: i32 },
    SixMonthOverview { year: i32, start_month: u32 },
    Month { year: i32, month: u32 },
    Day(NaiveDate),
    MeetingSummary,
    MeetingNotes,
    BiRequirements,
    BiNotes,
}

impl Page {
    pub fn anchor(&self) -> Option<Anchor> {
        match *self {
            Page::Cover { .. } => Some(Anchor::Cover),
            Page::YearlySummary { .. } => Some(Anchor::YearlySummary),
            Page::YearlyTracker { .. } => Some(Anchor::YearlyTracker),
            Page::SixMonthOverview { start_month, .. } => Some(Anchor::SixMonth(start_month)),
            Page::Month { month, .. } => Some(Anchor::Month(month)),
            Page::Day(date) => Some(Anchor::Day(date)),
            Page::MeetingSummary | Page::MeetingNotes | Page::BiRequirements | Page::BiNotes => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Page::Cover { .. } => "cover",
            Page::YearlySummary { .. } => "yearly-summary",
            Page::YearlyTracker { .. } => "yearly-tracker",
            Page::SixMonthOverview { .. } => "six-month-overview",
            Page::Month { .. } => "month",
            Page::Day(_) => "day",
            Page::MeetingSummary => "meeting-summary",
            Page::MeetingNotes => "meeting-notes",
            Page::BiRequirements => "bi-requirements",
            Page::BiNotes => "bi-notes",
        }
    }

    pub fn paint(&self, canvas: &Canvas) {
        match *self {
            Page::Cover { year } => planner::cover::paint(canvas, year),
            Page::YearlySummary { year } => planner::summary::paint(canvas, year),
            Page::YearlyTracker { year } => planner::tracker::paint(canvas, year),
            Page::SixMonthOverview { year, start_month } => {
                planner::overview::paint(canvas, year, start_month)
            }
            Page::Month { year, month } => planner::monthly::paint(canvas, year, month),
            Page::Day(date) => planner::daily::paint(canvas, date),
            Page::MeetingSummary => templates::meeting_notes::paint_summary(canvas),
            Page::MeetingNotes => templates::meeting_notes::paint_notes(canvas),
            Page::BiRequirements => templates::bi_requirements::paint_requirements(canvas),
            Page::BiNotes => templates::bi_requirements::paint_notes(canvas),
        }
    }
}

// ============================================================================
// Document Plans
// ============================================================================

/// Manifest line describing one generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub index: usize,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// Ordered pages of one output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPlan {
    pub title: String,
    pub pages: Vec<Page>,
}

impl DocumentPlan {
    /// Cover, yearly calendar, tracker, two six-month overviews, then each
    /// month page followed by its days.
    pub fn planner(year: i32) -> Self {
        let mut pages = vec![
            Page::Cover { year },
            Page::YearlySummary { year },
            Page::YearlyTracker { year },
            Page::SixMonthOverview { year, start_month: 1 },
            Page::SixMonthOverview { year, start_month: 7 },
        ];

        let mut current_month = 0;
        for date in calendar::year_days(year) {
            if date.month() != current_month {
                current_month = date.month();
                pages.push(Page::Month {
                    year,
                    month: current_month,
                });
            }
            pages.push(Page::Day(date));
        }

        DocumentPlan {
            title: format!("Planner {}", year),
            pages,
        }
    }

    pub fn meeting_notes() -> Self {
        DocumentPlan {
            title: "Meeting Notes".to_string(),
            pages: vec![Page::MeetingSummary, Page::MeetingNotes],
        }
    }

    pub fn bi_requirements() -> Self {
        DocumentPlan {
            title: "BI Requirements".to_string(),
            pages: vec![Page::BiRequirements, Page::BiNotes],
        }
    }

    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.pages
            .iter()
            .enumerate()
            .map(|(index, page)| ManifestEntry {
                index,
                kind: page.kind(),
                anchor: page.anchor().map(|a| a.to_string()),
            })
            .collect()
    }

    pub fn write_manifest(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&self.manifest())
            .map_err(|e| AppError::ManifestError(e.to_string()))?;
        std::fs::write(path, json)
            .map_err(|e| AppError::ManifestError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

// ============================================================================
// PDF Generation
// ============================================================================

/// Render `plan` to a PDF file at `output_path`.
pub fn render(plan: &DocumentPlan, icons: &IconSet, output_path: &Path) -> Result<(), AppError> {
    let bytes = render_to_bytes(plan, icons)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(())
}

/// Render `plan` to an in-memory PDF.
pub fn render_to_bytes(plan: &DocumentPlan, icons: &IconSet) -> Result<Vec<u8>, AppError> {
    let (doc, link_table) = build(plan, icons)?;
    let bytes = doc
        .save_to_bytes()
        .map_err(|e| AppError::PdfError(e.to_string()))?;
    links::write_links(&bytes, &link_table.into_inner())
}

fn build(plan: &DocumentPlan, icons: &IconSet) -> Result<(PdfDocumentReference, LinkTable), AppError> {
    if plan.pages.is_empty() {
        return Err(AppError::PdfError("document has no pages".to_string()));
    }

    let (doc, page1, layer1) = PdfDocument::new(
        plan.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let fonts = Fonts::builtin(&doc)?;

    // Create every page up front so links can point forward
    let mut layers = Vec::with_capacity(plan.pages.len());
    let mut destinations = Destinations::default();
    for (i, page) in plan.pages.iter().enumerate() {
        let (page_index, layer_index) = if i == 0 {
            (page1, layer1)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };

        if let Some(anchor) = page.anchor() {
            doc.add_bookmark(anchor.to_string(), page_index);
            destinations.insert(anchor, i);
        }
        layers.push(doc.get_page(page_index).get_layer(layer_index));
    }

    tracing::info!(
        "Painting {} pages ({} destinations) for \"{}\"",
        plan.pages.len(),
        destinations.len(),
        plan.title
    );

    let link_table = LinkTable::default();
    for (i, (page, layer)) in plan.pages.iter().zip(layers).enumerate() {
        tracing::trace!("Painting {}", page.kind());
        let canvas = Canvas::new(layer, i, &fonts, icons, &destinations, &link_table);
        page.paint(&canvas);
    }
    tracing::debug!("Recorded {} links", link_table.len());

    Ok((doc, link_table))
}
