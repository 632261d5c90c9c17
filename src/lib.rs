// planner-pdf: tablet-sized planner, meeting notes and BI requirements
// PDFs with internal navigation links.

pub mod calendar;
pub mod canvas;
pub mod document;
pub mod error;
pub mod icons;
pub mod layout;
pub mod links;
pub mod metrics;
pub mod planner;
pub mod templates;
pub mod theme;
pub mod widgets;

use std::path::{Path, PathBuf};

use document::DocumentPlan;
use error::AppError;
use icons::IconSet;

/// Where rendering looks for its assets and what it writes besides the PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub icon_dir: PathBuf,
    pub manifest: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            icon_dir: PathBuf::from("assets/icons"),
            manifest: None,
        }
    }
}

/// Render `plan` to `output`, plus the page manifest when one was requested.
/// Returns the number of pages written.
pub fn generate(plan: &DocumentPlan, options: &RenderOptions, output: &Path) -> Result<usize, AppError> {
    let icons = IconSet::load(&options.icon_dir);
    document::render(plan, &icons, output)?;

    if let Some(manifest) = &options.manifest {
        plan.write_manifest(manifest)?;
        tracing::debug!("Wrote manifest to {}", manifest.display());
    }

    Ok(plan.pages.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_pdf_and_manifest() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("notes.pdf");
        let options = RenderOptions {
            icon_dir: dir.path().join("icons"),
            manifest: Some(dir.path().join("notes.json")),
        };

        let pages = generate(&DocumentPlan::meeting_notes(), &options, &output).expect("generate");
        assert_eq!(pages, 2);
        assert!(std::fs::metadata(&output).unwrap().len() > 1000);

        let manifest = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
        assert!(manifest.contains("meeting-summary"));
    }

    #[test]
    fn test_generate_reports_unwritable_output() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("missing").join("out.pdf");
        let result = generate(&DocumentPlan::bi_requirements(), &RenderOptions::default(), &output);
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
