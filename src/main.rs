// planner-pdf: Generate planner and note-taking PDFs for tablets

use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planner_pdf::document::DocumentPlan;
use planner_pdf::error::AppError;
use planner_pdf::RenderOptions;

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate planner and note-taking PDFs for tablets")]
struct Cli {
    /// Directory holding the SVG icons
    #[arg(long, global = true, default_value = "assets/icons")]
    icons: PathBuf,

    /// Also write a JSON list of the generated pages
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full-year planner with monthly and daily pages
    Planner {
        /// Planner year (defaults to next year)
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,

        /// Output file path (defaults to planner_<year>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Meeting summary page followed by a notes page
    #[command(name = "meeting_notes", alias = "meeting-notes")]
    MeetingNotes {
        /// Output file path
        #[arg(short, long, default_value = "meeting_notes.pdf")]
        output: PathBuf,
    },

    /// BI requirements interview sheet followed by a notes page
    #[command(name = "bi_requirements", alias = "bi-requirements")]
    BiRequirements {
        /// Output file path
        #[arg(short, long, default_value = "bi_requirements.pdf")]
        output: PathBuf,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planner_pdf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let options = RenderOptions {
        icon_dir: cli.icons,
        manifest: cli.manifest,
    };

    let (plan, output_file) = match cli.command {
        Command::Planner { year, output } => {
            let year = year.unwrap_or_else(|| Local::now().year() + 1);
            let output = output.unwrap_or_else(|| PathBuf::from(format!("planner_{}.pdf", year)));
            (DocumentPlan::planner(year), output)
        }
        Command::MeetingNotes { output } => (DocumentPlan::meeting_notes(), output),
        Command::BiRequirements { output } => (DocumentPlan::bi_requirements(), output),
    };

    let pages = planner_pdf::generate(&plan, &options, &output_file)?;

    println!("✓ Generated: {}", output_file.display());
    println!("  Document: {}", plan.title);
    println!("  Pages: {}", pages);
    if let Some(manifest) = &options.manifest {
        println!("  Manifest: {}", manifest.display());
    }

    Ok(())
}
