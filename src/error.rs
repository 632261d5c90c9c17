use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to create PDF: {0}")]
    PdfError(String),
    #[error("Failed to write manifest: {0}")]
    ManifestError(String),
    #[error("Failed to load icon: {0}")]
    IconError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
