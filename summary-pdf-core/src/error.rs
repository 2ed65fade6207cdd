use thiserror::Error;

/// Failures that can surface while producing a summary PDF.
///
/// Layout and encoding are total; only the filesystem and, with the `serde`
/// feature, loading summary content from JSON can fail.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Invalid summary content: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PdfError>;
