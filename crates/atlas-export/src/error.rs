//! Error types for report artifact generation.

use thiserror::Error;

/// Errors produced while building or writing report artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No rows were loaded, so there is nothing to lay out.
    #[error("No report data to export")]
    EmptyReport,

    /// The PDF backend failed while composing or serializing the document.
    #[error("Failed to build PDF: {0}")]
    Pdf(String),

    /// The spreadsheet backend failed while composing or serializing.
    #[error("Failed to build spreadsheet: {0}")]
    Xlsx(String),

    /// Writing a finished artifact to disk failed.
    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExportError::EmptyReport.to_string(),
            "No report data to export"
        );
        assert_eq!(
            ExportError::Pdf("bad font".to_string()).to_string(),
            "Failed to build PDF: bad font"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
