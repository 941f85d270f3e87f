//! Error handling for the resume insight application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeInsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("File too large: {0}")]
    FileTooLarge(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Report storage error: {0}")]
    Storage(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeInsightError>;

/// Coarse classification for callers that map errors onto response codes.
/// Authentication failures belong to an embedding web layer and never
/// originate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caller mistake: bad file, bad format, oversized upload (400-equivalent)
    Validation,
    /// Everything else (500-equivalent)
    Internal,
}

impl ResumeInsightError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ResumeInsightError::UnsupportedFormat(_)
            | ResumeInsightError::FileTooLarge(_)
            | ResumeInsightError::InvalidInput(_)
            | ResumeInsightError::ReportNotFound(_) => ErrorClass::Validation,
            _ => ErrorClass::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        let err = ResumeInsightError::FileTooLarge("7 MB".to_string());
        assert_eq!(err.class(), ErrorClass::Validation);

        let err = ResumeInsightError::UnsupportedFormat("docx".to_string());
        assert_eq!(err.class(), ErrorClass::Validation);
    }

    #[test]
    fn test_internal_classification() {
        let err = ResumeInsightError::Storage("disk gone".to_string());
        assert_eq!(err.class(), ErrorClass::Internal);

        let err = ResumeInsightError::PdfExtraction("bad xref".to_string());
        assert_eq!(err.class(), ErrorClass::Internal);
    }
}
