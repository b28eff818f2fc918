//! Error types and handling
//!
//! Data-quality problems (bad tokens, nulls, gaps) never show up here; they are
//! recorded in the [`CoverageReport`](super::CoverageReport). These errors
//! cover misuse of the API and failures of the surrounding I/O.

use thiserror::Error;

/// Errors that abort a coverage check
#[derive(Debug, Error)]
pub enum CoverageError {
    /// Input value is not a sequence of items
    #[error("Input must be a sequence of timestamps, got {0}")]
    NotASequence(String),

    /// Target date could not be parsed
    #[error("Invalid target date '{0}' (expected YYYY-MM-DD)")]
    InvalidTargetDate(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CoverageError {
    /// Check if this error reflects caller misuse rather than the environment
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CoverageError::NotASequence(_) | CoverageError::InvalidTargetDate(_))
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            CoverageError::NotASequence(_) => "Input Shape",
            CoverageError::InvalidTargetDate(_) => "Target Date",
            CoverageError::IoError(_) => "IO",
            CoverageError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for coverage operations
pub type CoverageResult<T> = Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CoverageError::NotASequence("object".to_string());
        assert_eq!(error.to_string(), "Input must be a sequence of timestamps, got object");

        let error = CoverageError::InvalidTargetDate("2025-13-01".to_string());
        assert!(error.to_string().contains("2025-13-01"));
    }

    #[test]
    fn test_error_classification() {
        assert!(CoverageError::NotASequence("string".into()).is_contract_violation());
        assert!(CoverageError::InvalidTargetDate("x".into()).is_contract_violation());
        assert_eq!(CoverageError::NotASequence("string".into()).category(), "Input Shape");

        let io = CoverageError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), "IO");
        assert!(!io.is_contract_violation());
    }
}
