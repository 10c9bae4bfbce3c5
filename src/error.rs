//! Error types for the analysis engine

use thiserror::Error;

/// Errors produced by the analysis engine and its column reader.
///
/// Every kind is detected before any partial result is returned; the engine
/// never retries internally.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No valid numeric leading digits could be extracted from the column.
    #[error("insufficient numeric data: {valid} valid leading digits extracted")]
    InsufficientData { valid: usize },

    /// The requested column does not exist in the supplied row structure.
    #[error("column '{name}' not found")]
    InvalidColumn { name: String },

    /// Internal invariant violation: a zero-total distribution reached the
    /// conformity tester. Programming-error class, never a user condition.
    #[error("degenerate digit distribution: total sample count is {total}")]
    DegenerateDistribution { total: u64 },

    /// CSV structural error while extracting a column.
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InsufficientData { valid: 0 };
        assert_eq!(
            err.to_string(),
            "insufficient numeric data: 0 valid leading digits extracted"
        );

        let err = AnalysisError::InvalidColumn {
            name: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "column 'amount' not found");
    }
}
