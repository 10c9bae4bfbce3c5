//! CSV column extraction for the serving binary.
//!
//! The engine itself never touches files; this is the collaborator that
//! pulls one named column out of a CSV stream and validates the header
//! before the engine runs.

use crate::error::{AnalysisError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Extract the values of one named column from CSV data.
///
/// Returns `InvalidColumn` when the header row does not contain the
/// requested name. Rows shorter than the column index contribute an empty
/// value, which the extractor later rejects and counts.
pub fn extract_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| AnalysisError::InvalidColumn {
            name: column.to_string(),
        })?;

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        values.push(record.get(index).unwrap_or("").to_string());
    }

    debug!(
        column = %column,
        index = index,
        rows = values.len(),
        "Column extracted from CSV"
    );

    Ok(values)
}

/// Extract a column from a CSV file on disk.
pub fn extract_column_from_path<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<String>> {
    let file = File::open(path.as_ref()).map_err(|e| {
        AnalysisError::Csv(csv::Error::from(e))
    })?;
    extract_column(file, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,amount,merchant
1,123.45,alpha
2,67.80,beta
3,9100,gamma
";

    #[test]
    fn test_extract_existing_column() {
        let values = extract_column(SAMPLE.as_bytes(), "amount").unwrap();
        assert_eq!(values, vec!["123.45", "67.80", "9100"]);
    }

    #[test]
    fn test_missing_column_is_invalid() {
        let err = extract_column(SAMPLE.as_bytes(), "total").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidColumn { ref name } if name == "total"
        ));
    }

    #[test]
    fn test_short_rows_yield_empty_values() {
        let data = "a,b\n1,2\n3\n";
        let values = extract_column(data.as_bytes(), "b").unwrap();
        assert_eq!(values, vec!["2", ""]);
    }
}
