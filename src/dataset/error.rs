use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read CSV file '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("CSV file '{path}' has {found} column(s), at least 2 are required")]
    MissingColumns { path: PathBuf, found: usize },

    #[error("Column '{column}' in '{path}' could not be read as text")]
    ColumnType {
        path: PathBuf,
        column: String,
        #[source]
        source: PolarsError,
    },

    // Timestamps are assumed well formed, so one bad value means the file is corrupt.
    #[error("Invalid timestamp '{value}' on data row {row}, expected YYYY-MM-DD HH:MM")]
    TimestampParse {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
