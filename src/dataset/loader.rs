//! Reads the raw report archive from disk.
//!
//! The expected layout is a header row followed by one report per line, with the
//! observation timestamp in the second column and the report body in the last.
//! All other columns are ignored.

use crate::dataset::error::DatasetError;
use crate::types::observation::RawReportRecord;
use log::info;
use polars::prelude::*;
use std::path::Path;

const TIMESTAMP_COLUMN: usize = 1;

/// Loads every data row of `path` as a [`RawReportRecord`], in file order.
///
/// Missing cells become empty strings, so an empty report body later fails to
/// decode and an empty timestamp fails to parse.
///
/// # Errors
///
/// Returns [`DatasetError::CsvRead`] if the file cannot be read or parsed as CSV and
/// [`DatasetError::MissingColumns`] if it has fewer than two columns.
pub fn read_records(path: &Path) -> Result<Vec<RawReportRecord>, DatasetError> {
    // Schema inference is disabled so every column stays text; archive columns
    // mix numbers with placeholders such as "M" or "T".
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DatasetError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| DatasetError::CsvRead(path.to_path_buf(), e))?;

    let columns = df.get_columns();
    if columns.len() <= TIMESTAMP_COLUMN {
        return Err(DatasetError::MissingColumns {
            path: path.to_path_buf(),
            found: columns.len(),
        });
    }
    let timestamps = text_column(path, &columns[TIMESTAMP_COLUMN])?;
    let reports = text_column(path, &columns[columns.len() - 1])?;

    let records: Vec<RawReportRecord> = timestamps
        .into_iter()
        .zip(reports)
        .map(|(timestamp, report)| {
            RawReportRecord::new(timestamp.unwrap_or_default(), report.unwrap_or_default())
        })
        .collect();

    info!("Read {} report records from {:?}", records.len(), path);
    Ok(records)
}

fn text_column<'a>(path: &Path, column: &'a Column) -> Result<&'a StringChunked, DatasetError> {
    column
        .as_materialized_series()
        .str()
        .map_err(|e| DatasetError::ColumnType {
            path: path.to_path_buf(),
            column: column.name().to_string(),
            source: e,
        })
}
