//! Turns raw report records into validated, time-indexed observation rows.

use crate::dataset::error::DatasetError;
use crate::filtering::ObservationFilter;
use crate::metar::decoder::decode;
use crate::types::observation::{DecodedObservation, ObservationRow, RawReportRecord};
use chrono::NaiveDateTime;
use log::{debug, info, warn};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Per-run record counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub records: usize,
    pub decode_failures: usize,
    pub outliers: usize,
    pub retained: usize,
}

/// Retained rows in input order, with the counts of what was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub rows: Vec<ObservationRow>,
    pub summary: BuildSummary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetBuilder {
    filter: ObservationFilter,
}

impl DatasetBuilder {
    pub fn new(filter: ObservationFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> ObservationFilter {
        self.filter
    }

    /// Decodes and filters `records`.
    ///
    /// Reports that fail to decode and observations the filter rejects are skipped.
    /// Rows keep the order of `records`; nothing is sorted here.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::TimestampParse`] for the first timestamp not in
    /// `YYYY-MM-DD HH:MM` form. This aborts the whole build.
    pub fn build(&self, records: &[RawReportRecord]) -> Result<Dataset, DatasetError> {
        let mut summary = BuildSummary {
            records: records.len(),
            ..Default::default()
        };
        let mut rows = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let timestamp = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT)
                .map_err(|source| DatasetError::TimestampParse {
                    row: index + 1,
                    value: record.timestamp.clone(),
                    source,
                })?;

            let report = match decode(&record.report) {
                Ok(report) => report,
                Err(e) => {
                    debug!("Skipping report at {}: {}", record.timestamp, e);
                    summary.decode_failures += 1;
                    continue;
                }
            };

            let observation = DecodedObservation::from_report(timestamp, &report);
            if !self.filter.is_valid(&observation) {
                debug!(
                    "Rejecting outlier at {}: wind {} kt, gust {} kt",
                    record.timestamp, observation.wind_speed_knots, observation.wind_gust_knots
                );
                summary.outliers += 1;
                continue;
            }

            rows.push(ObservationRow::from(observation));
        }

        summary.retained = rows.len();
        info!(
            "Built dataset: {} records, {} decode failures, {} outliers, {} retained",
            summary.records, summary.decode_failures, summary.outliers, summary.retained
        );
        if rows.is_empty() {
            warn!("No observations were retained");
        }
        Ok(Dataset { rows, summary })
    }
}
