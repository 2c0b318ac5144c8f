//! This module provides the main entry point: a configured pipeline that turns a
//! METAR archive into daily wind statistics aligned for year-over-year comparison.

use crate::aggregate::alignment::{DayOfYearAlignment, DEFAULT_REFERENCE_YEAR};
use crate::aggregate::{Aggregator, DEFAULT_WINDOW};
use crate::dataset::builder::{BuildSummary, DatasetBuilder};
use crate::dataset::loader::read_records;
use crate::error::{ConfigError, WindStatsError};
use crate::filtering::{ObservationFilter, DEFAULT_MAX_WIND_KNOTS};
use crate::types::frames::daily_frame::DailyWindFrame;
use crate::types::observation::{ObservationRow, RawReportRecord};
use bon::bon;
use std::path::Path;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct WindAnalysis {
    pub daily: DailyWindFrame,
    pub summary: BuildSummary,
}

/// The configured decode, filter and aggregate pipeline.
///
/// Create one with [`WindStats::builder()`]; every setting is optional.
///
/// # Examples
///
/// ```no_run
/// # use metar_wind::{WindStats, WindStatsError};
/// # fn main() -> Result<(), WindStatsError> {
/// let stats = WindStats::builder()
///     .max_wind_knots(40.0)
///     .window(7)
///     .reference_year(2020)
///     .build()?;
///
/// let analysis = stats.analyze_csv("metar.csv")?;
/// println!("{}", analysis.daily.frame()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WindStats {
    dataset_builder: DatasetBuilder,
    aggregator: Aggregator,
}

#[bon]
impl WindStats {
    /// Creates the pipeline.
    ///
    /// # Arguments
    ///
    /// * `max_wind_knots` - Observations with wind or gust above this are dropped. Defaults to 40.
    /// * `window` - Rolling mean window, in present daily rows. Defaults to 7.
    /// * `reference_year` - Year all dates are aligned onto. Defaults to 2020.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a negative or non-finite threshold, a zero
    /// window, or a reference year chrono cannot represent.
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_MAX_WIND_KNOTS)] max_wind_knots: f64,
        #[builder(default = DEFAULT_WINDOW)] window: usize,
        #[builder(default = DEFAULT_REFERENCE_YEAR)] reference_year: i32,
    ) -> Result<Self, ConfigError> {
        let filter = ObservationFilter::new(max_wind_knots)?;
        let alignment = DayOfYearAlignment::new(reference_year)?;
        Ok(Self {
            dataset_builder: DatasetBuilder::new(filter),
            aggregator: Aggregator::new(window, alignment)?,
        })
    }

    pub fn filter(&self) -> ObservationFilter {
        self.dataset_builder.filter()
    }

    pub fn aggregator(&self) -> Aggregator {
        self.aggregator
    }

    /// Reads a report archive and runs the whole pipeline on it.
    ///
    /// # Errors
    ///
    /// Returns [`WindStatsError::Dataset`] if the file cannot be read or holds a
    /// malformed timestamp. Undecodable reports and outliers are skipped silently.
    pub fn analyze_csv(&self, path: impl AsRef<Path>) -> Result<WindAnalysis, WindStatsError> {
        let records = read_records(path.as_ref())?;
        self.analyze_records(&records)
    }

    /// Runs the pipeline over records already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`WindStatsError::Dataset`] on the first malformed timestamp.
    pub fn analyze_records(
        &self,
        records: &[RawReportRecord],
    ) -> Result<WindAnalysis, WindStatsError> {
        let dataset = self.dataset_builder.build(records)?;
        Ok(WindAnalysis {
            daily: self.aggregate(&dataset.rows),
            summary: dataset.summary,
        })
    }

    pub fn aggregate(&self, rows: &[ObservationRow]) -> DailyWindFrame {
        DailyWindFrame::new(self.aggregator.aggregate(rows))
    }
}

impl Default for WindStats {
    fn default() -> Self {
        Self {
            dataset_builder: DatasetBuilder::default(),
            aggregator: Aggregator::default(),
        }
    }
}
