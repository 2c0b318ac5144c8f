mod aggregate;
mod dataset;
mod error;
mod filtering;
mod metar;
mod types;
mod wind_stats;

pub use error::{ConfigError, WindStatsError};
pub use wind_stats::*;

pub use filtering::{ObservationFilter, WindFrameFilterExt, DEFAULT_MAX_WIND_KNOTS};

pub use metar::decoder::{decode, MetarReport, ReportKind};
pub use metar::error::DecodeError;
pub use metar::wind::{Speed, SpeedUnit, WindDirection, WindGroup};

pub use dataset::builder::{BuildSummary, Dataset, DatasetBuilder, TIMESTAMP_FORMAT};
pub use dataset::error::DatasetError;
pub use dataset::loader::read_records;

pub use aggregate::alignment::{DayOfYearAlignment, DEFAULT_REFERENCE_YEAR};
pub use aggregate::resample::{resample_daily_max, DailyMax};
pub use aggregate::rolling::rolling_mean;
pub use aggregate::{Aggregator, DEFAULT_WINDOW};

pub use types::daily::DailyAggregateRow;
pub use types::frames::daily_frame::DailyWindFrame;
pub use types::metric::WindMetric;
pub use types::observation::{DecodedObservation, ObservationRow, RawReportRecord};
pub use types::period::{AnyDate, Month, Year};
