//! The three rolling series a daily aggregate exposes.

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::daily::DailyAggregateRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindMetric {
    /// Rolling mean of the daily maximum sustained wind.
    AverageWind,
    /// Rolling mean of the daily maximum gust.
    AverageGust,
    /// Rolling mean of the daily maximum gust differential.
    GustFactor,
}

impl WindMetric {
    pub const ALL: [WindMetric; 3] = [
        WindMetric::AverageWind,
        WindMetric::AverageGust,
        WindMetric::GustFactor,
    ];

    /// Column name used in frames.
    pub fn column_name(&self) -> &'static str {
        match self {
            WindMetric::AverageWind => "wind_avg",
            WindMetric::AverageGust => "wind_gustavg",
            WindMetric::GustFactor => "gust_factor",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WindMetric::AverageWind => "average winds",
            WindMetric::AverageGust => "gusts",
            WindMetric::GustFactor => "gust factor",
        }
    }

    pub fn value(&self, row: &DailyAggregateRow) -> Option<f64> {
        match self {
            WindMetric::AverageWind => row.wind_avg,
            WindMetric::AverageGust => row.wind_gustavg,
            WindMetric::GustFactor => row.gust_factor,
        }
    }
}

impl Display for WindMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
