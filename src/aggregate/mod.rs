//! Daily resampling and rolling statistics over retained observations.

pub mod alignment;
pub mod resample;
pub mod rolling;

use crate::aggregate::alignment::DayOfYearAlignment;
use crate::aggregate::resample::{resample_daily_max, DailyMax};
use crate::aggregate::rolling::rolling_mean;
use crate::error::ConfigError;
use crate::types::daily::DailyAggregateRow;
use crate::types::observation::ObservationRow;
use log::debug;

pub const DEFAULT_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    window: usize,
    alignment: DayOfYearAlignment,
}

impl Aggregator {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWindow`] if `window` is zero.
    pub fn new(window: usize, alignment: DayOfYearAlignment) -> Result<Self, ConfigError> {
        if window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(Self { window, alignment })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn alignment(&self) -> DayOfYearAlignment {
        self.alignment
    }

    /// Resamples `rows` to one max-of-day row per date and adds the trailing
    /// rolling means, computed over the whole chronological series.
    pub fn aggregate(&self, rows: &[ObservationRow]) -> Vec<DailyAggregateRow> {
        let days = resample_daily_max(rows);
        debug!(
            "Resampled {} observations into {} days",
            rows.len(),
            days.len()
        );

        let rolling = |value: fn(&DailyMax) -> f64| {
            let series: Vec<f64> = days.iter().map(value).collect();
            rolling_mean(&series, self.window)
        };
        let wind_avg = rolling(|d| d.wind_speed_knots);
        let wind_gustavg = rolling(|d| d.wind_gust_knots);
        let gust_factor = rolling(|d| d.gust_differential_knots);

        days.iter()
            .enumerate()
            .map(|(i, day)| DailyAggregateRow {
                date: day.date,
                aligned_date: self.alignment.align(day.date),
                wind_speed_knots: day.wind_speed_knots,
                wind_gust_knots: day.wind_gust_knots,
                gust_differential_knots: day.gust_differential_knots,
                wind_avg: wind_avg[i],
                wind_gustavg: wind_gustavg[i],
                gust_factor: gust_factor[i],
            })
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            alignment: DayOfYearAlignment::default(),
        }
    }
}
