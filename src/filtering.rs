use crate::error::ConfigError;
use crate::types::observation::DecodedObservation;
use polars::prelude::{col, lit, Expr, LazyFrame};

/// Historical cutoff above which a wind value is treated as a decoding artifact
/// or sensor error rather than a real event.
pub const DEFAULT_MAX_WIND_KNOTS: f64 = 40.0;

/// Validity rule applied to every decoded observation.
///
/// Rejects an observation if either its sustained wind or its gust exceeds the
/// threshold. Values equal to the threshold are kept, as are calm reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationFilter {
    max_wind_knots: f64,
}

impl ObservationFilter {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] for negative or non-finite thresholds.
    pub fn new(max_wind_knots: f64) -> Result<Self, ConfigError> {
        if !max_wind_knots.is_finite() || max_wind_knots < 0.0 {
            return Err(ConfigError::InvalidThreshold(max_wind_knots));
        }
        Ok(Self { max_wind_knots })
    }

    pub fn max_wind_knots(&self) -> f64 {
        self.max_wind_knots
    }

    pub fn is_valid(&self, observation: &DecodedObservation) -> bool {
        observation.wind_speed_knots <= self.max_wind_knots
            && observation.wind_gust_knots <= self.max_wind_knots
    }
}

impl Default for ObservationFilter {
    fn default() -> Self {
        Self {
            max_wind_knots: DEFAULT_MAX_WIND_KNOTS,
        }
    }
}

pub trait WindFrameFilterExt {
    /// Keeps the rows of a single observation year.
    /// Assumes an integer 'year' column.
    fn filter_year(self, year: i32) -> LazyFrame;

    /// Keeps the rows whose 'year' is any of `years`.
    fn filter_years(self, years: &[i32]) -> LazyFrame;
}

impl WindFrameFilterExt for LazyFrame {
    fn filter_year(self, year: i32) -> LazyFrame {
        self.filter(col("year").eq(lit(year)))
    }

    fn filter_years(self, years: &[i32]) -> LazyFrame {
        let predicate = years
            .iter()
            .map(|year| col("year").eq(lit(*year)))
            .reduce(Expr::or)
            .unwrap_or_else(|| lit(false));
        self.filter(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::df;
    use polars::prelude::{IntoLazy, PolarsResult};

    fn observation(speed: f64, gust: f64) -> DecodedObservation {
        DecodedObservation {
            timestamp: NaiveDate::from_ymd_opt(2021, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            wind_speed_knots: speed,
            wind_gust_knots: gust,
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let filter = ObservationFilter::default();
        assert!(filter.is_valid(&observation(40.0, 40.0)));
        assert!(!filter.is_valid(&observation(41.0, 41.0)));
        assert!(!filter.is_valid(&observation(20.0, 41.0)));
        assert!(filter.is_valid(&observation(0.0, 0.0)), "calm reports are kept");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ObservationFilter::default();
        for obs in [observation(12.0, 30.0), observation(39.0, 45.0)] {
            assert_eq!(filter.is_valid(&obs), filter.is_valid(&obs));
        }
    }

    #[test]
    fn test_configured_threshold() -> Result<(), ConfigError> {
        let filter = ObservationFilter::new(25.0)?;
        assert_eq!(filter.max_wind_knots(), 25.0);
        assert!(filter.is_valid(&observation(10.0, 25.0)));
        assert!(!filter.is_valid(&observation(10.0, 26.0)));
        assert!(ObservationFilter::new(-1.0).is_err());
        assert!(ObservationFilter::new(f64::NAN).is_err());
        Ok(())
    }

    #[test]
    fn test_filter_years() -> PolarsResult<()> {
        let frame = df!(
            "year" => [2019i32, 2020, 2020, 2021],
            "wind_avg" => [1.0f64, 2.0, 3.0, 4.0]
        )?;

        let one = frame.clone().lazy().filter_year(2020).collect()?;
        assert_eq!(one.height(), 2);

        let many = frame.clone().lazy().filter_years(&[2019, 2021]).collect()?;
        assert_eq!(many.height(), 2);

        let none = frame.lazy().filter_years(&[]).collect()?;
        assert_eq!(none.height(), 0);
        Ok(())
    }
}
