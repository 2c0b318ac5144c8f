//! Moves dates of different years onto one shared calendar so the years can be
//! overlaid on a single axis.

use crate::error::ConfigError;
use chrono::{Datelike, NaiveDate};

/// Leap reference year, so every month/day pair exists on the shared axis.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2020;

/// Maps a date onto the same month and day of a fixed reference year.
///
/// 29 February only exists on a leap reference year. With a non-leap reference
/// year it is clamped onto 28 February.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfYearAlignment {
    reference_year: i32,
    reference_start: NaiveDate,
}

impl DayOfYearAlignment {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidReferenceYear`] if the year has no 1 January
    /// in chrono's supported range.
    pub fn new(reference_year: i32) -> Result<Self, ConfigError> {
        let reference_start = NaiveDate::from_ymd_opt(reference_year, 1, 1)
            .and_then(|start| NaiveDate::from_ymd_opt(reference_year, 12, 31).map(|_| start))
            .ok_or(ConfigError::InvalidReferenceYear(reference_year))?;
        Ok(Self {
            reference_year,
            reference_start,
        })
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn is_leap_reference(&self) -> bool {
        NaiveDate::from_ymd_opt(self.reference_year, 2, 29).is_some()
    }

    pub fn align(&self, date: NaiveDate) -> NaiveDate {
        date.with_year(self.reference_year)
            .or_else(|| {
                date.pred_opt()
                    .and_then(|day_before| day_before.with_year(self.reference_year))
            })
            .unwrap_or(self.reference_start)
    }

    /// Ordinal of the aligned date within the reference year.
    pub fn aligned_day_of_year(&self, date: NaiveDate) -> u32 {
        self.align(date).ordinal()
    }
}

impl Default for DayOfYearAlignment {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            reference_start: NaiveDate::from_ymd_opt(DEFAULT_REFERENCE_YEAR, 1, 1)
                .unwrap_or_default(),
        }
    }
}
