//! Calendar periods used to slice daily aggregates.

use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A calendar month, `Month(year, month)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// Anything that resolves to an inclusive range of dates.
pub trait AnyDate {
    /// `None` if the value does not describe a valid calendar period.
    fn date_range(self) -> Option<RangeInclusive<NaiveDate>>;
}

impl AnyDate for NaiveDate {
    fn date_range(self) -> Option<RangeInclusive<NaiveDate>> {
        Some(self..=self)
    }
}

impl AnyDate for &str {
    fn date_range(self) -> Option<RangeInclusive<NaiveDate>> {
        NaiveDate::parse_from_str(self, "%Y-%m-%d")
            .ok()?
            .date_range()
    }
}

impl AnyDate for Year {
    fn date_range(self) -> Option<RangeInclusive<NaiveDate>> {
        Some(NaiveDate::from_ymd_opt(self.0, 1, 1)?..=NaiveDate::from_ymd_opt(self.0, 12, 31)?)
    }
}

impl AnyDate for Month {
    fn date_range(self) -> Option<RangeInclusive<NaiveDate>> {
        let Month(year, month) = self;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(first..=next_first.pred_opt()?)
    }
}
