use crate::metar::decoder::MetarReport;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// One input line: the observation timestamp as written in the file, and the raw report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReportRecord {
    pub timestamp: String,
    pub report: String,
}

impl RawReportRecord {
    pub fn new(timestamp: impl Into<String>, report: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            report: report.into(),
        }
    }
}

/// Wind values of a single decoded report, both in knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedObservation {
    pub timestamp: NaiveDateTime,
    pub wind_speed_knots: f64,
    /// Equal to `wind_speed_knots` when the report has no gust group.
    pub wind_gust_knots: f64,
}

impl DecodedObservation {
    pub fn from_report(timestamp: NaiveDateTime, report: &MetarReport) -> Self {
        Self {
            timestamp,
            wind_speed_knots: report.wind_speed_knots(),
            wind_gust_knots: report.wind_gust_knots(),
        }
    }
}

/// A retained observation with its derived calendar and gust fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRow {
    pub timestamp: NaiveDateTime,
    pub wind_speed_knots: f64,
    pub wind_gust_knots: f64,
    pub gust_differential_knots: f64,
    pub year: i32,
    /// Ordinal day in the observation's own calendar, 1..=366.
    pub day_of_year: u32,
}

impl ObservationRow {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl From<DecodedObservation> for ObservationRow {
    fn from(observation: DecodedObservation) -> Self {
        Self {
            timestamp: observation.timestamp,
            wind_speed_knots: observation.wind_speed_knots,
            wind_gust_knots: observation.wind_gust_knots,
            gust_differential_knots: observation.wind_gust_knots - observation.wind_speed_knots,
            year: observation.timestamp.year(),
            day_of_year: observation.timestamp.ordinal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metar::decoder::decode;

    #[test]
    fn test_no_gust_means_zero_differential() {
        let report = decode("KSQL 010000Z 09012KT 10SM CLR 10/05 A3000").unwrap();
        let timestamp = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let row = ObservationRow::from(DecodedObservation::from_report(timestamp, &report));
        assert_eq!(row.wind_speed_knots, 12.0);
        assert_eq!(row.wind_gust_knots, row.wind_speed_knots);
        assert_eq!(row.gust_differential_knots, 0.0);
    }

    #[test]
    fn test_derived_calendar_fields() {
        let timestamp = NaiveDate::from_ymd_opt(2020, 12, 31)
            .unwrap()
            .and_hms_opt(23, 55, 0)
            .unwrap();
        let row = ObservationRow::from(DecodedObservation {
            timestamp,
            wind_speed_knots: 8.0,
            wind_gust_knots: 19.0,
        });
        assert_eq!(row.year, 2020);
        assert_eq!(row.day_of_year, 366, "2020 is a leap year");
        assert_eq!(row.gust_differential_knots, 11.0);
        assert_eq!(row.date(), timestamp.date());
    }
}
