use crate::types::observation::ObservationRow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Maxima of one calendar day, each column taken independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyMax {
    pub date: NaiveDate,
    pub wind_speed_knots: f64,
    pub wind_gust_knots: f64,
    pub gust_differential_knots: f64,
}

impl DailyMax {
    fn from_row(row: &ObservationRow) -> Self {
        Self {
            date: row.date(),
            wind_speed_knots: row.wind_speed_knots,
            wind_gust_knots: row.wind_gust_knots,
            gust_differential_knots: row.gust_differential_knots,
        }
    }

    fn absorb(&mut self, row: &ObservationRow) {
        self.wind_speed_knots = self.wind_speed_knots.max(row.wind_speed_knots);
        self.wind_gust_knots = self.wind_gust_knots.max(row.wind_gust_knots);
        self.gust_differential_knots = self
            .gust_differential_knots
            .max(row.gust_differential_knots);
    }
}

/// Groups rows by calendar date and keeps the per-column maximum.
///
/// Output is chronological whatever the input order. Dates without rows are
/// absent, not filled.
pub fn resample_daily_max(rows: &[ObservationRow]) -> Vec<DailyMax> {
    let mut days: BTreeMap<NaiveDate, DailyMax> = BTreeMap::new();
    for row in rows {
        days.entry(row.date())
            .and_modify(|day| day.absorb(row))
            .or_insert_with(|| DailyMax::from_row(row));
    }
    days.into_values().collect()
}
