use chrono::NaiveDate;

/// Max-of-day wind values for one calendar date plus their trailing rolling means.
///
/// The rolling means are `None` until the window has filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAggregateRow {
    pub date: NaiveDate,
    /// `date` moved onto the shared reference year.
    pub aligned_date: NaiveDate,
    pub wind_speed_knots: f64,
    pub wind_gust_knots: f64,
    pub gust_differential_knots: f64,
    pub wind_avg: Option<f64>,
    pub wind_gustavg: Option<f64>,
    pub gust_factor: Option<f64>,
}
