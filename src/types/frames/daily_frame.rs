//! Contains `DailyWindFrame`, the aggregated output handed to presentation code.

use crate::error::WindStatsError;
use crate::types::daily::DailyAggregateRow;
use crate::types::metric::WindMetric;
use crate::types::period::AnyDate;
use crate::filtering::WindFrameFilterExt;
use chrono::{Datelike, NaiveDate};
use polars::prelude::{col, lit, Column, DataFrame, IntoLazy, LazyFrame, PolarsResult};
use std::collections::BTreeSet;

/// Chronological daily wind aggregates.
///
/// Rows are kept as plain structs; [`DailyWindFrame::frame`] materialises them as a
/// Polars `DataFrame` with the columns
/// `date`, `year`, `day_of_year`, `aligned_date`, `wind_speed`, `wind_gust`,
/// `gust_diff`, `wind_avg`, `wind_gustavg` and `gust_factor`.
///
/// An empty frame is valid and produces empty tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyWindFrame {
    rows: Vec<DailyAggregateRow>,
}

impl DailyWindFrame {
    pub fn new(rows: Vec<DailyAggregateRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DailyAggregateRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct observation years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.rows
            .iter()
            .map(|row| row.date.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Lazily keeps the rows dated within `start..=end`.
    ///
    /// `start` and `end` can be anything implementing [`AnyDate`], such as a
    /// `NaiveDate`, a [`crate::Year`] or a [`crate::Month`]. The start of `start`'s
    /// period and the end of `end`'s period are used. Rolling means are not
    /// recomputed, so they still reflect the days before `start`.
    ///
    /// # Errors
    ///
    /// Returns [`WindStatsError::DateParsing`] if either bound does not resolve to a date.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<LazyFrame, WindStatsError> {
        let start = *start
            .date_range()
            .ok_or(WindStatsError::DateParsing)?
            .start();
        let end = *end
            .date_range()
            .ok_or(WindStatsError::DateParsing)?
            .end();

        Ok(self.lazy()?.filter(
            col("date")
                .gt_eq(lit(start))
                .and(col("date").lt_eq(lit(end))),
        ))
    }

    /// Materialises all rows as a `DataFrame`.
    pub fn frame(&self) -> PolarsResult<DataFrame> {
        let rows = &self.rows;
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let years: Vec<i32> = rows.iter().map(|r| r.date.year()).collect();
        let days: Vec<u32> = rows.iter().map(|r| r.date.ordinal()).collect();
        let aligned: Vec<NaiveDate> = rows.iter().map(|r| r.aligned_date).collect();
        let speed: Vec<f64> = rows.iter().map(|r| r.wind_speed_knots).collect();
        let gust: Vec<f64> = rows.iter().map(|r| r.wind_gust_knots).collect();
        let diff: Vec<f64> = rows.iter().map(|r| r.gust_differential_knots).collect();

        let mut columns = vec![
            Column::new("date".into(), dates),
            Column::new("year".into(), years),
            Column::new("day_of_year".into(), days),
            Column::new("aligned_date".into(), aligned),
            Column::new("wind_speed".into(), speed),
            Column::new("wind_gust".into(), gust),
            Column::new("gust_diff".into(), diff),
        ];
        for metric in WindMetric::ALL {
            let values: Vec<Option<f64>> = rows.iter().map(|r| metric.value(r)).collect();
            columns.push(Column::new(metric.column_name().into(), values));
        }
        DataFrame::new(columns)
    }

    pub fn lazy(&self) -> PolarsResult<LazyFrame> {
        Ok(self.frame()?.lazy())
    }

    /// One rolling metric pivoted into a column per year, keyed by `aligned_date`.
    ///
    /// Each year column is named after the year. Days a year has no value for are
    /// null, and a requested year without any rows yields an all-null column.
    /// When several dates of one year share an aligned date, the later one wins.
    pub fn year_series(&self, metric: WindMetric, years: &[i32]) -> PolarsResult<DataFrame> {
        let mut wanted: Vec<i32> = Vec::with_capacity(years.len());
        for year in years {
            if !wanted.contains(year) {
                wanted.push(*year);
            }
        }

        let frame = self.lazy()?.sort(["date"], Default::default());
        let mut pivot = frame
            .clone()
            .filter_years(&wanted)
            .select([col("aligned_date").unique()]);
        for year in wanted {
            let series = frame
                .clone()
                .filter_year(year)
                .group_by([col("aligned_date")])
                .agg([col(metric.column_name()).last().alias(year.to_string())]);
            pivot = pivot.left_join(series, col("aligned_date"), col("aligned_date"));
        }
        pivot.sort(["aligned_date"], Default::default()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::period::{Month, Year};

    fn day(y: i32, m: u32, d: u32, avg: Option<f64>) -> DailyAggregateRow {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        DailyAggregateRow {
            date,
            aligned_date: date.with_year(2020).unwrap(),
            wind_speed_knots: 10.0,
            wind_gust_knots: 15.0,
            gust_differential_knots: 5.0,
            wind_avg: avg,
            wind_gustavg: avg.map(|v| v + 5.0),
            gust_factor: avg.map(|_| 5.0),
        }
    }

    fn sample() -> DailyWindFrame {
        DailyWindFrame::new(vec![
            day(2019, 6, 1, Some(8.0)),
            day(2019, 6, 2, Some(9.0)),
            day(2020, 6, 1, None),
            day(2020, 6, 3, Some(11.0)),
        ])
    }

    #[test]
    fn test_frame_columns() -> PolarsResult<()> {
        let df = sample().frame()?;
        assert_eq!(df.shape(), (4, 10));
        assert_eq!(
            df.get_column_names_str(),
            vec![
                "date",
                "year",
                "day_of_year",
                "aligned_date",
                "wind_speed",
                "wind_gust",
                "gust_diff",
                "wind_avg",
                "wind_gustavg",
                "gust_factor"
            ]
        );
        assert_eq!(df.column("wind_avg")?.null_count(), 1);
        Ok(())
    }

    #[test]
    fn test_empty_frame() -> PolarsResult<()> {
        let frame = DailyWindFrame::default();
        assert!(frame.is_empty());
        assert_eq!(frame.frame()?.height(), 0);
        let pivot = frame.year_series(WindMetric::AverageWind, &[2020, 2021])?;
        assert_eq!(pivot.shape(), (0, 3));
        Ok(())
    }

    #[test]
    fn test_year_series() -> PolarsResult<()> {
        let pivot = sample().year_series(WindMetric::AverageWind, &[2019, 2020, 2019, 2021])?;
        assert_eq!(pivot.get_column_names_str(), vec!["aligned_date", "2019", "2020", "2021"]);
        assert_eq!(pivot.height(), 3, "June 1st, 2nd and 3rd");

        let y2019: Vec<Option<f64>> = pivot
            .column("2019")?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(y2019, vec![Some(8.0), Some(9.0), None]);
        let y2020: Vec<Option<f64>> = pivot
            .column("2020")?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(y2020, vec![None, None, Some(11.0)]);
        assert_eq!(pivot.column("2021")?.null_count(), 3);
        Ok(())
    }

    #[test]
    fn test_year_series_later_date_wins() -> PolarsResult<()> {
        // Two dates of one year sharing an aligned date.
        let mut clamped = day(2021, 2, 28, Some(7.0));
        clamped.aligned_date = NaiveDate::from_ymd_opt(2020, 2, 28).unwrap();
        let mut later = day(2021, 3, 1, Some(12.0));
        later.aligned_date = clamped.aligned_date;
        let frame = DailyWindFrame::new(vec![later, clamped]);

        let pivot = frame.year_series(WindMetric::AverageWind, &[2021])?;
        assert_eq!(pivot.height(), 1);
        let values: Vec<Option<f64>> = pivot
            .column("2021")?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(12.0)]);
        Ok(())
    }

    #[test]
    fn test_years_and_range() -> Result<(), WindStatsError> {
        let frame = sample();
        assert_eq!(frame.years(), vec![2019, 2020]);

        let only_2020 = frame.get_range(Year(2020), Year(2020))?.collect()?;
        assert_eq!(only_2020.height(), 2);

        let june_2019 = frame.get_range(Month(2019, 6), "2019-06-01")?.collect()?;
        assert_eq!(june_2019.height(), 1);

        assert!(matches!(
            frame.get_range("bogus", Year(2020)),
            Err(WindStatsError::DateParsing)
        ));
        Ok(())
    }
}
