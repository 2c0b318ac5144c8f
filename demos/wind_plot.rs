//! demos/wind_plot.rs
//!
//! Reads a METAR archive, prints the daily wind table and plots each rolling
//! metric with one line per year, overlaid on a shared day-of-year axis.
//!
//! To run this example:
//! cargo run --example wind_plot --features examples -- metar.csv KSQL 2015 2016 2021

use std::error::Error;

use metar_wind::{WindMetric, WindStats};
use plotlars::{Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

// Sampled from the plasma colour map, dark to bright.
const PALETTE: [Rgb; 11] = [
    Rgb(13, 8, 135),
    Rgb(65, 4, 157),
    Rgb(106, 0, 168),
    Rgb(143, 13, 164),
    Rgb(177, 42, 144),
    Rgb(204, 71, 120),
    Rgb(225, 100, 98),
    Rgb(242, 132, 75),
    Rgb(252, 166, 54),
    Rgb(252, 206, 37),
    Rgb(240, 249, 33),
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "metar.csv".to_string());
    let station = args.next().unwrap_or_else(|| "KSQL".to_string());
    let requested: Vec<i32> = args.map(|a| a.parse()).collect::<Result<_, _>>()?;

    println!("Reading reports from {}...", path);
    let analysis = WindStats::default().analyze_csv(&path)?;
    println!("{:?}", analysis.summary);
    println!("{}", analysis.daily.frame()?);

    let years = if requested.is_empty() {
        let all = analysis.daily.years();
        all[all.len().saturating_sub(PALETTE.len())..].to_vec()
    } else {
        requested
    };
    if years.is_empty() {
        println!("No data to plot.");
        return Ok(());
    }

    for metric in WindMetric::ALL {
        let data = analysis.daily.year_series(metric, &years)?;
        plot_metric(&data, &station, metric, &years);
    }
    println!("Plots shown in browser.");

    Ok(())
}

// --- Plotting Helper Function ---

/// Plots one line per year column against 'aligned_date'. The last year is drawn solid.
fn plot_metric(data: &DataFrame, station: &str, metric: WindMetric, years: &[i32]) {
    let names: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    let additional: Vec<&str> = names[1..].iter().map(String::as_str).collect();
    let colors: Vec<Rgb> = PALETTE.iter().cloned().cycle().take(names.len()).collect();
    let lines: Vec<Line> = (0..names.len())
        .map(|i| if i + 1 == names.len() { Line::Solid } else { Line::Dot })
        .collect();

    let title = format!("{} METAR: {}", station, metric.title());

    TimeSeriesPlot::builder()
        .data(data)
        .x("aligned_date")
        .y(&names[0])
        .additional_series(additional)
        .colors(colors)
        .lines(lines)
        .plot_title(Text::from(title.as_str()).size(18))
        .legend(&Legend::new().x(0.05).y(0.95))
        .x_title("day of year")
        .y_title("KT")
        .build()
        .plot();
}
