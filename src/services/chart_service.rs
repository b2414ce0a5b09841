use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDate;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::models::Series;
use crate::utils::AppError;

/// Y axis range with 10% padding around the observed prices
pub fn price_bounds(prices: &[f64]) -> (f64, f64) {
    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    ((min_price - padding).max(0.0), max_price + padding)
}

/// Draw the price line as a PNG at `path`, one label per month
pub fn render_chart(
    series: &Series,
    title: &str,
    currency: &str,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let samples = series.samples();
    if samples.len() < 2 {
        return Err(AppError::Chart("Not enough price data to draw a chart (minimum 2 days required)".to_string()));
    }

    let (y_min, y_max) = price_bounds(&series.prices());
    let x_min = samples[0].date;
    let x_max = samples[samples.len() - 1].date;

    let backend = BitMapBackend::new(path, (width, height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::Chart(format!("Failed to fill canvas: {}", e)))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((x_min..x_max).monthly(), y_min..y_max)
        .map_err(|e| AppError::Chart(format!("Failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .y_desc(format!("Price ({})", currency))
        .x_desc("Date")
        .draw()
        .map_err(|e| AppError::Chart(format!("Failed to draw mesh: {}", e)))?;

    chart
        .draw_series(LineSeries::new(samples.iter().map(|s| (s.date, s.price)), &BLUE))
        .map_err(|e| AppError::Chart(format!("Failed to draw line: {}", e)))?;

    root.present()
        .map_err(|e| AppError::Chart(format!("Failed to render chart: {}", e)))?;

    debug!("Chart written to {}", path.display());
    Ok(())
}

/// Temp file reused by every `--plot` run; the viewer may still hold it open after we exit
pub fn chart_path() -> PathBuf {
    std::env::temp_dir().join("btc_trend_chart.png")
}

/// Render the chart into the temp directory and open it in the desktop image viewer
pub fn show_chart(series: &Series, title: &str, currency: &str, width: u32, height: u32) -> Result<PathBuf, AppError> {
    let path = chart_path();
    render_chart(series, title, currency, &path, width, height)?;

    info!("Opening chart {}", path.display());
    viewer_command(&path)
        .spawn()
        .map_err(|e| AppError::Chart(format!("Failed to open chart viewer: {}", e)))?;

    Ok(path)
}

fn viewer_command(path: &Path) -> Command {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path);
    cmd
}
