use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{Report, Series};
use crate::services::{analysis_service, chart_service, market_service};
use crate::utils::{iso_to_unix, unix_to_date, AppError};

/// Reference currency as printed in the report
pub const CURRENCY_LABEL: &str = "EUR";

/// Hours added to the end date's midnight so that day's sample is included
pub const END_HOUR_OFFSET: i64 = 1;

/// Fetch the daily series for `[start, end]` and print the three results
pub async fn execute(config: &Config, start: &str, end: &str, plot: bool) -> Result<(), AppError> {
    let from_timestamp = iso_to_unix(start, 0)?;
    let to_timestamp = iso_to_unix(end, END_HOUR_OFFSET)?;
    debug!("Requesting range {} .. {}", unix_to_date(from_timestamp)?, unix_to_date(to_timestamp)?);

    let client = config.client();
    debug!("Using CoinGecko at {}", client.base_url());
    let series = market_service::get_daily_series(&client, from_timestamp, to_timestamp).await?;
    info!("📈 Got {} daily samples between {} and {}", series.len(), start, end);

    let report = build_report(&series)?;
    println!("{}", report);

    if plot {
        let title = format!("{} price, {} to {}", market_service::COIN_ID, start, end);
        chart_service::show_chart(&series, &title, CURRENCY_LABEL, config.chart_width, config.chart_height)?;
    }

    Ok(())
}

/// Run all three analytics over one series
pub fn build_report(series: &Series) -> Result<Report, AppError> {
    if series.is_empty() {
        warn!("No midnight samples in range, nothing to analyze");
        return Err(AppError::EmptySeries);
    }

    let dates = series.dates();
    let prices = series.prices();
    let volumes = series.volumes();

    let volume_peak = analysis_service::highest_volume(&dates, &volumes).ok_or(AppError::EmptySeries)?;

    Ok(Report {
        downturn_days: analysis_service::longest_downturn(&prices),
        volume_peak,
        trade: analysis_service::best_buy_sell_dates(&dates, &prices),
        currency: CURRENCY_LABEL.to_string(),
    })
}
