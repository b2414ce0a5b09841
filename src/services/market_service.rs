use chrono::Timelike;
use tracing::{debug, info};

use crate::api::coingecko::{CoinGeckoClient, MarketChart};
use crate::models::{Sample, Series};
use crate::utils::{millis_to_datetime, AppError};

/// Coin tracked by this tool
pub const COIN_ID: &str = "bitcoin";
/// Reference currency as sent to the API
pub const VS_CURRENCY: &str = "eur";

/// Fetch the market chart between two Unix timestamps and reduce it to one sample per day
pub async fn get_daily_series(
    client: &CoinGeckoClient,
    from_timestamp: i64,
    to_timestamp: i64,
) -> Result<Series, AppError> {
    info!("Fetching {}/{} market chart from {} to {}", COIN_ID, VS_CURRENCY, from_timestamp, to_timestamp);

    let chart = client
        .get_market_chart_range(COIN_ID, VS_CURRENCY, from_timestamp, to_timestamp)
        .await?;

    filter_daily(&chart)
}

/// Keep only the points stamped at hour 0 UTC. Days without such a point are skipped.
pub fn filter_daily(chart: &MarketChart) -> Result<Series, AppError> {
    if chart.prices.len() != chart.total_volumes.len() {
        return Err(AppError::MismatchedSeries {
            prices: chart.prices.len(),
            volumes: chart.total_volumes.len(),
        });
    }

    let mut samples = Vec::new();
    for (&[ts, price], &[_, volume]) in chart.prices.iter().zip(&chart.total_volumes) {
        let time = millis_to_datetime(ts)?;
        if time.hour() == 0 {
            samples.push(Sample::new(time.date_naive(), price, volume));
        }
    }

    debug!("Kept {} of {} raw points", samples.len(), chart.prices.len());
    Ok(Series::new(samples))
}
