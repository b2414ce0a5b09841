use thiserror::Error;

use crate::api::coingecko::ApiError;

/// Errors raised while fetching and analyzing a price series
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
    #[error("Provider error: {0}")]
    Api(#[from] ApiError),
    #[error("Mismatched series: {prices} prices but {volumes} volumes")]
    MismatchedSeries { prices: usize, volumes: usize },
    #[error("No daily samples found in the requested range")]
    EmptySeries,
    #[error("Chart error: {0}")]
    Chart(String),
}
