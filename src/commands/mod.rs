pub mod analyze;

use clap::Parser;

use crate::config::Config;
use crate::utils::{iso_to_unix, AppError};

#[derive(Parser, Debug)]
#[command(
    name = "btc-trend",
    version,
    about = "Longest downturn, highest volume day and best buy/sell dates for bitcoin in EUR"
)]
pub struct Cli {
    /// start date in ISO format (YYYY-mm-dd)
    #[arg(value_parser = parse_iso_date)]
    pub start: String,

    /// end date in ISO format (YYYY-mm-dd)
    #[arg(value_parser = parse_end_date)]
    pub end: String,

    /// plot a price graph
    #[arg(long)]
    pub plot: bool,
}

/// Rejects anything `iso_to_unix` can't read so clap reports it as a usage error
fn parse_iso_date(value: &str) -> Result<String, String> {
    check_iso_date(value, 0)
}

/// The end date is queried one hour past its midnight, which must also be representable
fn parse_end_date(value: &str) -> Result<String, String> {
    check_iso_date(value, analyze::END_HOUR_OFFSET)
}

fn check_iso_date(value: &str, hour_offset: i64) -> Result<String, String> {
    iso_to_unix(value, hour_offset)
        .map(|_| value.trim().to_string())
        .map_err(|e| e.to_string())
}

pub async fn handle(cli: Cli, config: &Config) -> Result<(), AppError> {
    analyze::execute(config, &cli.start, &cli.end, cli.plot).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_dates_and_flag() {
        let cli = Cli::try_parse_from(["btc-trend", "2020-03-01", "2021-08-01", "--plot"]).unwrap();
        assert_eq!(cli.start, "2020-03-01");
        assert_eq!(cli.end, "2021-08-01");
        assert!(cli.plot);
    }

    #[test]
    fn test_plot_defaults_off() {
        let cli = Cli::try_parse_from(["btc-trend", "2020-03-01", "2021-08-01"]).unwrap();
        assert!(!cli.plot);
    }

    #[test]
    fn test_invalid_date_is_usage_error() {
        let err = Cli::try_parse_from(["btc-trend", "2020-02-31", "2021-08-01"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_end_date_without_room_for_offset() {
        let last = "+262142-12-31T23:30:00";
        assert!(Cli::try_parse_from(["btc-trend", last, "2021-08-01"]).is_ok());

        let err = Cli::try_parse_from(["btc-trend", "2021-08-01", last]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_missing_end_date() {
        assert!(Cli::try_parse_from(["btc-trend", "2020-03-01"]).is_err());
    }
}
