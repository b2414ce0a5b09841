//! UTC date conversion helpers

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use super::errors::AppError;

/// Parse an ISO date (or date-time) and return epoch seconds after shifting by `hour_offset` hours.
/// The input is read as UTC.
pub fn iso_to_unix(date: &str, hour_offset: i64) -> Result<i64, AppError> {
    let naive = parse_iso(date.trim()).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    let shifted = Duration::try_hours(hour_offset)
        .and_then(|offset| naive.checked_add_signed(offset))
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok(shifted.and_utc().timestamp())
}

/// Convert epoch seconds back to a UTC date-time
pub fn unix_to_date(timestamp: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or(AppError::InvalidTimestamp(timestamp))
}

/// Provider timestamps are milliseconds, sometimes with a fractional part
pub fn millis_to_datetime(millis: f64) -> Result<DateTime<Utc>, AppError> {
    let millis = millis as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(AppError::InvalidTimestamp(millis))
}

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_iso_to_unix_is_utc_midnight() {
        assert_eq!(iso_to_unix("2021-01-01", 0).unwrap(), 1_609_459_200);
    }

    #[test]
    fn test_hour_offset_is_applied() {
        let start = iso_to_unix("2021-01-01", 0).unwrap();
        let end = iso_to_unix("2021-01-01", 1).unwrap();
        assert_eq!(end - start, 3600);
    }

    #[test]
    fn test_round_trip_keeps_date_at_midnight() {
        let ts = iso_to_unix("2021-01-01", 0).unwrap();
        let dt = unix_to_date(ts).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_accepts_iso_datetime() {
        let ts = iso_to_unix("2021-03-04T12:30:00", 0).unwrap();
        let dt = unix_to_date(ts).unwrap();
        assert_eq!(dt.day(), 4);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_rejects_invalid_dates() {
        for bad in ["", "2021-13-01", "2021-02-30", "yesterday", "01/02/2021"] {
            assert!(matches!(iso_to_unix(bad, 0), Err(AppError::InvalidDate(_))), "{bad}");
        }
    }

    #[test]
    fn test_offset_past_last_representable_date() {
        let last = "+262142-12-31T23:30:00";
        assert!(iso_to_unix(last, 0).is_ok());
        assert!(matches!(iso_to_unix(last, 1), Err(AppError::InvalidDate(_))));
        assert!(matches!(iso_to_unix("2021-01-01", i64::MAX), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_millis_to_datetime() {
        let dt = millis_to_datetime(1_609_459_200_000.0).unwrap();
        assert_eq!(dt.timestamp(), 1_609_459_200);
    }

    #[test]
    fn test_unix_to_date_out_of_range() {
        assert!(matches!(unix_to_date(i64::MAX), Err(AppError::InvalidTimestamp(_))));
    }
}
