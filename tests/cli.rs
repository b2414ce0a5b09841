use assert_cmd::Command;

fn btc_trend() -> Command {
    let mut cmd = Command::cargo_bin("btc-trend").unwrap();
    // keep the test offline even if a .env points somewhere real
    cmd.env("COINGECKO_BASE_URL", "http://127.0.0.1:9");
    cmd
}

#[test]
fn test_invalid_start_date_is_usage_error() {
    let output = btc_trend().args(["not-a-date", "2021-01-31"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid date"));
}

#[test]
fn test_invalid_end_date_is_usage_error() {
    let output = btc_trend().args(["2021-01-01", "2021-02-30"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid date"));
}

#[test]
fn test_missing_arguments() {
    btc_trend().assert().failure().code(2);
}

#[test]
fn test_unreachable_provider_exits_with_error() {
    let output = btc_trend().args(["2021-01-01", "2021-01-31"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Request Error"));
}

#[test]
fn test_help_lists_plot_flag() {
    let output = btc_trend().arg("--help").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--plot"));
}

#[test]
fn test_end_date_at_calendar_limit_is_usage_error() {
    let last = "+262142-12-31T23:30:00";
    let output = btc_trend().args([last, last]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid date"));
}
