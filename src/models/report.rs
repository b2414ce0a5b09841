//! Analysis result models

use std::fmt;

use chrono::NaiveDate;

use crate::utils::format_amount;

/// Day with the highest trading volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePeak {
    pub date: NaiveDate,
    pub volume: f64,
}

/// Outcome of the best buy/sell search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeWindow {
    Profitable {
        buy: NaiveDate,
        sell: NaiveDate,
        profit: f64,
    },
    NoProfit,
}

impl TradeWindow {
    /// Buy and sell dates as ISO strings, `-` when no trade makes money
    pub fn dates(&self) -> (String, String) {
        match self {
            TradeWindow::Profitable { buy, sell, .. } => (buy.to_string(), sell.to_string()),
            TradeWindow::NoProfit => ("-".to_string(), "-".to_string()),
        }
    }
}

/// Everything printed for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub downturn_days: usize,
    pub volume_peak: VolumePeak,
    pub trade: TradeWindow,
    pub currency: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (buy, sell) = self.trade.dates();
        writeln!(f, "Longest downturn: {} days", self.downturn_days)?;
        writeln!(
            f,
            "Highest trading volume: {} {} on {}",
            format_amount(self.volume_peak.volume),
            self.currency,
            self.volume_peak.date
        )?;
        write!(f, "Best buy date: {}, sell date: {}", buy, sell)
    }
}
