use chrono::NaiveDate;

use crate::models::{TradeWindow, VolumePeak};

/// Length in days of the longest run of strictly falling prices.
/// The day the run starts from counts too, so one drop is a 2-day downturn.
pub fn longest_downturn(prices: &[f64]) -> usize {
    let mut streak = 0;
    let mut longest = 0;

    for pair in prices.windows(2) {
        if pair[1] < pair[0] {
            streak += 1;
            longest = longest.max(streak);
        } else {
            streak = 0;
        }
    }

    if longest > 0 {
        longest + 1
    } else {
        0
    }
}

/// Date and value of the largest volume; the earliest date wins ties
pub fn highest_volume(dates: &[NaiveDate], volumes: &[f64]) -> Option<VolumePeak> {
    let mut best: Option<VolumePeak> = None;

    for (&date, &volume) in dates.iter().zip(volumes) {
        match best {
            Some(peak) if volume <= peak.volume => {}
            _ => best = Some(VolumePeak { date, volume }),
        }
    }

    best
}

/// Best single buy then sell, found in one pass over the prices
pub fn best_buy_sell_dates(dates: &[NaiveDate], prices: &[f64]) -> TradeWindow {
    let len = dates.len().min(prices.len());
    if len < 2 {
        return TradeWindow::NoProfit;
    }

    let mut min_index = 0;
    let mut best: Option<(usize, usize, f64)> = None;

    for i in 1..len {
        let profit = prices[i] - prices[min_index];
        if best.map_or(true, |(_, _, max)| profit > max) {
            best = Some((min_index, i, profit));
        }
        if prices[i] < prices[min_index] {
            min_index = i;
        }
    }

    match best {
        Some((buy, sell, profit)) if profit > 0.0 => TradeWindow::Profitable {
            buy: dates[buy],
            sell: dates[sell],
            profit,
        },
        _ => TradeWindow::NoProfit,
    }
}
