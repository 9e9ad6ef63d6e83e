//! Rolling win-rate trend.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::journal::{Trade, TradeId};

/// Configuration for the rolling win-rate trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Number of trailing closed trades in the rolling window.
    pub window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { window: 10 }
    }
}

/// One point of the rolling win-rate series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRatePoint {
    /// 1-based position in the closed-trade sequence.
    pub trade_number: usize,
    /// Win rate over the trailing window, as a percentage.
    pub win_rate: Decimal,
}

/// Rolling win rate over closed trades in chronological order.
///
/// Point `k` carries the win rate over the trailing
/// `min(window, k)` trades. The window is capped at the closed-trade
/// count, matching a rolling mean with a minimum period of one.
#[must_use]
pub fn win_rate_trend(trades: &[Trade], config: &TrendConfig) -> Vec<WinRatePoint> {
    let mut closed: Vec<(NaiveDate, TradeId, bool)> = trades
        .iter()
        .filter(|t| t.status().is_closed())
        .filter_map(|t| Some((t.exit_date()?, t.id(), t.profit_loss()?.is_positive())))
        .collect();
    closed.sort_by_key(|&(date, id, _)| (date, id));

    if closed.is_empty() {
        return Vec::new();
    }

    let window = config.window.clamp(1, closed.len());

    closed
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(window);
            let span = &closed[start..=i];
            let wins = span.iter().filter(|&&(_, _, win)| win).count();
            let rate = Decimal::from(wins) / Decimal::from(span.len()) * Decimal::ONE_HUNDRED;
            WinRatePoint {
                trade_number: i + 1,
                win_rate: rate,
            }
        })
        .collect()
}
