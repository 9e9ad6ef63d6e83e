//! Equity curve construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::journal::{Trade, TradeId};
use crate::domain::shared::Money;

/// One point on the cumulative P&L curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Zero-based position in the curve.
    pub sequence: usize,
    /// Exit date of the trade that produced this point.
    pub date: NaiveDate,
    /// The trade that produced this point.
    pub trade_id: TradeId,
    /// Running sum of realized P&L up to and including this trade.
    pub cumulative_pnl: Money,
}

/// Build the cumulative P&L curve over the closed trades in a set.
///
/// Closed trades are ordered by `(exit_date, id)` ascending, so the
/// same trade set always yields the same curve regardless of input
/// ordering. Open trades are ignored; an empty input yields an empty
/// curve.
#[must_use]
pub fn build_equity_curve(trades: &[Trade]) -> Vec<EquityPoint> {
    let mut closed: Vec<(NaiveDate, TradeId, Money)> = trades
        .iter()
        .filter(|t| t.status().is_closed())
        .filter_map(|t| Some((t.exit_date()?, t.id(), t.profit_loss()?)))
        .collect();
    closed.sort_by_key(|&(date, id, _)| (date, id));

    let mut cumulative = Money::ZERO;
    closed
        .into_iter()
        .enumerate()
        .map(|(sequence, (date, trade_id, pnl))| {
            cumulative += pnl;
            EquityPoint {
                sequence,
                date,
                trade_id,
                cumulative_pnl: cumulative,
            }
        })
        .collect()
}
