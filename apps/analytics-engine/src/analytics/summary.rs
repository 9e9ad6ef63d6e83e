//! Aggregate win/loss statistics over a trade set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::drawdown;
use super::equity::build_equity_curve;
use crate::domain::journal::Trade;
use crate::domain::shared::Money;

/// Aggregate counters and ratios for a trade set.
///
/// Every ratio and average is `None` when its denominator is zero, so
/// the presentation layer can render "N/A" instead of a misleading
/// zero. A profit factor with zero gross loss is also `None` rather
/// than an infinite magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// All trades in the set, open and closed.
    pub total_trades: usize,
    /// Trades still open.
    pub open_trades: usize,
    /// Trades that have been closed.
    pub closed_trades: usize,
    /// Closed trades with positive P&L.
    pub winning_trades: usize,
    /// Closed trades with zero or negative P&L.
    pub losing_trades: usize,
    /// `winning / closed`, as a fraction.
    pub win_rate: Option<Decimal>,
    /// Sum of positive trade P&L.
    pub gross_profit: Money,
    /// Sum of negative trade P&L, as a positive magnitude.
    pub gross_loss: Money,
    /// Net realized P&L over all closed trades.
    pub net_profit: Money,
    /// `gross_profit / gross_loss`.
    pub profit_factor: Option<Decimal>,
    /// Mean P&L of winning trades.
    pub avg_win: Option<Money>,
    /// Mean P&L of losing trades, signed negative.
    pub avg_loss: Option<Money>,
    /// Best single-trade P&L.
    pub largest_win: Option<Money>,
    /// Worst single-trade P&L, signed negative.
    pub largest_loss: Option<Money>,
    /// `win_rate * avg_win + (1 - win_rate) * avg_loss`.
    pub expectancy: Option<Money>,
    /// Commissions across all trades, open included.
    pub total_fees: Money,
    /// Maximum drawdown of the equity curve over this set.
    pub max_drawdown: Money,
}

/// Compute aggregate statistics for a trade set.
///
/// P&L-derived metrics use closed trades only; open trades count into
/// `total_trades`, `open_trades` and `total_fees`. A closed trade with
/// zero P&L counts as a loss for the win rate.
#[must_use]
pub fn summarize(trades: &[Trade]) -> StatsSummary {
    let total_trades = trades.len();
    let total_fees: Money = trades.iter().map(Trade::fee).sum();

    let pnls: Vec<Money> = trades
        .iter()
        .filter(|t| t.status().is_closed())
        .filter_map(Trade::profit_loss)
        .collect();
    let closed_trades = pnls.len();
    let open_trades = total_trades - closed_trades;

    let mut gross_profit = Money::ZERO;
    let mut gross_loss = Money::ZERO;
    let mut net_profit = Money::ZERO;
    let mut winning_trades = 0usize;
    let mut negative_trades = 0usize;
    let mut largest_win: Option<Money> = None;
    let mut largest_loss: Option<Money> = None;

    for &pnl in &pnls {
        net_profit += pnl;
        if pnl.is_positive() {
            gross_profit += pnl;
            winning_trades += 1;
            largest_win = Some(largest_win.map_or(pnl, |w| w.max(pnl)));
        } else if pnl.is_negative() {
            gross_loss += pnl.abs();
            negative_trades += 1;
            largest_loss = Some(largest_loss.map_or(pnl, |l| l.min(pnl)));
        }
    }

    let losing_trades = closed_trades - winning_trades;

    let win_rate = (closed_trades > 0)
        .then(|| Decimal::from(winning_trades) / Decimal::from(closed_trades));

    let profit_factor = gross_loss
        .is_positive()
        .then(|| gross_profit.amount() / gross_loss.amount());

    let avg_win = (winning_trades > 0)
        .then(|| Money::new(gross_profit.amount() / Decimal::from(winning_trades)));

    let avg_loss = (negative_trades > 0)
        .then(|| Money::new(-(gross_loss.amount() / Decimal::from(negative_trades))));

    let expectancy = win_rate.map(|rate| {
        let win_leg = avg_win.unwrap_or(Money::ZERO) * rate;
        let loss_leg = avg_loss.unwrap_or(Money::ZERO) * (Decimal::ONE - rate);
        win_leg + loss_leg
    });

    let max_drawdown = drawdown::analyze(&build_equity_curve(trades)).max_drawdown;

    StatsSummary {
        total_trades,
        open_trades,
        closed_trades,
        winning_trades,
        losing_trades,
        win_rate,
        gross_profit,
        gross_loss,
        net_profit,
        profit_factor,
        avg_win,
        avg_loss,
        largest_win,
        largest_loss,
        expectancy,
        total_fees,
        max_drawdown,
    }
}
