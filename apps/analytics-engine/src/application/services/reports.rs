//! Assembled report values returned by the analytics service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analytics::{
    DrawdownResult, EquityPoint, HedgeSnapshot, PriceComparisonPoint, StatsSummary, WinRatePoint,
};

/// Full trading-performance report over one trade snapshot.
///
/// Plain structured values with no embedded formatting; the
/// presentation collaborator serializes or renders them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Aggregate statistics over the whole snapshot.
    pub summary: StatsSummary,
    /// Cumulative P&L curve of closed trades.
    pub equity_curve: Vec<EquityPoint>,
    /// Maximum drawdown of the equity curve.
    pub drawdown: DrawdownResult,
    /// Per-instrument statistics.
    pub by_instrument: BTreeMap<String, StatsSummary>,
    /// Per-direction statistics.
    pub by_direction: BTreeMap<String, StatsSummary>,
    /// Per-month statistics.
    pub by_month: BTreeMap<String, StatsSummary>,
    /// Rolling win-rate series.
    pub win_rate_trend: Vec<WinRatePoint>,
}

/// Physical-hedging report: price averages and the futures/reference
/// comparison series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgeReport {
    /// Weighted-average prices and discounts vs the reference price.
    pub snapshot: HedgeSnapshot,
    /// Period-aligned futures vs reference series for the discount
    /// chart.
    pub comparison: Vec<PriceComparisonPoint>,
}
