//! Analytics orchestration service.

use std::sync::Arc;

use chrono::NaiveDate;

use super::errors::AnalyticsError;
use super::reports::{HedgeReport, PerformanceReport};
use crate::analytics::{
    Dimension, TrendConfig, breakdown, build_equity_curve, compare, drawdown, hedge_snapshot,
    summarize, win_rate_trend,
};
use crate::application::ports::{
    ReferencePricePort, RepositoryError, TradeFilter, TradeRepositoryPort,
};
use crate::domain::journal::{Trade, TradeId};
use crate::domain::shared::Money;

/// Orchestrates the pure analytics engine over collaborator snapshots.
///
/// Pulls an owned snapshot from the ports, runs the synchronous engine
/// over it, and returns assembled reports. The service holds no trade
/// state of its own; every call recomputes from a fresh snapshot.
pub struct AnalyticsService<T, P>
where
    T: TradeRepositoryPort,
    P: ReferencePricePort,
{
    trades: Arc<T>,
    prices: Arc<P>,
    trend: TrendConfig,
}

impl<T, P> AnalyticsService<T, P>
where
    T: TradeRepositoryPort,
    P: ReferencePricePort,
{
    /// Create a new service over the given collaborators.
    pub fn new(trades: Arc<T>, prices: Arc<P>) -> Self {
        Self {
            trades,
            prices,
            trend: TrendConfig::default(),
        }
    }

    /// Override the rolling win-rate window.
    #[must_use]
    pub const fn with_trend_config(mut self, trend: TrendConfig) -> Self {
        self.trend = trend;
        self
    }

    /// Build the full performance report for trades matching a filter.
    ///
    /// # Errors
    ///
    /// Returns error if the storage collaborator fails.
    pub async fn performance_report(
        &self,
        filter: &TradeFilter,
    ) -> Result<PerformanceReport, AnalyticsError> {
        let trades = self.trades.list_trades(filter).await?;
        tracing::debug!(trade_count = trades.len(), "building performance report");

        let summary = summarize(&trades);
        let equity_curve = build_equity_curve(&trades);
        let drawdown = drawdown::analyze(&equity_curve);

        Ok(PerformanceReport {
            summary,
            drawdown,
            by_instrument: breakdown(&trades, Dimension::Instrument),
            by_direction: breakdown(&trades, Dimension::Direction),
            by_month: breakdown(&trades, Dimension::Month),
            win_rate_trend: win_rate_trend(&trades, &self.trend),
            equity_curve,
        })
    }

    /// Build the hedging report for trades matching a filter.
    ///
    /// # Errors
    ///
    /// Returns error if a collaborator fails.
    pub async fn hedge_report(&self, filter: &TradeFilter) -> Result<HedgeReport, AnalyticsError> {
        let trades = self.trades.list_trades(filter).await?;
        let futures = self.prices.futures_prices().await?;
        let reference = self.prices.reference_prices().await?;
        let latest = self.prices.latest_reference_price().await?;
        tracing::debug!(
            trade_count = trades.len(),
            futures_points = futures.len(),
            reference_points = reference.len(),
            "building hedge report"
        );

        Ok(HedgeReport {
            snapshot: hedge_snapshot(&trades, latest),
            comparison: compare(&futures, &reference),
        })
    }

    /// Close an open trade and persist the result.
    ///
    /// Loads the trade, applies the domain close transition, saves the
    /// closed value back, and returns it.
    ///
    /// # Errors
    ///
    /// Returns error if the trade is missing, already closed, the exit
    /// parameters are invalid, or the storage collaborator fails.
    pub async fn close_trade(
        &self,
        id: TradeId,
        exit_price: Money,
        exit_date: NaiveDate,
    ) -> Result<Trade, AnalyticsError> {
        let trade = self
            .trades
            .find(id)
            .await?
            .ok_or(RepositoryError::NotFound { id })?;

        let closed = trade.close(exit_price, exit_date)?;
        self.trades.save(&closed).await?;

        tracing::info!(
            trade_id = id.as_i64(),
            exit_price = %exit_price,
            "trade closed"
        );
        Ok(closed)
    }
}
