//! In-memory journal for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::analytics::PricePoint;
use crate::application::ports::{
    ReferencePricePort, RepositoryError, TradeFilter, TradeRepositoryPort,
};
use crate::domain::journal::{Trade, TradeId};
use crate::domain::shared::Money;

/// In-memory implementation of both collaborator ports.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    trades: RwLock<HashMap<i64, Trade>>,
    futures: RwLock<Vec<PricePoint>>,
    reference: RwLock<Vec<PricePoint>>,
}

impl InMemoryJournal {
    /// Create a new empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of trades in the journal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.read().unwrap().len()
    }

    /// Check if the journal has no trades.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.read().unwrap().is_empty()
    }

    /// Add a trade (for test setup).
    pub fn add_trade(&self, trade: Trade) {
        let mut trades = self.trades.write().unwrap();
        trades.insert(trade.id().as_i64(), trade);
    }

    /// Add a futures price observation (for test setup).
    pub fn add_futures_price(&self, point: PricePoint) {
        self.futures.write().unwrap().push(point);
    }

    /// Add a reference price observation (for test setup).
    pub fn add_reference_price(&self, point: PricePoint) {
        self.reference.write().unwrap().push(point);
    }

    /// Clear all trades and prices.
    pub fn clear(&self) {
        self.trades.write().unwrap().clear();
        self.futures.write().unwrap().clear();
        self.reference.write().unwrap().clear();
    }
}

#[async_trait]
impl TradeRepositoryPort for InMemoryJournal {
    async fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, RepositoryError> {
        let trades = self.trades.read().unwrap();
        let mut matching: Vec<Trade> = trades
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        // Stable snapshot ordering regardless of map iteration order.
        matching.sort_by_key(Trade::id);
        Ok(matching)
    }

    async fn find(&self, id: TradeId) -> Result<Option<Trade>, RepositoryError> {
        let trades = self.trades.read().unwrap();
        Ok(trades.get(&id.as_i64()).cloned())
    }

    async fn save(&self, trade: &Trade) -> Result<(), RepositoryError> {
        let mut trades = self.trades.write().unwrap();
        trades.insert(trade.id().as_i64(), trade.clone());
        Ok(())
    }
}

#[async_trait]
impl ReferencePricePort for InMemoryJournal {
    async fn futures_prices(&self) -> Result<Vec<PricePoint>, RepositoryError> {
        Ok(self.futures.read().unwrap().clone())
    }

    async fn reference_prices(&self) -> Result<Vec<PricePoint>, RepositoryError> {
        Ok(self.reference.read().unwrap().clone())
    }

    async fn latest_reference_price(&self) -> Result<Option<Money>, RepositoryError> {
        let reference = self.reference.read().unwrap();
        Ok(reference
            .iter()
            .max_by_key(|p| p.period)
            .map(|p| p.price))
    }
}
