//! Trade Repository Port (Driven Port)
//!
//! Interface to the storage collaborator that owns trade records. The
//! engine reads immutable snapshots through this port and hands closed
//! trades back for persistence.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::journal::{Trade, TradeId, TradeStatus};

/// Snapshot filter for [`TradeRepositoryPort::list_trades`].
///
/// All criteria are conjunctive; an empty filter selects every trade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFilter {
    /// Restrict to a lifecycle status.
    pub status: Option<TradeStatus>,
    /// Restrict to an instrument name.
    pub instrument: Option<String>,
    /// Earliest trade date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest trade date, inclusive.
    pub to: Option<NaiveDate>,
}

impl TradeFilter {
    /// Filter that selects every trade.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TradeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to an instrument name.
    #[must_use]
    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    /// Restrict to trades dated within `[from, to]`, inclusive.
    #[must_use]
    pub const fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Whether a trade satisfies every criterion.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(status) = self.status {
            if trade.status() != status {
                return false;
            }
        }
        if let Some(instrument) = &self.instrument {
            if trade.instrument() != Some(instrument.as_str()) {
                return false;
            }
        }
        if let Some(from) = self.from {
            if trade.trade_date() < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if trade.trade_date() > to {
                return false;
            }
        }
        true
    }
}

/// Storage collaborator errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Trade not found.
    #[error("Trade not found: {id}")]
    NotFound {
        /// The missing trade ID.
        id: TradeId,
    },

    /// Storage backend unavailable.
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for trade persistence.
#[async_trait]
pub trait TradeRepositoryPort: Send + Sync {
    /// List trades matching a filter, as an owned snapshot.
    async fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, RepositoryError>;

    /// Find a trade by ID.
    async fn find(&self, id: TradeId) -> Result<Option<Trade>, RepositoryError>;

    /// Save a trade (insert or update).
    async fn save(&self, trade: &Trade) -> Result<(), RepositoryError>;
}
