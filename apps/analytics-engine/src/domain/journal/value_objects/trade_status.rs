//! Trade lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position lifecycle status.
///
/// A trade starts `Open` and transitions to `Closed` exactly once.
/// `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    /// Position is open; no realized P&L yet.
    Open,
    /// Position has been closed and P&L realized.
    Closed,
}

impl TradeStatus {
    /// Returns true if the trade is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if the trade has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_status_predicates() {
        assert!(TradeStatus::Open.is_open());
        assert!(!TradeStatus::Open.is_closed());
        assert!(TradeStatus::Closed.is_closed());
        assert!(!TradeStatus::Closed.is_open());
    }

    #[test]
    fn trade_status_serde() {
        let json = serde_json::to_string(&TradeStatus::Closed).unwrap();
        assert_eq!(json, "\"closed\"");
    }

    #[test]
    fn trade_status_display() {
        assert_eq!(format!("{}", TradeStatus::Open), "open");
        assert_eq!(format!("{}", TradeStatus::Closed), "closed");
    }
}
