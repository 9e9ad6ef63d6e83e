//! Trade identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned trade identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TradeId(i64);

impl TradeId {
    /// Create a trade ID from its raw value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_id_roundtrip() {
        let id = TradeId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn trade_id_ordering() {
        assert!(TradeId::new(1) < TradeId::new(2));
    }

    #[test]
    fn trade_id_serde_transparent() {
        let json = serde_json::to_string(&TradeId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
