//! Per-dimension statistics breakdowns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::summary::{StatsSummary, summarize};
use crate::domain::journal::Trade;
use crate::domain::shared::Period;

/// Bucket key for trades with no value in the selected dimension.
pub const UNKNOWN_KEY: &str = "unknown";

/// Grouping dimension for a statistics breakdown.
///
/// Each variant carries its own key extraction, so an invalid dimension
/// request is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Group by product name.
    Instrument,
    /// Group by long/short direction.
    Direction,
    /// Group by the calendar month of the trade date.
    Month,
}

impl Dimension {
    /// The bucket key a trade falls into for this dimension.
    ///
    /// Trades with a missing dimension value land in the reserved
    /// [`UNKNOWN_KEY`] bucket rather than being dropped.
    #[must_use]
    pub fn key_of(self, trade: &Trade) -> String {
        match self {
            Self::Instrument => trade
                .instrument()
                .map_or_else(|| UNKNOWN_KEY.to_string(), str::to_string),
            Self::Direction => trade.direction().as_str().to_string(),
            Self::Month => Period::from_date(trade.trade_date()).to_string(),
        }
    }
}

/// Group trades by a dimension and summarize each group.
///
/// Every input trade lands in exactly one bucket, so bucket trade
/// counts always sum to the input count.
#[must_use]
pub fn breakdown(trades: &[Trade], dimension: Dimension) -> BTreeMap<String, StatsSummary> {
    let mut groups: BTreeMap<String, Vec<Trade>> = BTreeMap::new();
    for trade in trades {
        groups
            .entry(dimension.key_of(trade))
            .or_default()
            .push(trade.clone());
    }

    groups
        .into_iter()
        .map(|(key, group)| (key, summarize(&group)))
        .collect()
}
