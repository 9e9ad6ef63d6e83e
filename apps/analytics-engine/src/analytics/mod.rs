//! Trade Performance Analytics Engine
//!
//! Pure, synchronous computations over immutable trade/price snapshots.
//! Every function recomputes from its input; nothing here holds state
//! between calls, so a host can never observe staleness.

pub mod breakdown;
pub mod comparison;
pub mod drawdown;
pub mod equity;
pub mod hedging;
pub mod summary;
pub mod trend;

pub use breakdown::{Dimension, UNKNOWN_KEY, breakdown};
pub use comparison::{PriceComparisonPoint, PricePoint, compare};
pub use drawdown::{DrawdownMarker, DrawdownResult, analyze};
pub use equity::{EquityPoint, build_equity_curve};
pub use hedging::{HedgeSnapshot, hedge_snapshot};
pub use summary::{StatsSummary, summarize};
pub use trend::{TrendConfig, WinRatePoint, win_rate_trend};
