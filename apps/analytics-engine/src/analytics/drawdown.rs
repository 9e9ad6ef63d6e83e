//! Maximum drawdown analysis over an equity curve.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::equity::EquityPoint;
use crate::domain::shared::Money;

/// Location of a drawdown peak or trough on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownMarker {
    /// Index into the equity curve.
    pub index: usize,
    /// Date of the curve point.
    pub date: NaiveDate,
}

/// Maximum drawdown and the peak/trough pair that produced it.
///
/// Markers are absent when the curve has no positive drawdown (empty,
/// single-point, or never-declining curves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownResult {
    /// Largest peak-to-trough decline in cumulative P&L. Never negative.
    pub max_drawdown: Money,
    /// The running peak preceding the maximum drawdown.
    pub peak: Option<DrawdownMarker>,
    /// The trough that produced the maximum drawdown.
    pub trough: Option<DrawdownMarker>,
}

impl DrawdownResult {
    /// Result for a curve with no drawdown.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_drawdown: Money::ZERO,
            peak: None,
            trough: None,
        }
    }
}

/// Compute the maximum drawdown of an equity curve.
///
/// Single forward pass: tracks the running peak and takes
/// `max(drawdown, peak - current)` at each point, remembering which
/// peak produced the current maximum.
#[must_use]
pub fn analyze(curve: &[EquityPoint]) -> DrawdownResult {
    let Some(first) = curve.first() else {
        return DrawdownResult::none();
    };

    let mut peak_value = first.cumulative_pnl;
    let mut peak_index = 0usize;
    let mut result = DrawdownResult::none();

    for (index, point) in curve.iter().enumerate().skip(1) {
        if point.cumulative_pnl > peak_value {
            peak_value = point.cumulative_pnl;
            peak_index = index;
            continue;
        }

        let drawdown = peak_value - point.cumulative_pnl;
        if drawdown > result.max_drawdown {
            result.max_drawdown = drawdown;
            result.peak = Some(DrawdownMarker {
                index: peak_index,
                date: curve[peak_index].date,
            });
            result.trough = Some(DrawdownMarker {
                index,
                date: point.date,
            });
        }
    }

    result
}
