//! Futures vs reference price comparison series.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Period};

/// A period-keyed price observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar period of the observation.
    pub period: Period,
    /// Observed price.
    pub price: Money,
}

/// One aligned point of the futures/reference comparison series.
///
/// `discount` is positive when futures trade above the reference
/// (premium) and negative below it (discount). Periods without a
/// reference observation keep `reference_price` and `discount` absent
/// instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComparisonPoint {
    /// Calendar period.
    pub period: Period,
    /// Futures price for the period.
    pub futures_price: Money,
    /// Reference price for the period, when one exists.
    pub reference_price: Option<Money>,
    /// `futures_price - reference_price`.
    pub discount: Option<Money>,
}

/// Align a futures price series with a reference series by period.
///
/// Outer join on the futures periods: every futures period appears in
/// the output, reference-only periods do not. Multiple observations in
/// the same period are averaged first. Output is chronologically
/// ascending.
#[must_use]
pub fn compare(futures: &[PricePoint], reference: &[PricePoint]) -> Vec<PriceComparisonPoint> {
    let futures_by_period = average_by_period(futures);
    let reference_by_period = average_by_period(reference);

    futures_by_period
        .into_iter()
        .map(|(period, futures_price)| {
            let reference_price = reference_by_period.get(&period).copied();
            let discount = reference_price.map(|r| futures_price - r);
            PriceComparisonPoint {
                period,
                futures_price,
                reference_price,
                discount,
            }
        })
        .collect()
}

/// Mean price per period, keyed chronologically.
fn average_by_period(points: &[PricePoint]) -> BTreeMap<Period, Money> {
    let mut sums: BTreeMap<Period, (Money, u32)> = BTreeMap::new();
    for point in points {
        let entry = sums.entry(point.period).or_insert((Money::ZERO, 0));
        entry.0 += point.price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(period, (sum, count))| (period, Money::new(sum.amount() / Decimal::from(count))))
        .collect()
}
