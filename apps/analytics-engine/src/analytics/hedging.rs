//! Hedging dashboard snapshot: weighted average prices vs the
//! reference price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::journal::Trade;
use crate::domain::shared::Money;

/// Quantity-weighted price averages and their discount to the
/// reference price.
///
/// `entry_discount_pct` and `settlement_discount_pct` follow the
/// dashboard convention `(reference - price) / reference * 100`:
/// positive means the book is priced below the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HedgeSnapshot {
    /// Quantity-weighted mean entry price over all trades.
    pub avg_entry_price: Option<Money>,
    /// Quantity-weighted mean settlement price over trades that carry
    /// one.
    pub avg_settlement_price: Option<Money>,
    /// The reference price the discounts are computed against.
    pub reference_price: Option<Money>,
    /// Relative discount of the average entry price.
    pub entry_discount_pct: Option<Decimal>,
    /// Relative discount of the average settlement price.
    pub settlement_discount_pct: Option<Decimal>,
}

/// Compute the hedging snapshot for a trade set.
///
/// All fields are `None` on zero denominators: no trades, no
/// settlement prices, or no positive reference price.
#[must_use]
pub fn hedge_snapshot(trades: &[Trade], reference_price: Option<Money>) -> HedgeSnapshot {
    let avg_entry_price =
        weighted_average(trades.iter().map(|t| (t.entry_price(), t.quantity())));

    let avg_settlement_price = weighted_average(
        trades
            .iter()
            .filter_map(|t| t.settlement_price().map(|p| (p, t.quantity()))),
    );

    HedgeSnapshot {
        avg_entry_price,
        avg_settlement_price,
        reference_price,
        entry_discount_pct: discount_pct(avg_entry_price, reference_price),
        settlement_discount_pct: discount_pct(avg_settlement_price, reference_price),
    }
}

/// Quantity-weighted mean of `(price, quantity)` pairs.
fn weighted_average<I>(pairs: I) -> Option<Money>
where
    I: Iterator<Item = (Money, Decimal)>,
{
    let mut value = Decimal::ZERO;
    let mut quantity = Decimal::ZERO;
    for (price, qty) in pairs {
        value += price.amount() * qty;
        quantity += qty;
    }

    (!quantity.is_zero()).then(|| Money::new(value / quantity))
}

fn discount_pct(price: Option<Money>, reference: Option<Money>) -> Option<Decimal> {
    let price = price?;
    let reference = reference?;
    if !reference.is_positive() {
        return None;
    }

    Some((reference.amount() - price.amount()) / reference.amount() * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journal::{Direction, OpenTradeCommand, TradeId};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn trade(id: i64, entry: f64, qty: i64, settlement: Option<f64>) -> Trade {
        Trade::open(OpenTradeCommand {
            id: TradeId::new(id),
            trade_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            instrument: Some("lithium carbonate".to_string()),
            contract: "LC2404".to_string(),
            direction: Direction::Long,
            entry_price: Money::yuan(entry),
            quantity: Decimal::new(qty, 0),
            fee: Money::ZERO,
            settlement_price: settlement.map(Money::yuan),
            notes: None,
        })
        .unwrap()
    }

    #[test]
    fn empty_set_yields_empty_snapshot() {
        let snapshot = hedge_snapshot(&[], Some(Money::yuan(100.0)));

        assert!(snapshot.avg_entry_price.is_none());
        assert!(snapshot.avg_settlement_price.is_none());
        assert!(snapshot.entry_discount_pct.is_none());
        assert!(snapshot.settlement_discount_pct.is_none());
    }

    #[test]
    fn entry_average_is_quantity_weighted() {
        // (100*1 + 130*3) / 4 = 122.5
        let trades = vec![trade(1, 100.0, 1, None), trade(2, 130.0, 3, None)];
        let snapshot = hedge_snapshot(&trades, None);

        assert_eq!(snapshot.avg_entry_price, Some(Money::yuan(122.5)));
        assert!(snapshot.entry_discount_pct.is_none());
    }

    #[test]
    fn settlement_average_skips_trades_without_one() {
        let trades = vec![
            trade(1, 100.0, 2, Some(101.0)),
            trade(2, 100.0, 2, None),
            trade(3, 100.0, 2, Some(103.0)),
        ];
        let snapshot = hedge_snapshot(&trades, None);

        assert_eq!(snapshot.avg_settlement_price, Some(Money::yuan(102.0)));
    }

    #[test]
    fn discount_is_relative_to_reference() {
        // avg entry 90 vs reference 100 -> (100-90)/100*100 = 10%
        let trades = vec![trade(1, 90.0, 1, None)];
        let snapshot = hedge_snapshot(&trades, Some(Money::yuan(100.0)));

        assert_eq!(snapshot.entry_discount_pct, Some(dec!(10)));
    }

    #[test]
    fn premium_entry_yields_negative_discount() {
        let trades = vec![trade(1, 110.0, 1, None)];
        let snapshot = hedge_snapshot(&trades, Some(Money::yuan(100.0)));

        assert_eq!(snapshot.entry_discount_pct, Some(dec!(-10)));
    }

    #[test]
    fn zero_reference_price_gives_no_discount() {
        let trades = vec![trade(1, 90.0, 1, None)];
        let snapshot = hedge_snapshot(&trades, Some(Money::ZERO));

        assert_eq!(snapshot.avg_entry_price, Some(Money::yuan(90.0)));
        assert!(snapshot.entry_discount_pct.is_none());
    }

    #[test]
    fn settlement_discount_uses_settlement_average() {
        let trades = vec![trade(1, 90.0, 1, Some(95.0))];
        let snapshot = hedge_snapshot(&trades, Some(Money::yuan(100.0)));

        assert_eq!(snapshot.settlement_discount_pct, Some(dec!(5)));
    }
}
