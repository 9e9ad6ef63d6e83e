//! Integration tests for the analytics service over the in-memory
//! journal.
//!
//! These tests exercise the full path a host application takes: seed
//! the storage collaborator, close positions through the service, and
//! read assembled reports.

use std::sync::Arc;

use analytics_engine::{
    AnalyticsError, AnalyticsService, Direction, InMemoryJournal, Money, OpenTradeCommand, Period,
    PricePoint, RepositoryError, Trade, TradeError, TradeFilter, TradeId, TradeRepositoryPort,
    TradeStatus,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn open_trade(id: i64, instrument: &str, direction: Direction, month: u32) -> Trade {
    Trade::open(OpenTradeCommand {
        id: TradeId::new(id),
        trade_date: date(month, 5),
        instrument: Some(instrument.to_string()),
        contract: "LC2409".to_string(),
        direction,
        entry_price: Money::yuan(100.0),
        quantity: Decimal::new(10, 0),
        fee: Money::yuan(5.0),
        settlement_price: Some(Money::yuan(101.0)),
        notes: None,
    })
    .unwrap()
}

fn service(journal: &Arc<InMemoryJournal>) -> AnalyticsService<InMemoryJournal, InMemoryJournal> {
    AnalyticsService::new(Arc::clone(journal), Arc::clone(journal))
}

#[tokio::test]
async fn close_trade_persists_realized_pnl() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    let service = service(&journal);

    let closed = service
        .close_trade(TradeId::new(1), Money::yuan(110.0), date(6, 20))
        .await
        .unwrap();

    // (110 - 100) * 10 - 5 = 95
    assert_eq!(closed.profit_loss(), Some(Money::yuan(95.0)));

    let stored = journal.find(TradeId::new(1)).await.unwrap().unwrap();
    assert!(stored.status().is_closed());
    assert_eq!(stored.profit_loss(), Some(Money::yuan(95.0)));
}

#[tokio::test]
async fn close_trade_twice_is_rejected() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    let service = service(&journal);

    service
        .close_trade(TradeId::new(1), Money::yuan(110.0), date(6, 20))
        .await
        .unwrap();

    let err = service
        .close_trade(TradeId::new(1), Money::yuan(120.0), date(6, 21))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnalyticsError::Trade(TradeError::AlreadyClosed { .. })
    ));
}

#[tokio::test]
async fn close_missing_trade_is_not_found() {
    let journal = Arc::new(InMemoryJournal::new());
    let service = service(&journal);

    let err = service
        .close_trade(TradeId::new(42), Money::yuan(110.0), date(6, 20))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnalyticsError::Repository(RepositoryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn performance_report_assembles_all_sections() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    journal.add_trade(open_trade(2, "lithium carbonate", Direction::Short, 6));
    journal.add_trade(open_trade(3, "industrial silicon", Direction::Long, 7));
    let service = service(&journal);

    // Close two of three: +95 and (100-90)*10-5 = +95, then a loser stays open.
    service
        .close_trade(TradeId::new(1), Money::yuan(110.0), date(6, 20))
        .await
        .unwrap();
    service
        .close_trade(TradeId::new(2), Money::yuan(90.0), date(6, 25))
        .await
        .unwrap();

    let report = service
        .performance_report(&TradeFilter::all())
        .await
        .unwrap();

    assert_eq!(report.summary.total_trades, 3);
    assert_eq!(report.summary.closed_trades, 2);
    assert_eq!(report.summary.open_trades, 1);
    assert_eq!(report.summary.win_rate, Some(dec!(1)));
    assert_eq!(report.summary.net_profit, Money::yuan(190.0));

    assert_eq!(report.equity_curve.len(), 2);
    assert_eq!(report.equity_curve[1].cumulative_pnl, Money::yuan(190.0));
    assert_eq!(report.drawdown.max_drawdown, Money::ZERO);

    assert_eq!(report.by_instrument.len(), 2);
    assert_eq!(report.by_direction["long"].total_trades, 2);
    assert_eq!(report.by_direction["short"].total_trades, 1);
    assert_eq!(report.by_month["2024-06"].total_trades, 2);
    assert_eq!(report.by_month["2024-07"].total_trades, 1);

    assert_eq!(report.win_rate_trend.len(), 2);
    assert_eq!(report.win_rate_trend[1].win_rate, dec!(100));
}

#[tokio::test]
async fn performance_report_honors_filter() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    journal.add_trade(open_trade(2, "industrial silicon", Direction::Long, 7));
    let service = service(&journal);

    let filter = TradeFilter::all().with_instrument("lithium carbonate");
    let report = service.performance_report(&filter).await.unwrap();

    assert_eq!(report.summary.total_trades, 1);
    assert_eq!(report.by_instrument.len(), 1);
}

#[tokio::test]
async fn empty_journal_report_has_undefined_ratios() {
    let journal = Arc::new(InMemoryJournal::new());
    let service = service(&journal);

    let report = service
        .performance_report(&TradeFilter::all())
        .await
        .unwrap();

    assert_eq!(report.summary.total_trades, 0);
    assert!(report.summary.win_rate.is_none());
    assert!(report.summary.profit_factor.is_none());
    assert!(report.summary.expectancy.is_none());
    assert!(report.equity_curve.is_empty());
    assert!(report.drawdown.peak.is_none());
}

#[tokio::test]
async fn reports_are_stable_across_repeated_queries() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    let service = service(&journal);
    service
        .close_trade(TradeId::new(1), Money::yuan(104.0), date(6, 9))
        .await
        .unwrap();

    let first = service
        .performance_report(&TradeFilter::all())
        .await
        .unwrap();
    let second = service
        .performance_report(&TradeFilter::all())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn hedge_report_aligns_price_series() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    journal.add_futures_price(PricePoint {
        period: Period::new(2024, 1).unwrap(),
        price: Money::yuan(100.0),
    });
    journal.add_futures_price(PricePoint {
        period: Period::new(2024, 2).unwrap(),
        price: Money::yuan(105.0),
    });
    journal.add_reference_price(PricePoint {
        period: Period::new(2024, 1).unwrap(),
        price: Money::yuan(98.0),
    });
    let service = service(&journal);

    let report = service.hedge_report(&TradeFilter::all()).await.unwrap();

    assert_eq!(report.comparison.len(), 2);
    assert_eq!(report.comparison[0].discount, Some(Money::yuan(2.0)));
    assert!(report.comparison[1].reference_price.is_none());
    assert!(report.comparison[1].discount.is_none());

    // Latest reference price (2024-01) feeds the snapshot discounts.
    assert_eq!(report.snapshot.reference_price, Some(Money::yuan(98.0)));
    assert_eq!(report.snapshot.avg_entry_price, Some(Money::yuan(100.0)));
    assert_eq!(report.snapshot.avg_settlement_price, Some(Money::yuan(101.0)));
}

#[tokio::test]
async fn closed_filter_sees_only_closed_trades() {
    let journal = Arc::new(InMemoryJournal::new());
    journal.add_trade(open_trade(1, "lithium carbonate", Direction::Long, 6));
    journal.add_trade(open_trade(2, "lithium carbonate", Direction::Long, 6));
    let service = service(&journal);
    service
        .close_trade(TradeId::new(2), Money::yuan(101.0), date(6, 8))
        .await
        .unwrap();

    let filter = TradeFilter::all().with_status(TradeStatus::Closed);
    let report = service.performance_report(&filter).await.unwrap();

    assert_eq!(report.summary.total_trades, 1);
    assert_eq!(report.summary.open_trades, 0);
}
