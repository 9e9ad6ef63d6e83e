// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Analytics Engine - Rust Core Library
//!
//! Trade-performance analytics engine for the Hedgebook futures
//! journal: closing P&L, equity curve, drawdown, aggregate statistics,
//! per-dimension breakdowns, and futures-vs-reference price comparison
//! for physical-hedging decisions.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects)
//!   - `journal`: Trade aggregate, open/close lifecycle, realized P&L
//!   - `shared`: `Money` (exact decimal arithmetic), `Period`
//!
//! - **Analytics**: Pure computation over immutable snapshots
//!   - `equity`, `drawdown`, `summary`, `breakdown`: performance series
//!     and win/loss statistics
//!   - `comparison`, `trend`, `hedging`: discount chart and dashboard
//!     series
//!
//! - **Application**: Orchestration and port definitions
//!   - `ports`: `TradeRepositoryPort`, `ReferencePricePort`
//!   - `services`: `AnalyticsService` assembling full reports
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: in-memory journal for tests and development
//!
//! The engine is synchronous and snapshot-in/value-out: every call
//! recomputes from the collection it is handed and returns plain
//! structured values ready for serialization. All I/O belongs to the
//! host around the call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Analytics layer - Pure performance computations.
pub mod analytics;

/// Application layer - Services and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::journal::{
    Direction, OpenTradeCommand, ReconstitutedTradeParams, Trade, TradeError, TradeId, TradeStatus,
};
pub use domain::shared::{Money, Period};

// Analytics re-exports
pub use analytics::{
    Dimension, DrawdownMarker, DrawdownResult, EquityPoint, HedgeSnapshot, PriceComparisonPoint,
    PricePoint, StatsSummary, TrendConfig, WinRatePoint,
};

// Application re-exports
pub use application::ports::{
    ReferencePricePort, RepositoryError, TradeFilter, TradeRepositoryPort,
};
pub use application::services::{AnalyticsError, AnalyticsService, HedgeReport, PerformanceReport};

// Infrastructure re-exports
pub use infrastructure::persistence::InMemoryJournal;
