//! Reference Price Port (Driven Port)
//!
//! Interface to the collaborator that supplies period-keyed price
//! series: the futures settlement series and the external spot
//! reference (SMM) series the discount chart compares against.

use async_trait::async_trait;

use super::trade_repository::RepositoryError;
use crate::analytics::PricePoint;
use crate::domain::shared::Money;

/// Port for the price series collaborator.
#[async_trait]
pub trait ReferencePricePort: Send + Sync {
    /// Futures price observations, period-keyed.
    async fn futures_prices(&self) -> Result<Vec<PricePoint>, RepositoryError>;

    /// External reference price observations, period-keyed.
    async fn reference_prices(&self) -> Result<Vec<PricePoint>, RepositoryError>;

    /// The most recent reference price, if any is recorded.
    async fn latest_reference_price(&self) -> Result<Option<Money>, RepositoryError>;
}
