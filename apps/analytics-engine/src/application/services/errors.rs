//! Application-level errors.

use crate::application::ports::RepositoryError;
use crate::domain::journal::TradeError;

/// Errors surfaced by the analytics service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    /// Domain rule violation (validation or state).
    #[error(transparent)]
    Trade(#[from] TradeError),

    /// Storage collaborator failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
