//! Trade Journal Bounded Context
//!
//! Manages the futures position lifecycle from open to close.
//!
//! # Key Concepts
//!
//! - **Trade Aggregate**: one position record; closing realizes P&L and
//!   is the only state transition
//! - **Value semantics**: [`Trade::close`] returns a new closed value;
//!   the storage collaborator persists it

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::{OpenTradeCommand, ReconstitutedTradeParams, Trade};
pub use errors::TradeError;
pub use value_objects::{Direction, TradeId, TradeStatus};
