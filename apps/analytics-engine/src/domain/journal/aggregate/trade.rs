//! Trade Aggregate Root
//!
//! One futures position lifecycle record. The aggregate owns the
//! open -> closed transition and realized P&L computation; persistence
//! belongs to the storage collaborator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::journal::errors::TradeError;
use crate::domain::journal::value_objects::{Direction, TradeId, TradeStatus};
use crate::domain::shared::Money;

/// Command to open a new trade.
#[derive(Debug, Clone)]
pub struct OpenTradeCommand {
    /// Storage-assigned identifier.
    pub id: TradeId,
    /// Date the position was opened.
    pub trade_date: NaiveDate,
    /// Product name, if recorded. Absent instruments land in the
    /// "unknown" breakdown bucket.
    pub instrument: Option<String>,
    /// Contract code (e.g. "LC2407").
    pub contract: String,
    /// Position direction.
    pub direction: Direction,
    /// Entry price per unit.
    pub entry_price: Money,
    /// Number of lots. Must be positive.
    pub quantity: Decimal,
    /// Commission paid.
    pub fee: Money,
    /// Exchange settlement price, when known.
    pub settlement_price: Option<Money>,
    /// Free-form journal notes.
    pub notes: Option<String>,
}

impl OpenTradeCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if any field violates a trade invariant.
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.quantity <= Decimal::ZERO {
            return Err(TradeError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("must be positive, got {}", self.quantity),
            });
        }

        if !self.entry_price.is_positive() {
            return Err(TradeError::InvalidValue {
                field: "entry_price".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if self.fee.is_negative() {
            return Err(TradeError::InvalidValue {
                field: "fee".to_string(),
                message: "cannot be negative".to_string(),
            });
        }

        if let Some(settlement) = &self.settlement_price {
            if !settlement.is_positive() {
                return Err(TradeError::InvalidValue {
                    field: "settlement_price".to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Parameters for reconstituting a Trade from storage.
///
/// Used by repositories to rebuild aggregates from persisted state.
/// The caller is trusted to supply a state that satisfies the
/// closed-trade invariant.
#[derive(Debug, Clone)]
pub struct ReconstitutedTradeParams {
    /// Trade identifier.
    pub id: TradeId,
    /// Date the position was opened.
    pub trade_date: NaiveDate,
    /// Product name, if recorded.
    pub instrument: Option<String>,
    /// Contract code.
    pub contract: String,
    /// Position direction.
    pub direction: Direction,
    /// Entry price per unit.
    pub entry_price: Money,
    /// Number of lots.
    pub quantity: Decimal,
    /// Commission paid.
    pub fee: Money,
    /// Exchange settlement price, when known.
    pub settlement_price: Option<Money>,
    /// Free-form journal notes.
    pub notes: Option<String>,
    /// Exit price, for closed trades.
    pub exit_price: Option<Money>,
    /// Exit date, for closed trades.
    pub exit_date: Option<NaiveDate>,
    /// Realized profit/loss, for closed trades.
    pub profit_loss: Option<Money>,
    /// Current lifecycle status.
    pub status: TradeStatus,
}

/// Trade Aggregate Root.
///
/// Invariant: `status == Closed` iff exit price, exit date and realized
/// profit/loss are all set. The aggregate is a value: [`Trade::close`]
/// returns a new closed trade for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    id: TradeId,
    trade_date: NaiveDate,
    instrument: Option<String>,
    contract: String,
    direction: Direction,
    entry_price: Money,
    quantity: Decimal,
    fee: Money,
    settlement_price: Option<Money>,
    notes: Option<String>,
    exit_price: Option<Money>,
    exit_date: Option<NaiveDate>,
    profit_loss: Option<Money>,
    status: TradeStatus,
}

impl Trade {
    /// Open a new trade from a command.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn open(cmd: OpenTradeCommand) -> Result<Self, TradeError> {
        cmd.validate()?;

        Ok(Self {
            id: cmd.id,
            trade_date: cmd.trade_date,
            instrument: cmd.instrument,
            contract: cmd.contract,
            direction: cmd.direction,
            entry_price: cmd.entry_price,
            quantity: cmd.quantity,
            fee: cmd.fee,
            settlement_price: cmd.settlement_price,
            notes: cmd.notes,
            exit_price: None,
            exit_date: None,
            profit_loss: None,
            status: TradeStatus::Open,
        })
    }

    /// Reconstitute a trade from stored state.
    ///
    /// Factory method for rebuilding aggregates from persistence. It
    /// bypasses open-command validation, as the aggregate is being
    /// restored to a known valid state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedTradeParams) -> Self {
        Self {
            id: params.id,
            trade_date: params.trade_date,
            instrument: params.instrument,
            contract: params.contract,
            direction: params.direction,
            entry_price: params.entry_price,
            quantity: params.quantity,
            fee: params.fee,
            settlement_price: params.settlement_price,
            notes: params.notes,
            exit_price: params.exit_price,
            exit_date: params.exit_date,
            profit_loss: params.profit_loss,
            status: params.status,
        }
    }

    /// Close the position, realizing profit/loss.
    ///
    /// Long: `pnl = (exit - entry) * quantity - fee`.
    /// Short: `pnl = (entry - exit) * quantity - fee`.
    ///
    /// Returns a new closed trade value; persisting it is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::AlreadyClosed`] if the trade is not open,
    /// or [`TradeError::InvalidValue`] if the exit price is not positive
    /// or the exit date precedes the trade date.
    pub fn close(&self, exit_price: Money, exit_date: NaiveDate) -> Result<Self, TradeError> {
        if self.status.is_closed() {
            return Err(TradeError::AlreadyClosed { id: self.id });
        }

        if !exit_price.is_positive() {
            return Err(TradeError::InvalidValue {
                field: "exit_price".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if exit_date < self.trade_date {
            return Err(TradeError::InvalidValue {
                field: "exit_date".to_string(),
                message: format!("cannot precede trade date {}", self.trade_date),
            });
        }

        let price_move = match self.direction {
            Direction::Long => exit_price - self.entry_price,
            Direction::Short => self.entry_price - exit_price,
        };
        let profit_loss = price_move * self.quantity - self.fee;

        Ok(Self {
            exit_price: Some(exit_price),
            exit_date: Some(exit_date),
            profit_loss: Some(profit_loss),
            status: TradeStatus::Closed,
            ..self.clone()
        })
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the trade ID.
    #[must_use]
    pub const fn id(&self) -> TradeId {
        self.id
    }

    /// Get the trade date.
    #[must_use]
    pub const fn trade_date(&self) -> NaiveDate {
        self.trade_date
    }

    /// Get the instrument name, if recorded.
    #[must_use]
    pub fn instrument(&self) -> Option<&str> {
        self.instrument.as_deref()
    }

    /// Get the contract code.
    #[must_use]
    pub fn contract(&self) -> &str {
        &self.contract
    }

    /// Get the direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the entry price.
    #[must_use]
    pub const fn entry_price(&self) -> Money {
        self.entry_price
    }

    /// Get the quantity in lots.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Get the commission paid.
    #[must_use]
    pub const fn fee(&self) -> Money {
        self.fee
    }

    /// Get the settlement price, if recorded.
    #[must_use]
    pub const fn settlement_price(&self) -> Option<Money> {
        self.settlement_price
    }

    /// Get the journal notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Get the exit price, set on close.
    #[must_use]
    pub const fn exit_price(&self) -> Option<Money> {
        self.exit_price
    }

    /// Get the exit date, set on close.
    #[must_use]
    pub const fn exit_date(&self) -> Option<NaiveDate> {
        self.exit_date
    }

    /// Get the realized profit/loss, set on close.
    #[must_use]
    pub const fn profit_loss(&self) -> Option<Money> {
        self.profit_loss
    }

    /// Get the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TradeStatus {
        self.status
    }
}
