//! Journal domain errors.

use std::fmt;

use super::value_objects::TradeId;

/// Errors that can occur in the trade journal domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Attempted to close a trade that is already closed.
    AlreadyClosed {
        /// Trade ID.
        id: TradeId,
    },

    /// Trade not found.
    NotFound {
        /// Trade ID.
        id: TradeId,
    },
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::AlreadyClosed { id } => {
                write!(f, "Trade already closed: {id}")
            }
            Self::NotFound { id } => {
                write!(f, "Trade not found: {id}")
            }
        }
    }
}

impl std::error::Error for TradeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_error_invalid_value_display() {
        let err = TradeError::InvalidValue {
            field: "quantity".to_string(),
            message: "must be positive".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("quantity"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn trade_error_already_closed_display() {
        let err = TradeError::AlreadyClosed {
            id: TradeId::new(7),
        };
        assert!(format!("{err}").contains('7'));
    }

    #[test]
    fn trade_error_not_found_display() {
        let err = TradeError::NotFound {
            id: TradeId::new(99),
        };
        assert!(format!("{err}").contains("99"));
    }

    #[test]
    fn trade_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TradeError::AlreadyClosed {
            id: TradeId::new(1),
        });
        assert!(!err.to_string().is_empty());
    }
}
