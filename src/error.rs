//! Error types for the ledger service and the vending machine CLI.

use thiserror::Error;

/// Result type alias for vending machine operations
pub type Result<T> = std::result::Result<T, MachineError>;

/// Structured failure reasons returned by ledger operations.
///
/// The `Display` output of each variant is an externally-visible contract:
/// callers render these strings verbatim to the user. Ledger failures are
/// always returned as data, never panics, and leave the service usable for
/// subsequent calls.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// Card number is not exactly 8 decimal digits (charge and balance paths).
    #[error("invalid card format (must be 8 digits)")]
    InvalidCardFormat,

    /// Card number is not exactly 8 decimal digits (top-up path).
    #[error("invalid card format")]
    InvalidTopUpCardFormat,

    /// Charge amount was zero or negative.
    #[error("charge amount must be a positive integer")]
    NonPositiveChargeAmount,

    /// Top-up amount was zero or negative.
    #[error("top-up amount must be a positive integer")]
    NonPositiveTopUpAmount,

    /// Balance shortfall, or the card is rule-insufficient and always declines.
    #[error("insufficient balance")]
    InsufficientBalance,
}

/// Errors that can occur during machine startup and session I/O.
#[derive(Error, Debug)]
pub enum MachineError {
    /// Failed to read input or write to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog CSV parsing error
    #[error("catalog parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Catalog record failed validation
    #[error("invalid catalog record at row {row}: {message}")]
    InvalidCatalogRecord { row: usize, message: String },

    /// Default balance argument was not a non-negative integer
    #[error("invalid default balance {value:?}: must be a non-negative integer")]
    InvalidBalanceArgument { value: String },
}
