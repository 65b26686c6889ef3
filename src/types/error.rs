//! Error types for the bank ledger, the bounded grid and the console shells
//!
//! Errors are designed to carry enough context (offending value, limit,
//! available balance) for a driving shell to present a precise message.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: malformed amounts, balance limits, missing accounts, etc.
//! - **Grid Errors**: out-of-bounds coordinates, out-of-range cell values
//! - **Shell Errors**: script file not found, I/O and CSV output failures
//!
//! Ledger and grid errors are always recoverable: the operation that returns
//! one has not mutated anything. Only shell errors end a session.

use crate::types::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned by every `AccountLedger` operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Malformed or out-of-range amount (format, deposit range, negativity)
    #[error("{operation} amount '{amount}' is invalid: {reason}")]
    InvalidAmount {
        /// Operation the amount was supplied to
        operation: String,
        /// The rejected amount as the caller supplied it
        amount: String,
        /// Which rule the amount broke
        reason: String,
    },

    /// A resulting balance would fall outside the balance range
    #[error("Resulting balance {attempted:.2} would cross the limit of ${limit:.2}")]
    BalanceLimitExceeded {
        /// The balance the operation would have produced, saturated at `Decimal::MAX`
        attempted: Decimal,
        /// The bound that was crossed
        limit: Decimal,
    },

    /// The source account cannot cover the requested amount
    #[error("Insufficient funds in account {account}. Available balance: ${available:.2}, requested ${requested:.2}")]
    InsufficientFunds {
        /// Account that lacks funds
        account: AccountId,
        /// Balance available at the time of the request
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// No account carries the referenced id
    #[error("Account with ID {id} not found.")]
    AccountNotFound {
        /// The id that was looked up
        id: AccountId,
    },

    /// Structurally invalid input (empty name, same-account transfer)
    #[error("{message}")]
    InvalidArgument {
        /// Description of the problem
        message: String,
    },
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: impl ToString, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount: amount.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a BalanceLimitExceeded error
    pub fn balance_limit_exceeded(attempted: Decimal, limit: Decimal) -> Self {
        LedgerError::BalanceLimitExceeded { attempted, limit }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            available,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: AccountId) -> Self {
        LedgerError::AccountNotFound { id }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: &str) -> Self {
        LedgerError::InvalidArgument {
            message: message.to_string(),
        }
    }

    /// InvalidArgument for an empty or whitespace-only holder name
    pub fn empty_holder() -> Self {
        Self::invalid_argument("Account holder name cannot be empty.")
    }

    /// InvalidArgument for a transfer whose source and destination match
    pub fn same_account_transfer() -> Self {
        Self::invalid_argument("Cannot transfer to the same account.")
    }
}

/// Axis of a grid coordinate, used to label bounds errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}

/// Error returned by `BoundedGrid` operations that reject a call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row or column index lies outside `[0, size)`
    #[error("{axis} number {index} must be between 0 and {max}")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        /// Largest valid index
        max: usize,
    },

    /// A single-cell value lies outside `[0, 9]`
    #[error("Value {value} must be between 0 and {max}")]
    ValueOutOfRange { value: i64, max: u8 },

    /// A row/column payload is longer than the grid
    #[error("Too many values for {axis}: got {count}, maximum is {max}")]
    TooManyValues {
        axis: Axis,
        count: usize,
        max: usize,
    },
}

/// Fatal errors of the console surface
///
/// These end a shell session; the binary reports them and exits with status 1.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input or writing the transcript
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization of the account listing failed
    #[error("CSV output error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },
}

// Conversion from io::Error to ShellError
impl From<std::io::Error> for ShellError {
    fn from(error: std::io::Error) -> Self {
        ShellError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ShellError {
    fn from(error: csv::Error) -> Self {
        ShellError::CsvError {
            message: error.to_string(),
        }
    }
}
