//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `amount`: Amount parsing, validation and range limits
//! - `error`: Error types for the ledger, the grid and the shells

pub mod account;
pub mod amount;
pub mod error;

pub use account::{Account, AccountId};
pub use amount::{
    check_balance_limit, check_deposit_range, parse_amount, validate_amount, MAX_BALANCE,
    MAX_DEPOSIT, MIN_BALANCE, MIN_DEPOSIT,
};
pub use error::{Axis, GridError, LedgerError, ShellError};
