//! Bank ledger and grid editor library
//! # Overview
//!
//! This library provides two small in-memory components whose state may only
//! change through validated operations, plus the console shells that drive them.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, amount rules, errors)
//! - [`cli`] - CLI arguments parsing and shell configuration
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Accounts with deposit, withdraw and atomic transfer
//!   - [`core::shared`] - Lock-protected ledger handle
//!   - [`core::grid`] - Fixed 7x7 digit grid with row/column edits
//! - [`io`] - Display formatting for listings and grids
//! - [`shell`] - Interactive menus over the components
//! - [`logging`] - Tracing subscriber setup for the binary
//!
//! # Failure Policies
//!
//! The ledger is all-or-nothing: a failed operation changes nothing. The grid
//! rejects bad coordinates outright but tolerates bad values in bulk inserts,
//! writing them as 0 and reporting each one.
//!
//! # Balance Rules
//!
//! - Balances stay within `[0.00, 999999.99]`
//! - Single deposits lie within `[0.01, 10000.00]`
//! - Amounts carry at most two decimal places

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod shell;
pub mod types;

pub use crate::core::{AccountLedger, BoundedGrid, GridLayout, SharedLedger};
pub use crate::io::{render_grid, write_accounts_csv};
pub use crate::types::{Account, AccountId, GridError, LedgerError, ShellError};
