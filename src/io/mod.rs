//! I/O module
//!
//! Handles display formatting for the console shells.
//!
//! # Components
//!
//! - `format` - Account listings (text and CSV), balance formatting and grid rendering

pub mod format;

pub use format::{format_balance, render_grid, write_account_list, write_accounts_csv};
