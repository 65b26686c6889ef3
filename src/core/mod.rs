//! Core business logic module
//!
//! This module contains the two in-memory components:
//! - `traits` - Trait abstractions for grid layouts
//! - `ledger` - Account ledger with validated deposit, withdraw and transfer
//! - `shared` - Mutex-guarded ledger handle for multi-threaded hosts
//! - `grid` - Fixed-size digit grid with row/column bulk edits

pub mod grid;
pub mod ledger;
pub mod shared;
pub mod traits;

pub use grid::{BoundedGrid, ClampedValue, InsertReport, GRID_SIZE, MAX_CELL_VALUE};
pub use ledger::{validate_holder, AccountLedger, FIRST_ACCOUNT_ID, FIRST_ID_AFTER_SAMPLES};
pub use shared::SharedLedger;
pub use traits::GridLayout;
