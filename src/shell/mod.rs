//! Console shells
//!
//! Interactive drivers for the two components. Each shell owns its input
//! source and output sink and talks to its component only through the
//! component's public operations.
//!
//! - `bank` - Bank menu over an `AccountLedger`
//! - `grid` - Grid editor menu over a `BoundedGrid`, plus the scripted walkthrough
//! - `console` - Prompting and line reading shared by both

pub mod bank;
mod console;
pub mod grid;

pub use bank::BankShell;
pub use grid::{run_grid_demo, GridShell};
