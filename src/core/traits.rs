//! Core traits for grid layouts
//!
//! `GridLayout` is the editing surface a console driver or renderer needs from
//! a grid, independent of how the cells are stored.

use crate::core::grid::InsertReport;
use crate::types::GridError;

/// Trait for square, digit-valued grids with row/column bulk edits
///
/// Mutating operations either reject the whole call with a `GridError`
/// (bounds and payload length) or, for bulk inserts, clamp individual
/// out-of-range values to 0 and report them in the returned `InsertReport`.
pub trait GridLayout {
    /// Number of rows (and columns)
    fn size(&self) -> usize;

    /// Write `values` positionally into a row
    fn insert_row(&mut self, row: usize, values: &[i64]) -> Result<InsertReport, GridError>;

    /// Write `values` positionally into a column
    fn insert_column(&mut self, column: usize, values: &[i64]) -> Result<InsertReport, GridError>;

    /// Zero every cell of a row
    fn clear_row(&mut self, row: usize) -> Result<(), GridError>;

    /// Zero every cell of a column
    fn clear_column(&mut self, column: usize) -> Result<(), GridError>;

    /// Set a single cell; the value must be a digit
    fn update_cell(&mut self, row: usize, column: usize, value: i64) -> Result<(), GridError>;

    /// Zero every cell
    fn clear(&mut self);

    /// Snapshot of every row, top to bottom
    fn rows(&self) -> Vec<Vec<u8>>;
}
