//! Bounded grid module
//!
//! This module provides `BoundedGrid`, a fixed 7x7 grid whose cells each hold
//! a single digit.
//!
//! Two error postures coexist here:
//! - Single-cell updates, bounds violations and oversize payloads reject the
//!   whole call and leave the grid untouched.
//! - Bulk row/column inserts tolerate bad entries: an out-of-range value is
//!   written as 0 and reported in the returned [`InsertReport`], while the
//!   rest of the payload is still applied.
//!
//! Read accessors return copies, never live references into the grid.

use crate::core::traits::GridLayout;
use crate::types::{Axis, GridError};
use std::fmt;
use uuid::Uuid;

/// Number of rows and columns
pub const GRID_SIZE: usize = 7;

/// Largest value a cell may hold
pub const MAX_CELL_VALUE: u8 = 9;

/// An entry of a bulk insert that was out of range and written as 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedValue {
    /// Offset of the entry within the payload
    pub position: usize,
    /// The rejected value
    pub value: i64,
}

impl fmt::Display for ClampedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value {} is out of range (0-{}). Setting to 0.",
            self.value, MAX_CELL_VALUE
        )
    }
}

/// Outcome of a bulk row/column insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Number of cells written, clamped ones included
    pub written: usize,
    /// Entries that were clamped to 0, in payload order
    pub clamped: Vec<ClampedValue>,
}

impl InsertReport {
    pub fn is_clean(&self) -> bool {
        self.clamped.is_empty()
    }
}

/// Fixed-size digit grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedGrid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl BoundedGrid {
    /// Create a zero-filled grid
    pub fn new() -> Self {
        BoundedGrid {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Value of a single cell
    pub fn cell(&self, row: usize, column: usize) -> Result<u8, GridError> {
        check_index(Axis::Row, row)?;
        check_index(Axis::Column, column)?;
        Ok(self.cells[row][column])
    }

    /// Copy of a row
    pub fn row(&self, row: usize) -> Result<[u8; GRID_SIZE], GridError> {
        check_index(Axis::Row, row)?;
        Ok(self.cells[row])
    }

    /// Copy of a column, top to bottom
    pub fn column(&self, column: usize) -> Result<[u8; GRID_SIZE], GridError> {
        check_index(Axis::Column, column)?;
        Ok(std::array::from_fn(|row| self.cells[row][column]))
    }

    /// Fill every cell from `next`, reducing each drawn value modulo 10
    pub fn fill_with<F>(&mut self, mut next: F)
    where
        F: FnMut() -> u8,
    {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = next() % (MAX_CELL_VALUE + 1);
            }
        }
    }

    /// Fill every cell with an independent, uniformly distributed digit
    pub fn fill_randomly(&mut self) {
        let mut digits = random_digits();
        self.fill_with(|| digits.next().unwrap_or(0));
    }

    /// True iff every cell is 0
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == 0)
    }

    /// Write `values` through `set`, clamping out-of-range entries to 0
    fn write_line<F>(values: &[i64], axis: Axis, mut set: F) -> Result<InsertReport, GridError>
    where
        F: FnMut(usize, u8),
    {
        if values.len() > GRID_SIZE {
            return Err(GridError::TooManyValues {
                axis,
                count: values.len(),
                max: GRID_SIZE,
            });
        }

        let mut report = InsertReport::default();
        for (position, &value) in values.iter().enumerate() {
            match to_digit(value) {
                Some(digit) => set(position, digit),
                None => {
                    set(position, 0);
                    report.clamped.push(ClampedValue { position, value });
                }
            }
            report.written += 1;
        }
        Ok(report)
    }
}

impl Default for BoundedGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLayout for BoundedGrid {
    fn size(&self) -> usize {
        GRID_SIZE
    }

    fn insert_row(&mut self, row: usize, values: &[i64]) -> Result<InsertReport, GridError> {
        check_index(Axis::Row, row)?;
        let line = &mut self.cells[row];
        Self::write_line(values, Axis::Row, |column, digit| line[column] = digit)
    }

    fn insert_column(&mut self, column: usize, values: &[i64]) -> Result<InsertReport, GridError> {
        check_index(Axis::Column, column)?;
        let cells = &mut self.cells;
        Self::write_line(values, Axis::Column, |row, digit| {
            cells[row][column] = digit
        })
    }

    fn clear_row(&mut self, row: usize) -> Result<(), GridError> {
        check_index(Axis::Row, row)?;
        self.cells[row] = [0; GRID_SIZE];
        Ok(())
    }

    fn clear_column(&mut self, column: usize) -> Result<(), GridError> {
        check_index(Axis::Column, column)?;
        for row in self.cells.iter_mut() {
            row[column] = 0;
        }
        Ok(())
    }

    fn update_cell(&mut self, row: usize, column: usize, value: i64) -> Result<(), GridError> {
        check_index(Axis::Row, row)?;
        check_index(Axis::Column, column)?;
        let digit = to_digit(value).ok_or(GridError::ValueOutOfRange {
            value,
            max: MAX_CELL_VALUE,
        })?;
        self.cells[row][column] = digit;
        Ok(())
    }

    fn clear(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
    }

    fn rows(&self) -> Vec<Vec<u8>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }
}

fn check_index(axis: Axis, index: usize) -> Result<(), GridError> {
    if index >= GRID_SIZE {
        return Err(GridError::IndexOutOfBounds {
            axis,
            index,
            max: GRID_SIZE - 1,
        });
    }
    Ok(())
}

fn to_digit(value: i64) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|&digit| digit <= MAX_CELL_VALUE)
}

/// Endless stream of uniform digits drawn from v4 UUID random bytes
fn random_digits() -> impl Iterator<Item = u8> {
    std::iter::repeat_with(Uuid::new_v4)
        .flat_map(|uuid| {
            uuid.into_bytes()
                .into_iter()
                .enumerate()
                // bytes 6 and 8 carry the version and variant bits
                .filter(|&(index, _)| index != 6 && index != 8)
                .map(|(_, byte)| byte)
        })
        // 250 is the largest multiple of 10 that fits in a byte
        .filter(|&byte| byte < 250)
        .map(|byte| byte % 10)
}
