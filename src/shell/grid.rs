//! Interactive grid editor and scripted walkthrough
//!
//! `GridShell` drives a `BoundedGrid` from a line-oriented input. Rejected
//! calls print `Error: ...`; clamped bulk-insert entries print one
//! `Warning: ...` line each while the rest of the payload is kept.

use crate::core::{BoundedGrid, GridLayout, InsertReport};
use crate::io::render_grid;
use crate::shell::console::Console;
use crate::types::{GridError, ShellError};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const MENU: &str = "\
:::: The Grid Editor ::::
1.  Update a cell
2.  Insert at a row
3.  Insert at a column
4.  Clear a row
5.  Clear a column
6.  Clear the grid
7.  Fill randomly
8.  Display the grid
9.  Quit";

const FAREWELL: &str = "Goodbye!";

pub struct GridShell<R, W> {
    grid: BoundedGrid,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> GridShell<R, W> {
    /// Create a shell around a zero-filled grid
    pub fn new(input: R, output: W) -> Self {
        GridShell {
            grid: BoundedGrid::new(),
            console: Console::new(input, output),
        }
    }

    pub fn grid(&self) -> &BoundedGrid {
        &self.grid
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.console.say("Welcome to the Grid Editor!")?;

        loop {
            self.console.blank()?;
            self.console.say(MENU)?;

            let Some(choice) = self.console.prompt("Choose an opt: ")? else {
                self.console.blank()?;
                self.console.say(FAREWELL)?;
                return Ok(());
            };
            debug!(choice = %choice, "grid menu choice");

            match choice.as_str() {
                "1" => self.update_cell()?,
                "2" => self.insert_line(Line::Row)?,
                "3" => self.insert_line(Line::Column)?,
                "4" => self.clear_line(Line::Row)?,
                "5" => self.clear_line(Line::Column)?,
                "6" => {
                    self.grid.clear();
                    info!("grid cleared");
                    self.console.say("Grid cleared.")?;
                }
                "7" => {
                    self.grid.fill_randomly();
                    info!("grid filled randomly");
                    self.console.say("Grid filled with random values.")?;
                }
                "8" => {
                    let rendered = render_grid(&self.grid);
                    write!(self.console.output(), "{}", rendered)?;
                }
                "9" => {
                    self.console.say(FAREWELL)?;
                    return Ok(());
                }
                _ => self.console.say("Invalid option. Please choose 1-9.")?,
            }
        }
    }

    fn report(&mut self, error: &GridError) -> Result<(), ShellError> {
        warn!(error = %error, "grid operation rejected");
        self.console.say(&format!("Error: {}", error))
    }

    fn report_bad_input(&mut self, input: &str) -> Result<(), ShellError> {
        warn!(input = %input, "unparseable grid input");
        self.console.say("Error: Invalid input format.")
    }

    fn report_clamped(&mut self, report: &InsertReport) -> Result<(), ShellError> {
        for clamped in &report.clamped {
            warn!(
                position = clamped.position,
                value = clamped.value,
                "value clamped to 0"
            );
            self.console.say(&format!("Warning: {}", clamped))?;
        }
        Ok(())
    }

    /// Prompt for a number; `Ok(None)` when input ended or was rejected
    fn prompt_number<T: std::str::FromStr>(&mut self, text: &str) -> Result<Option<T>, ShellError> {
        let Some(line) = self.console.prompt(text)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.report_bad_input(&line)?;
                Ok(None)
            }
        }
    }

    fn update_cell(&mut self) -> Result<(), ShellError> {
        let Some(row) = self.prompt_number::<usize>("Enter row number: ")? else {
            return Ok(());
        };
        let Some(column) = self.prompt_number::<usize>("Enter column number: ")? else {
            return Ok(());
        };
        let Some(value) = self.prompt_number::<i64>("Enter value (0-9): ")? else {
            return Ok(());
        };

        match self.grid.update_cell(row, column, value) {
            Ok(()) => {
                info!(row, column, value, "cell updated");
                self.console
                    .say(&format!("Cell [{}][{}] updated to {}", row, column, value))
            }
            Err(e) => self.report(&e),
        }
    }

    fn insert_line(&mut self, line: Line) -> Result<(), ShellError> {
        let Some(index) = self.prompt_number::<usize>(line.index_prompt())? else {
            return Ok(());
        };
        let Some(text) = self.console.prompt(&format!(
            "Enter up to {} values separated by spaces: ",
            self.grid.size()
        ))?
        else {
            return Ok(());
        };
        let Some(values) = parse_values(&text) else {
            return self.report_bad_input(&text);
        };

        let result = match line {
            Line::Row => self.grid.insert_row(index, &values),
            Line::Column => self.grid.insert_column(index, &values),
        };

        match result {
            Ok(report) => {
                self.report_clamped(&report)?;
                info!(
                    line = line.name(),
                    index,
                    written = report.written,
                    "line inserted"
                );
                self.console
                    .say(&format!("{} {} updated.", line.name(), index))
            }
            Err(e) => self.report(&e),
        }
    }

    fn clear_line(&mut self, line: Line) -> Result<(), ShellError> {
        let Some(index) = self.prompt_number::<usize>(line.index_prompt())? else {
            return Ok(());
        };

        let result = match line {
            Line::Row => self.grid.clear_row(index),
            Line::Column => self.grid.clear_column(index),
        };

        match result {
            Ok(()) => {
                info!(line = line.name(), index, "line cleared");
                self.console
                    .say(&format!("{} {} cleared.", line.name(), index))
            }
            Err(e) => self.report(&e),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Line {
    Row,
    Column,
}

impl Line {
    fn name(self) -> &'static str {
        match self {
            Line::Row => "Row",
            Line::Column => "Column",
        }
    }

    fn index_prompt(self) -> &'static str {
        match self {
            Line::Row => "Enter row number: ",
            Line::Column => "Enter column number: ",
        }
    }
}

/// Parse a whitespace- or comma-separated list of integers
fn parse_values(text: &str) -> Option<Vec<i64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect()
}

/// Write the scripted grid walkthrough to `output`
///
/// Exercises every grid operation in turn, rendering the grid after each
/// edit, then fills it randomly and prints a row, a column, a cell and the
/// emptiness check.
pub fn run_grid_demo(output: &mut dyn Write) -> Result<(), ShellError> {
    let mut grid = BoundedGrid::new();
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "1. Update a single cell")?;
    for (row, column, value) in [(2, 3, 5), (0, 0, 1)] {
        match grid.update_cell(row, column, value) {
            Ok(()) => writeln!(output, "Cell [{}][{}] updated to {}", row, column, value)?,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "2. Insert at a row")?;
    demo_insert(output, grid.insert_row(1, &[1, 2, 3, 4, 5, 6, 7]))?;
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "3. Insert at a column")?;
    demo_insert(output, grid.insert_column(5, &[9, 8, 7, 6, 5, 4, 3]))?;
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "4. Clear at a row")?;
    match grid.clear_row(1) {
        Ok(()) => writeln!(output, "Row 1 cleared.")?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "5. Clear at a column")?;
    match grid.clear_column(5) {
        Ok(()) => writeln!(output, "Column 5 cleared.")?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "6. Clear all")?;
    grid.clear();
    writeln!(output, "Grid cleared.")?;
    write!(output, "{}", render_grid(&grid))?;

    writeln!(output, "Testing additional features:")?;
    grid.fill_randomly();
    writeln!(output, "Grid filled with random values.")?;
    write!(output, "{}", render_grid(&grid))?;

    match grid.row(3) {
        Ok(row) => writeln!(output, "Row 3: {:?}", row)?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    match grid.column(2) {
        Ok(column) => writeln!(output, "Column 2: {:?}", column)?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    match grid.cell(4, 4) {
        Ok(value) => writeln!(output, "Cell [4][4] value: {}", value)?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    writeln!(output, "Is grid empty? {}", grid.is_empty())?;

    Ok(())
}

fn demo_insert(
    output: &mut dyn Write,
    result: Result<InsertReport, GridError>,
) -> Result<(), ShellError> {
    match result {
        Ok(report) => {
            for clamped in &report.clamped {
                writeln!(output, "Warning: {}", clamped)?;
            }
        }
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    Ok(())
}
