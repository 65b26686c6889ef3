// CLI module
// Command-line interface, argument parsing and shell input selection

mod args;

pub use args::{CliArgs, Command, ListFormat, ShellConfig};

use crate::types::ShellError;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments, missing subcommand, or --help
/// flag), clap displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Open the input a shell reads its menu choices from
///
/// A script path is opened as a buffered file; without one the shell reads
/// stdin.
///
/// # Errors
///
/// Returns `ShellError::FileNotFound` if the script does not exist, or
/// `ShellError::IoError` if it cannot be opened.
pub fn open_input(script: Option<&Path>) -> Result<Box<dyn BufRead>, ShellError> {
    match script {
        Some(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ShellError::FileNotFound {
                    path: path.display().to_string(),
                },
                _ => ShellError::from(e),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
