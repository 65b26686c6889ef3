//! Bank ledger and grid editor CLI
//!
//! Interactive console programs over the in-memory components.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- bank
//! cargo run -- bank --no-sample-accounts --format csv
//! cargo run -- bank --script session.txt > transcript.txt
//! cargo run -- grid
//! cargo run -- grid-demo
//! ```
//!
//! The session transcript goes to stdout; logs go to stderr (`-v` or
//! `RUST_LOG` to raise the level).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script file not found, I/O failure, etc.)

use bankgrid::cli::{self, Command};
use bankgrid::shell::{run_grid_demo, BankShell, GridShell};
use bankgrid::{logging, ShellError};
use std::io;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    logging::init_cli_logger(args.verbose);

    if let Err(e) = run(&args) {
        error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), ShellError> {
    let config = args.to_shell_config();
    let output = io::stdout().lock();

    match &args.command {
        Command::Bank { .. } => {
            let input = cli::open_input(args.script().map(|p| p.as_path()))?;
            BankShell::from_config(config, input, output).run()
        }
        Command::Grid { .. } => {
            let input = cli::open_input(args.script().map(|p| p.as_path()))?;
            GridShell::new(input, output).run()
        }
        Command::GridDemo => {
            let mut output = output;
            run_grid_demo(&mut output)
        }
    }
}
