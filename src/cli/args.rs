use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Interactive bank-account manager and digit-grid editor
#[derive(Parser, Debug)]
#[command(name = "bankgrid")]
#[command(about = "Interactive bank-account manager and digit-grid editor", long_about = None)]
pub struct CliArgs {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Console program to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the bank menu
    Bank {
        /// Read menu input from a script file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Start with an empty ledger instead of the sample accounts
        #[arg(long)]
        no_sample_accounts: bool,

        /// Layout of the account list
        #[arg(
            long = "format",
            value_name = "FORMAT",
            default_value = "table",
            help = "Account list layout: 'table' or 'csv'"
        )]
        format: ListFormat,
    },

    /// Run the grid editor menu
    Grid {
        /// Read menu input from a script file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
    },

    /// Run the scripted grid walkthrough
    GridDemo,
}

/// Available layouts for the account list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Csv,
}

/// Settings a shell session runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Pre-load the sample accounts into the ledger
    pub seed_sample_accounts: bool,
    /// Layout of the account list
    pub list_format: ListFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            seed_sample_accounts: true,
            list_format: ListFormat::Table,
        }
    }
}

impl CliArgs {
    /// Create a ShellConfig from CLI arguments
    ///
    /// Commands without bank options get the defaults.
    pub fn to_shell_config(&self) -> ShellConfig {
        match &self.command {
            Command::Bank {
                no_sample_accounts,
                format,
                ..
            } => ShellConfig {
                seed_sample_accounts: !no_sample_accounts,
                list_format: *format,
            },
            Command::Grid { .. } | Command::GridDemo => ShellConfig::default(),
        }
    }

    /// Script file to replay, if any
    pub fn script(&self) -> Option<&PathBuf> {
        match &self.command {
            Command::Bank { script, .. } | Command::Grid { script } => script.as_ref(),
            Command::GridDemo => None,
        }
    }
}
