//! Interactive bank menu
//!
//! `BankShell` drives an `AccountLedger` from a line-oriented input: it
//! prompts for ids and amounts, parses them, calls the ledger and prints the
//! outcome. Business errors are printed as `Error: ...` and the menu loop
//! continues; only I/O failures end the session early.

use crate::cli::{ListFormat, ShellConfig};
use crate::core::{validate_holder, AccountLedger};
use crate::io::{format_balance, write_account_list, write_accounts_csv};
use crate::shell::console::Console;
use crate::types::{parse_amount, AccountId, LedgerError, ShellError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const MENU: &str = "\
:::: The Bank ::::
1.  Account List
2.  Create an account
3.  Deposit to an account
4.  Withdraw from an account
5.  Transfer to another account
6.  Quit";

const FAREWELL: &str = "Thank you for using the Bank Management System!";

pub struct BankShell<R, W> {
    ledger: AccountLedger,
    console: Console<R, W>,
    list_format: ListFormat,
}

impl<R: BufRead, W: Write> BankShell<R, W> {
    /// Create a shell around an existing ledger
    pub fn new(ledger: AccountLedger, input: R, output: W, list_format: ListFormat) -> Self {
        BankShell {
            ledger,
            console: Console::new(input, output),
            list_format,
        }
    }

    /// Create a shell whose ledger is built from `config`
    pub fn from_config(config: ShellConfig, input: R, output: W) -> Self {
        let ledger = if config.seed_sample_accounts {
            AccountLedger::with_sample_accounts()
        } else {
            AccountLedger::new()
        };
        Self::new(ledger, input, output, config.list_format)
    }

    pub fn ledger(&self) -> &AccountLedger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.console.say("Welcome to the Bank Management System!")?;

        loop {
            self.console.blank()?;
            self.console.say(MENU)?;

            let Some(choice) = self.console.prompt("Choose an opt: ")? else {
                self.console.blank()?;
                self.console.say(FAREWELL)?;
                return Ok(());
            };
            debug!(choice = %choice, "bank menu choice");

            match choice.as_str() {
                "1" => {
                    self.announce(&choice)?;
                    self.list_accounts()?;
                }
                "2" => {
                    self.announce(&choice)?;
                    self.create_account()?;
                }
                "3" => {
                    self.announce(&choice)?;
                    self.deposit()?;
                }
                "4" => {
                    self.announce(&choice)?;
                    self.withdraw()?;
                }
                "5" => {
                    self.announce(&choice)?;
                    self.transfer()?;
                }
                "6" => {
                    self.console.say(FAREWELL)?;
                    return Ok(());
                }
                _ => self.console.say("Invalid option. Please choose 1-6.")?,
            }
        }
    }

    fn announce(&mut self, choice: &str) -> Result<(), ShellError> {
        self.console.blank()?;
        self.console.say(&format!("Option: {}", choice))
    }

    fn report(&mut self, error: &LedgerError) -> Result<(), ShellError> {
        warn!(error = %error, "bank operation rejected");
        self.console.say(&format!("Error: {}", error))
    }

    fn report_bad_input(&mut self, input: &str) -> Result<(), ShellError> {
        warn!(input = %input, "unparseable account id");
        self.console.say("Error: Invalid input format.")
    }

    /// Prompt for an account id; `Ok(None)` when input ended or was rejected
    fn prompt_id(&mut self, text: &str) -> Result<Option<AccountId>, ShellError> {
        let Some(line) = self.console.prompt(text)? else {
            return Ok(None);
        };
        match line.parse::<AccountId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.report_bad_input(&line)?;
                Ok(None)
            }
        }
    }

    /// Prompt for an id that must name an existing account
    fn prompt_existing_id(&mut self, text: &str) -> Result<Option<AccountId>, ShellError> {
        let Some(id) = self.prompt_id(text)? else {
            return Ok(None);
        };
        if let Err(e) = self.ledger.find_account(id) {
            self.report(&e)?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn prompt_amount(
        &mut self,
        text: &str,
        operation: &str,
    ) -> Result<Option<Decimal>, ShellError> {
        let Some(line) = self.console.prompt(text)? else {
            return Ok(None);
        };
        match parse_amount(&line, operation) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                self.report(&e)?;
                Ok(None)
            }
        }
    }

    fn list_accounts(&mut self) -> Result<(), ShellError> {
        self.console.say(":::: Account List ::::")?;
        let accounts = self.ledger.accounts();
        match self.list_format {
            ListFormat::Table => write_account_list(accounts, self.console.output()),
            ListFormat::Csv => write_accounts_csv(accounts, self.console.output()),
        }
    }

    fn create_account(&mut self) -> Result<(), ShellError> {
        let Some(name) = self.console.prompt("Enter account holder name: ")? else {
            return Ok(());
        };
        if let Err(e) = validate_holder(&name) {
            return self.report(&e);
        }

        let Some(balance) = self.prompt_amount("Enter initial balance: $", "Initial balance")?
        else {
            return Ok(());
        };

        let created = self
            .ledger
            .create_account(&name, balance)
            .map(|account| account.id());
        match created {
            Ok(id) => {
                info!(account = id, balance = %balance, "account created");
                self.console.say("Account created successfully!")?;
                self.console.say(&format!("Account ID: {}", id))
            }
            Err(e) => self.report(&e),
        }
    }

    fn deposit(&mut self) -> Result<(), ShellError> {
        let Some(id) = self.prompt_existing_id("Enter account ID: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter deposit amount: $", "Deposit")? else {
            return Ok(());
        };

        match self.ledger.deposit(id, amount) {
            Ok(balance) => {
                info!(account = id, amount = %amount, balance = %balance, "deposit committed");
                self.console.say("Deposit successful!")?;
                self.console
                    .say(&format!("New balance: ${}", format_balance(balance)))
            }
            Err(e) => self.report(&e),
        }
    }

    fn withdraw(&mut self) -> Result<(), ShellError> {
        let Some(id) = self.prompt_existing_id("Enter account ID: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter withdrawal amount: $", "Withdrawal")? else {
            return Ok(());
        };

        match self.ledger.withdraw(id, amount) {
            Ok(balance) => {
                info!(account = id, amount = %amount, balance = %balance, "withdrawal committed");
                self.console.say("Withdrawal successful!")?;
                self.console
                    .say(&format!("New balance: ${}", format_balance(balance)))
            }
            Err(e) => self.report(&e),
        }
    }

    fn transfer(&mut self) -> Result<(), ShellError> {
        let Some(from) = self.prompt_id("Enter source account ID: ")? else {
            return Ok(());
        };
        let Some(to) = self.prompt_id("Enter destination account ID: ")? else {
            return Ok(());
        };

        if from == to {
            return self.report(&LedgerError::same_account_transfer());
        }
        for id in [from, to] {
            if let Err(e) = self.ledger.find_account(id) {
                return self.report(&e);
            }
        }

        let Some(amount) = self.prompt_amount("Enter transfer amount: $", "Transfer")? else {
            return Ok(());
        };

        match self.ledger.transfer(from, to, amount) {
            Ok((from_balance, to_balance)) => {
                info!(from, to, amount = %amount, "transfer committed");
                self.console.say("Transfer successful!")?;
                self.console.say(&format!(
                    "From Account Balance: ${}",
                    format_balance(from_balance)
                ))?;
                self.console.say(&format!(
                    "To Account Balance: ${}",
                    format_balance(to_balance)
                ))
            }
            Err(e) => self.report(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;

    fn run_session(script: &str) -> (String, AccountLedger) {
        let mut shell = BankShell::from_config(
            ShellConfig::default(),
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        shell.run().unwrap();
        let ledger = shell.ledger().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (output, ledger)
    }

    fn balance(ledger: &AccountLedger, id: AccountId) -> Decimal {
        ledger.find_account(id).unwrap().balance()
    }

    #[test]
    fn test_quit_immediately() {
        let (output, _) = run_session("6\n");
        assert!(output.starts_with("Welcome to the Bank Management System!\n"));
        assert!(output.contains("6.  Quit\nChoose an opt: "));
        assert!(output.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (output, _) = run_session("");
        assert!(output.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_deposit_prints_new_balance() {
        let (output, ledger) = run_session("3\n111\n100.00\n6\n");
        assert!(output.contains("Option: 3\nEnter account ID: Enter deposit amount: $"));
        assert!(output.contains("Deposit successful!\nNew balance: $503.34\n"));
        assert_eq!(balance(&ledger, 111), Decimal::from_str("503.34").unwrap());
    }

    #[test]
    fn test_deposit_unknown_account_skips_amount_prompt() {
        let (output, _) = run_session("3\n999\n6\n");
        assert!(output.contains("Error: Account with ID 999 not found.\n"));
        assert!(!output.contains("Enter deposit amount"));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let (output, ledger) = run_session("4\n4444\n500\n6\n");
        assert!(output.contains(
            "Error: Insufficient funds in account 4444. Available balance: $203.34, requested $500.00\n"
        ));
        assert_eq!(balance(&ledger, 4444), Decimal::from_str("203.34").unwrap());
    }

    #[test]
    fn test_amount_with_three_decimals_rejected() {
        let (output, ledger) = run_session("4\n111\n10.555\n6\n");
        assert!(output.contains("Error: Withdrawal amount '10.555' is invalid"));
        assert_eq!(balance(&ledger, 111), Decimal::from_str("403.34").unwrap());
    }

    #[test]
    fn test_bad_id_reports_invalid_input() {
        let (output, _) = run_session("3\nabc\n6\n");
        assert!(output.contains("Error: Invalid input format.\n"));
    }

    #[test]
    fn test_create_account() {
        let (output, ledger) = run_session("2\nDara\n$25.5\n6\n");
        assert!(output.contains("Account created successfully!\nAccount ID: 10001\n"));
        assert_eq!(ledger.find_account(10001).unwrap().holder(), "Dara");
        assert_eq!(balance(&ledger, 10001), Decimal::from_str("25.50").unwrap());
    }

    #[test]
    fn test_create_account_empty_name_skips_balance_prompt() {
        let (output, ledger) = run_session("2\n   \n6\n");
        assert!(output.contains("Error: Account holder name cannot be empty.\n"));
        assert!(!output.contains("Enter initial balance"));
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_transfer_success() {
        let (output, ledger) = run_session("5\n111\n222\n3.34\n6\n");
        assert!(output.contains(
            "Transfer successful!\nFrom Account Balance: $400.00\nTo Account Balance: $806.68\n"
        ));
        assert_eq!(balance(&ledger, 222), Decimal::from_str("806.68").unwrap());
    }

    #[test]
    fn test_transfer_same_account() {
        let (output, _) = run_session("5\n111\n111\n6\n");
        assert!(output.contains("Error: Cannot transfer to the same account.\n"));
        assert!(!output.contains("Enter transfer amount"));
    }

    #[test]
    fn test_transfer_missing_destination() {
        let (output, _) = run_session("5\n111\n5\n6\n");
        assert!(output.contains("Error: Account with ID 5 not found.\n"));
    }

    #[test]
    fn test_invalid_option() {
        let (output, _) = run_session("9\n6\n");
        assert!(output.contains("Invalid option. Please choose 1-6.\n"));
    }

    #[test]
    fn test_account_list() {
        let (output, _) = run_session("1\n6\n");
        assert!(output.contains(
            ":::: Account List ::::\nNo #1\nACC_ID: 0000000111\nACC_HOLDER: Sitha\nACC_BALANCE: 403.34$\n"
        ));
        assert!(output.contains("No #4\nACC_ID: 0000004444\n"));
    }

    #[test]
    fn test_account_list_csv() {
        let config = ShellConfig {
            seed_sample_accounts: false,
            list_format: ListFormat::Csv,
        };
        let mut shell =
            BankShell::from_config(config, Cursor::new("2\nDara\n10\n1\n6\n"), Vec::new());
        shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();

        assert!(output.contains("Account ID: 111\n"));
        assert!(output.contains(":::: Account List ::::\nid,holder,balance\n111,Dara,10.00\n"));
    }

    #[test]
    fn test_empty_account_list() {
        let config = ShellConfig {
            seed_sample_accounts: false,
            list_format: ListFormat::Table,
        };
        let mut shell = BankShell::from_config(config, Cursor::new("1\n6\n"), Vec::new());
        shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains(":::: Account List ::::\nNo accounts found.\n"));
    }
}
