//! Display formatting for accounts and grids
//!
//! This module centralizes all output format concerns, providing:
//! - Two-decimal balance formatting
//! - The account listing (zero-padded ids) as text or CSV
//! - Grid rendering with row and column index gutters
//!
//! All functions write to a caller-supplied sink or return a `String`, so
//! they can be tested without a terminal.

use crate::core::GridLayout;
use crate::types::{Account, AccountId, ShellError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// CSV row for the account listing
#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    id: AccountId,
    holder: &'a str,
    balance: String,
}

/// Format a balance with exactly two decimals
pub fn format_balance(balance: Decimal) -> String {
    format!("{:.2}", balance)
}

/// Write the numbered, human-readable account listing
///
/// Each account is written as:
///
/// ```text
/// No #1
/// ACC_ID: 0000000111
/// ACC_HOLDER: Sitha
/// ACC_BALANCE: 403.34$
/// ```
///
/// followed by a blank line. An empty ledger writes `No accounts found.`
pub fn write_account_list(accounts: &[Account], output: &mut dyn Write) -> Result<(), ShellError> {
    if accounts.is_empty() {
        writeln!(output, "No accounts found.")?;
        return Ok(());
    }

    for (index, account) in accounts.iter().enumerate() {
        writeln!(output, "No #{}", index + 1)?;
        writeln!(output, "ACC_ID: {:010}", account.id())?;
        writeln!(output, "ACC_HOLDER: {}", account.holder())?;
        writeln!(
            output,
            "ACC_BALANCE: {}$",
            format_balance(account.balance())
        )?;
        writeln!(output)?;
    }

    Ok(())
}

/// Write the account listing as CSV with columns: id, holder, balance
///
/// Accounts are written in the order given (creation order for a ledger).
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), ShellError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["id", "holder", "balance"])?;

    for account in accounts {
        writer.serialize(AccountRow {
            id: account.id(),
            holder: account.holder(),
            balance: format_balance(account.balance()),
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Render a grid with a column header, a rule and a row-index gutter
///
/// ```text
/// :::: The GRID ::::
///
///   0 1 2 3 4 5 6
///   - - - - - - -
/// 0 - 0 0 0 0 0 0 0
/// ```
///
/// Every cell and header entry is followed by a single space.
pub fn render_grid(grid: &impl GridLayout) -> String {
    let header: String = (0..grid.size())
        .map(|column| format!("{} ", column))
        .collect();
    let rule = "- ".repeat(grid.size());

    let mut out = format!(":::: The GRID ::::\n\n  {}\n  {}\n", header, rule);
    for (index, row) in grid.rows().iter().enumerate() {
        let cells: String = row.iter().map(|cell| format!("{} ", cell)).collect();
        out.push_str(&format!("{} - {}\n", index, cells));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccountLedger, BoundedGrid};
    use rstest::rstest;

    #[rstest]
    #[case::whole(Decimal::new(100, 0), "100.00")]
    #[case::one_decimal(Decimal::new(125, 1), "12.50")]
    #[case::zero(Decimal::ZERO, "0.00")]
    #[case::ceiling(Decimal::new(99_999_999, 2), "999999.99")]
    fn test_format_balance(#[case] balance: Decimal, #[case] expected: &str) {
        assert_eq!(format_balance(balance), expected);
    }

    #[test]
    fn test_write_account_list() {
        let mut ledger = AccountLedger::new();
        ledger
            .create_account("Sitha", Decimal::new(40334, 2))
            .unwrap();
        ledger.create_account("Rith", Decimal::new(8, 0)).unwrap();

        let mut output = Vec::new();
        write_account_list(ledger.accounts(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No #1\nACC_ID: 0000000111\nACC_HOLDER: Sitha\nACC_BALANCE: 403.34$\n\n\
             No #2\nACC_ID: 0000000112\nACC_HOLDER: Rith\nACC_BALANCE: 8.00$\n\n"
        );
    }

    #[test]
    fn test_write_account_list_empty() {
        let mut output = Vec::new();
        write_account_list(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No accounts found.\n");
    }

    #[rstest]
    #[case::samples(
        AccountLedger::with_sample_accounts(),
        "id,holder,balance\n111,Sitha,403.34\n222,Rith,803.34\n333,Heng,603.34\n4444,Lin,203.34\n"
    )]
    #[case::empty(AccountLedger::new(), "id,holder,balance\n")]
    fn test_write_accounts_csv(#[case] ledger: AccountLedger, #[case] expected: &str) {
        let mut output = Vec::new();
        write_accounts_csv(ledger.accounts(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_accounts_csv_quotes_holder() {
        let mut ledger = AccountLedger::new();
        ledger.create_account("Lin, Jr.", Decimal::ONE).unwrap();

        let mut output = Vec::new();
        write_accounts_csv(ledger.accounts(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,holder,balance\n111,\"Lin, Jr.\",1.00\n"
        );
    }

    #[test]
    fn test_render_empty_grid() {
        let grid = BoundedGrid::new();
        let mut expected =
            String::from(":::: The GRID ::::\n\n  0 1 2 3 4 5 6 \n  - - - - - - - \n");
        for row in 0..7 {
            expected.push_str(&format!("{} - 0 0 0 0 0 0 0 \n", row));
        }
        expected.push('\n');

        assert_eq!(render_grid(&grid), expected);
    }

    #[test]
    fn test_render_grid_shows_values() {
        let mut grid = BoundedGrid::new();
        grid.insert_row(1, &[1, 2, 3, 4, 5, 6, 7]).unwrap();

        let rendered = render_grid(&grid);
        assert!(rendered.contains("\n1 - 1 2 3 4 5 6 7 \n"));
        assert!(rendered.contains("\n2 - 0 0 0 0 0 0 0 \n"));
    }
}
