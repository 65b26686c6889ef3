//! Account ledger module
//!
//! This module provides the `AccountLedger` struct which owns every account
//! and is the only way to change a balance or a holder name.
//!
//! The AccountLedger is responsible for:
//! - Assigning unique, monotonically increasing account ids
//! - Validating amounts and resulting balances before any mutation
//! - Applying transfers to both accounts or to neither
//! - Providing the accounts in creation order for listings
//!
//! Every operation validates fully before it commits, so a returned error
//! always means the ledger is exactly as it was before the call.

use crate::types::{
    check_balance_limit, check_deposit_range, validate_amount, Account, AccountId, LedgerError,
};
use rust_decimal::Decimal;

/// First id handed out by an empty ledger
pub const FIRST_ACCOUNT_ID: AccountId = 111;

/// First id handed out once the sample accounts are loaded
pub const FIRST_ID_AFTER_SAMPLES: AccountId = 10001;

/// In-memory collection of accounts in creation order
#[derive(Debug, Clone)]
pub struct AccountLedger {
    accounts: Vec<Account>,
    next_id: AccountId,
}

impl AccountLedger {
    /// Create a ledger with no accounts
    pub fn new() -> Self {
        AccountLedger {
            accounts: Vec::new(),
            next_id: FIRST_ACCOUNT_ID,
        }
    }

    /// Create a ledger pre-loaded with the four sample accounts
    ///
    /// New ids start at [`FIRST_ID_AFTER_SAMPLES`], above every sample id.
    pub fn with_sample_accounts() -> Self {
        let samples = [
            (111, "Sitha", Decimal::new(40334, 2)),
            (222, "Rith", Decimal::new(80334, 2)),
            (333, "Heng", Decimal::new(60334, 2)),
            (4444, "Lin", Decimal::new(20334, 2)),
        ];

        let accounts = samples
            .into_iter()
            .map(|(id, holder, balance)| Account::new(id, holder, balance))
            .collect();

        AccountLedger {
            accounts,
            next_id: FIRST_ID_AFTER_SAMPLES,
        }
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Open a new account
    ///
    /// # Arguments
    ///
    /// * `holder` - Display name; must not be empty after trimming
    /// * `initial_balance` - Opening balance; must be a valid amount within the balance range
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The holder name is empty or whitespace (`InvalidArgument`)
    /// - The initial balance is negative or has more than 2 decimals (`InvalidAmount`)
    /// - The initial balance exceeds the balance ceiling (`BalanceLimitExceeded`)
    ///
    /// No id is consumed when creation fails.
    pub fn create_account(
        &mut self,
        holder: &str,
        initial_balance: Decimal,
    ) -> Result<&Account, LedgerError> {
        validate_holder(holder)?;
        validate_amount(initial_balance, "Initial balance")?;
        check_balance_limit(initial_balance)?;

        let id = self.next_id;
        self.next_id += 1;
        let account = Account::new(id, holder, initial_balance);
        self.accounts.push(account);

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Look up an account by id
    pub fn find_account(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|account| account.id == id)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    fn position(&self, id: AccountId) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Replace an account holder's name
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty or whitespace-only name and
    /// `AccountNotFound` if the id is unknown.
    pub fn rename_account(&mut self, id: AccountId, new_holder: &str) -> Result<(), LedgerError> {
        validate_holder(new_holder)?;
        let index = self.position(id)?;
        self.accounts[index].holder = new_holder.trim().to_string();
        Ok(())
    }

    /// Deposit funds into an account
    ///
    /// # Returns
    ///
    /// The new balance of the account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is malformed or outside the deposit range `[0.01, 10000.00]`
    /// - The resulting balance would exceed the balance ceiling
    pub fn deposit(&mut self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        let index = self.position(id)?;

        validate_amount(amount, "Deposit")?;
        check_deposit_range(amount)?;

        let account = &mut self.accounts[index];
        let new_balance = account.balance.saturating_add(amount);
        check_balance_limit(new_balance)?;

        account.balance = new_balance;
        Ok(new_balance)
    }

    /// Withdraw funds from an account
    ///
    /// # Returns
    ///
    /// The new balance of the account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is malformed
    /// - The amount exceeds the current balance (`InsufficientFunds`)
    /// - The resulting balance would fall below the floor
    pub fn withdraw(&mut self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        let index = self.position(id)?;

        validate_amount(amount, "Withdrawal")?;

        let account = &mut self.accounts[index];
        if amount > account.balance {
            return Err(LedgerError::insufficient_funds(id, account.balance, amount));
        }

        // Never fails once the funds check has passed
        let new_balance = account.balance - amount;
        check_balance_limit(new_balance)?;

        account.balance = new_balance;
        Ok(new_balance)
    }

    /// Move funds between two accounts
    ///
    /// Both resulting balances are computed and validated before either
    /// account is touched, so a transfer applies to both accounts or neither.
    ///
    /// # Returns
    ///
    /// `(source_balance, destination_balance)` after the transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `from == to` (`InvalidArgument`, reported before any lookup)
    /// - Either account does not exist (source is checked first)
    /// - The amount is malformed
    /// - The source cannot cover the amount (`InsufficientFunds`)
    /// - Either resulting balance would leave the balance range
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(Decimal, Decimal), LedgerError> {
        if from == to {
            return Err(LedgerError::same_account_transfer());
        }

        let from_index = self.position(from)?;
        let to_index = self.position(to)?;

        validate_amount(amount, "Transfer")?;

        let from_balance = self.accounts[from_index].balance;
        let to_balance = self.accounts[to_index].balance;

        if amount > from_balance {
            return Err(LedgerError::insufficient_funds(from, from_balance, amount));
        }

        let new_from_balance = from_balance - amount;
        let new_to_balance = to_balance.saturating_add(amount);

        check_balance_limit(new_from_balance)?;
        check_balance_limit(new_to_balance)?;

        self.accounts[from_index].balance = new_from_balance;
        self.accounts[to_index].balance = new_to_balance;

        Ok((new_from_balance, new_to_balance))
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a holder name has visible content
pub fn validate_holder(holder: &str) -> Result<(), LedgerError> {
    if holder.trim().is_empty() {
        return Err(LedgerError::empty_holder());
    }
    Ok(())
}
