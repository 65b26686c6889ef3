//! Account-related types for the bank ledger
//!
//! This module defines the Account structure held by `AccountLedger`.

use rust_decimal::Decimal;

/// Account identifier
///
/// Assigned by the ledger at creation and immutable afterwards.
pub type AccountId = u64;

/// A single bank account
///
/// Fields are read-only outside the crate: balances and holder names change
/// only through `AccountLedger` operations, which enforce the balance range.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(crate) id: AccountId,
    pub(crate) holder: String,

    /// Always within `[MIN_BALANCE, MAX_BALANCE]` with at most 2 decimals
    pub(crate) balance: Decimal,
}

impl Account {
    pub(crate) fn new(id: AccountId, holder: &str, balance: Decimal) -> Self {
        Account {
            id,
            holder: holder.trim().to_string(),
            balance,
        }
    }

    /// The account id
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// The account holder's display name
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }
}
