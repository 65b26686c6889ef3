//! Thread-safe ledger handle
//!
//! `SharedLedger` wraps one `AccountLedger` behind a single mutex. Every
//! operation holds the lock for its full duration, so no caller can observe a
//! transfer with one leg applied and the other not.

use crate::core::ledger::AccountLedger;
use crate::types::{Account, AccountId, LedgerError};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, lock-protected handle to a ledger
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<AccountLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: AccountLedger) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // Ledger operations validate before they commit, so a panic while the
    // lock is held cannot leave a half-applied mutation behind.
    fn lock(&self) -> MutexGuard<'_, AccountLedger> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access to the ledger
    pub fn with<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut AccountLedger) -> T,
    {
        f(&mut self.lock())
    }

    pub fn create_account(
        &self,
        holder: &str,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        self.lock().create_account(holder, initial_balance).cloned()
    }

    pub fn find_account(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.lock().find_account(id).cloned()
    }

    pub fn rename_account(&self, id: AccountId, new_holder: &str) -> Result<(), LedgerError> {
        self.lock().rename_account(id, new_holder)
    }

    pub fn deposit(&self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.lock().deposit(id, amount)
    }

    pub fn withdraw(&self, id: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.lock().withdraw(id, amount)
    }

    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(Decimal, Decimal), LedgerError> {
        self.lock().transfer(from, to, amount)
    }

    /// Copy of every account in creation order
    pub fn snapshot(&self) -> Vec<Account> {
        self.lock().accounts().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_transfers_conserve_total() {
        let shared = SharedLedger::new(AccountLedger::with_sample_accounts());
        let total_before: Decimal = shared.snapshot().iter().map(Account::balance).sum();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let (from, to) = if worker % 2 == 0 {
                        (111, 222)
                    } else {
                        (222, 111)
                    };
                    for _ in 0..250 {
                        let _ = shared.transfer(from, to, Decimal::new(137, 2));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let accounts = shared.snapshot();
        let total_after: Decimal = accounts.iter().map(Account::balance).sum();
        assert_eq!(total_after, total_before);
        assert!(accounts.iter().all(|a| a.balance() >= Decimal::ZERO));
    }

    #[test]
    fn test_rename_through_handle_is_visible_to_clones() {
        let shared = SharedLedger::new(AccountLedger::with_sample_accounts());
        let other = shared.clone();

        shared.rename_account(222, "  Rith Chan ").unwrap();
        assert_eq!(other.find_account(222).unwrap().holder(), "Rith Chan");
        assert_eq!(
            other.rename_account(222, "   "),
            Err(LedgerError::empty_holder())
        );
        assert_eq!(
            other.rename_account(9, "Dara"),
            Err(LedgerError::account_not_found(9))
        );
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedLedger::new(AccountLedger::new());
        let id = shared
            .create_account("Dara", Decimal::new(500, 2))
            .unwrap()
            .id();

        let balance = shared.with(|ledger| {
            ledger.deposit(id, Decimal::ONE).unwrap();
            ledger.withdraw(id, Decimal::new(200, 2))
        });

        assert_eq!(balance.unwrap(), Decimal::new(400, 2));
        assert_eq!(
            shared.find_account(id).unwrap().balance(),
            Decimal::new(400, 2)
        );
    }
}
