//! Thread-safe ledger handle
//!
//! Every mutation and recompute goes through one mutex, so concurrent
//! callers never see a half-applied cascade or a half-built result.
//! Listeners run while the lock is held and must not call back into the
//! same [`SharedLedger`].

use std::sync::{Arc, Mutex, MutexGuard};

use super::ledger::{Ledger, SplitOutcome};
use crate::error::{SplitterError, SplitterResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId, Money, Person, PersonId};

/// Cloneable handle to a ledger guarded by a mutex
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> SplitterResult<MutexGuard<'_, Ledger>> {
        self.inner
            .lock()
            .map_err(|e| SplitterError::Lock(format!("Failed to acquire ledger lock: {}", e)))
    }

    /// Run `f` with exclusive access to the ledger
    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> SplitterResult<R> {
        let mut ledger = self.lock()?;
        Ok(f(&mut ledger))
    }

    pub fn add_participant(&self, name: &str) -> SplitterResult<Person> {
        self.lock()?.add_participant(name)
    }

    pub fn remove_participant(&self, id: PersonId) -> SplitterResult<Option<Person>> {
        Ok(self.lock()?.remove_participant(id))
    }

    pub fn upsert_expense(
        &self,
        draft: ExpenseDraft,
        existing_id: Option<ExpenseId>,
    ) -> SplitterResult<Expense> {
        self.lock()?.upsert_expense(draft, existing_id)
    }

    pub fn delete_expense(&self, id: ExpenseId) -> SplitterResult<Option<Expense>> {
        Ok(self.lock()?.delete_expense(id))
    }

    pub fn clear_all(&self) -> SplitterResult<()> {
        self.lock()?.clear_all();
        Ok(())
    }

    pub fn recompute_results(&self) -> SplitterResult<Arc<SplitOutcome>> {
        self.lock()?.recompute_results()
    }

    /// Last computed results; a cheap pointer copy
    pub fn results(&self) -> SplitterResult<Arc<SplitOutcome>> {
        Ok(self.lock()?.results())
    }

    /// Snapshot of the participants
    pub fn participants(&self) -> SplitterResult<Vec<Person>> {
        Ok(self.lock()?.participants().to_vec())
    }

    /// Snapshot of the expenses
    pub fn expenses(&self) -> SplitterResult<Vec<Expense>> {
        Ok(self.lock()?.expenses().to_vec())
    }

    pub fn total_expenses(&self) -> SplitterResult<Money> {
        Ok(self.lock()?.total_expenses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_mutations() {
        let shared = SharedLedger::default();
        let payer = shared.add_participant("Host").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let guest = shared.add_participant(&format!("Guest {}", i)).unwrap();
                    let draft =
                        ExpenseDraft::new("Round", Money::new(10.0), payer.id, [payer.id, guest.id]);
                    shared.upsert_expense(draft, None).unwrap();
                    shared.recompute_results().unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.participants().unwrap().len(), 9);
        assert_eq!(shared.expenses().unwrap().len(), 8);
        assert_eq!(shared.total_expenses().unwrap(), Money::new(80.0));

        let outcome = shared.recompute_results().unwrap();
        assert_eq!(outcome.balances[0].person.id, payer.id);
        assert_eq!(outcome.balances[0].balance, Money::new(40.0));
        assert_eq!(outcome.settlements.len(), 8);
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedLedger::new(Ledger::new());
        let stale = shared
            .with(|ledger| {
                ledger.add_participant("A").unwrap();
                ledger.is_stale()
            })
            .unwrap();

        assert!(stale);
        assert!(shared.results().unwrap().is_empty());
    }
}
