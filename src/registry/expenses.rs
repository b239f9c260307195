//! Expense registry
//!
//! Stores expenses in entry order. Editing an expense keeps its position.

use chrono::Utc;

use crate::models::{Expense, ExpenseId, Money, PersonId};

/// Outcome of removing a participant from every expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    /// Expenses that lost a sharer but survived
    pub shrunk: Vec<ExpenseId>,
    /// Expenses deleted because no sharers remained or their payer left
    pub removed: Vec<ExpenseId>,
}

/// In-memory collection of expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseRegistry {
    expenses: Vec<Expense>,
}

impl ExpenseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an expense; returns true if it was newly created
    ///
    /// A replacement keeps the original `created_at` and list position.
    pub fn upsert(&mut self, mut expense: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => {
                expense.created_at = existing.created_at;
                expense.updated_at = Utc::now();
                *existing = expense;
                false
            }
            None => {
                self.expenses.push(expense);
                true
            }
        }
    }

    /// Delete an expense, returning it if present
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// All expenses in entry order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of every expense amount
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Strip `person` from every expense
    ///
    /// Drops the person from each sharer set, then deletes expenses left
    /// with no sharers. Expenses the person paid for are deleted even if
    /// others shared them, since no stored expense may name a payer who is
    /// gone. Only expenses the person merely shared are shrunk.
    pub fn remove_participant(&mut self, person: PersonId) -> Cascade {
        let mut cascade = Cascade::default();

        for expense in &mut self.expenses {
            if expense.remove_sharer(person) {
                cascade.shrunk.push(expense.id);
            }
        }

        self.expenses.retain(|expense| {
            let keep = !expense.sharers.is_empty() && expense.payer != person;
            if !keep {
                cascade.removed.push(expense.id);
            }
            keep
        });

        cascade.shrunk.retain(|id| !cascade.removed.contains(id));
        cascade
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }
}
