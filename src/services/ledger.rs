//! Ledger service
//!
//! Owns the participant and expense registries, validates every mutation,
//! and recomputes balances and settlements on request. Results are replaced
//! wholesale on each recompute; a mutation only marks them stale.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::balance::compute_balances;
use super::settlement::compute_settlements;
use crate::error::{SplitterError, SplitterResult};
use crate::models::{
    BalanceRecord, Expense, ExpenseDraft, ExpenseId, Money, Person, PersonId, Settlement,
    SettlementPolicy,
};
use crate::registry::{Cascade, ExpenseRegistry, ParticipantRegistry};

/// Balances and the transfers that settle them, computed together
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplitOutcome {
    pub balances: Vec<BalanceRecord>,
    pub settlements: Vec<Settlement>,
}

impl SplitOutcome {
    /// True when there is nothing to show or pay
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty() && self.settlements.is_empty()
    }
}

/// Notification sent to listeners after the ledger changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    ParticipantAdded(PersonId),
    ParticipantRemoved { id: PersonId, cascade: Cascade },
    ExpenseSaved { id: ExpenseId, created: bool },
    ExpenseDeleted(ExpenseId),
    Cleared,
    Recomputed,
}

/// Callback invoked with each [`LedgerEvent`]
pub type Listener = Box<dyn Fn(&LedgerEvent) + Send + Sync>;

/// Handle returned by [`Ledger::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The shared-expense ledger
pub struct Ledger {
    participants: ParticipantRegistry,
    expenses: ExpenseRegistry,
    policy: SettlementPolicy,
    outcome: Arc<SplitOutcome>,
    stale: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Ledger {
    /// Create an empty ledger with the default 0.01 / 2-decimal policy
    pub fn new() -> Self {
        Self::with_policy(SettlementPolicy::default())
    }

    /// Create an empty ledger with a custom settlement policy
    pub fn with_policy(policy: SettlementPolicy) -> Self {
        Self {
            participants: ParticipantRegistry::new(),
            expenses: ExpenseRegistry::new(),
            policy,
            outcome: Arc::new(SplitOutcome::default()),
            stale: false,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn policy(&self) -> &SettlementPolicy {
        &self.policy
    }

    // ---- participants -------------------------------------------------

    /// Register a new participant
    ///
    /// The name is trimmed. A duplicate name still gets a fresh identity.
    ///
    /// # Errors
    ///
    /// [`SplitterError::Validation`] if the trimmed name is empty or longer
    /// than 100 characters
    pub fn add_participant(&mut self, name: &str) -> SplitterResult<Person> {
        let person = Person::new(name);
        person.validate().map_err(|e| {
            tracing::warn!(error = %e, "rejected participant");
            SplitterError::Validation(e.to_string())
        })?;

        self.participants.insert(person.clone());
        tracing::debug!(id = %person.id, name = %person.name, "participant added");

        self.invalidate(LedgerEvent::ParticipantAdded(person.id));
        Ok(person)
    }

    /// Remove a participant and cascade into the expenses
    ///
    /// The person is dropped from every sharer set, and expenses left
    /// without sharers are deleted. Expenses the person paid for are
    /// deleted as well, even when other people shared them: an expense
    /// cannot keep a payer who is no longer a participant, and there is no
    /// one to reassign the payment to. Unknown ids are a no-op and return
    /// `None`.
    pub fn remove_participant(&mut self, id: PersonId) -> Option<Person> {
        let person = self.participants.remove(id)?;
        let cascade = self.expenses.remove_participant(id);

        tracing::debug!(
            id = %id,
            shrunk = cascade.shrunk.len(),
            removed = cascade.removed.len(),
            "participant removed"
        );

        self.invalidate(LedgerEvent::ParticipantRemoved { id, cascade });
        Some(person)
    }

    pub fn participant(&self, id: PersonId) -> Option<&Person> {
        self.participants.get(id)
    }

    /// Participants in the order they were added
    pub fn participants(&self) -> &[Person] {
        self.participants.all()
    }

    // ---- expenses -----------------------------------------------------

    /// Create or replace an expense
    ///
    /// With `existing_id` naming a stored expense, that expense is replaced
    /// in place. Otherwise a new expense is created, keeping `existing_id`
    /// as its id when one was supplied.
    ///
    /// # Errors
    ///
    /// - [`SplitterError::Validation`] for a blank description, a
    ///   non-positive amount, a missing payer or an empty sharer set
    /// - [`SplitterError::Referential`] when the payer or a sharer is not
    ///   a current participant
    pub fn upsert_expense(
        &mut self,
        draft: ExpenseDraft,
        existing_id: Option<ExpenseId>,
    ) -> SplitterResult<Expense> {
        draft.validate().map_err(|e| {
            tracing::warn!(error = %e, "rejected expense");
            SplitterError::Validation(e.to_string())
        })?;
        self.check_references(&draft)?;

        let id = existing_id.unwrap_or_default();
        let expense =
            Expense::from_draft(id, draft).map_err(|e| SplitterError::Validation(e.to_string()))?;

        let created = self.expenses.upsert(expense);
        let stored = self
            .expenses
            .get(id)
            .cloned()
            .ok_or_else(|| SplitterError::expense_not_found(id.to_string()))?;

        tracing::debug!(id = %id, created, amount = %stored.amount, "expense saved");

        self.invalidate(LedgerEvent::ExpenseSaved { id, created });
        Ok(stored)
    }

    /// Delete an expense; unknown ids are a no-op and return `None`
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let expense = self.expenses.delete(id)?;
        tracing::debug!(id = %id, "expense deleted");

        self.invalidate(LedgerEvent::ExpenseDeleted(id));
        Some(expense)
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    /// Expenses in entry order
    pub fn expenses(&self) -> &[Expense] {
        self.expenses.all()
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.total()
    }

    /// Remove every participant, expense and computed result
    pub fn clear_all(&mut self) {
        self.participants.clear();
        self.expenses.clear();
        self.outcome = Arc::new(SplitOutcome::default());
        self.stale = false;

        tracing::debug!("ledger cleared");
        self.notify(&LedgerEvent::Cleared);
    }

    // ---- results ------------------------------------------------------

    /// Recompute balances, then settlements, replacing the previous results
    pub fn recompute_results(&mut self) -> SplitterResult<Arc<SplitOutcome>> {
        let balances = compute_balances(self.participants.all(), self.expenses.all())?;
        let settlements = compute_settlements(&balances, &self.policy);

        tracing::info!(
            participants = self.participants.len(),
            expenses = self.expenses.len(),
            settlements = settlements.len(),
            "recomputed split"
        );

        self.outcome = Arc::new(SplitOutcome {
            balances,
            settlements,
        });
        self.stale = false;

        self.notify(&LedgerEvent::Recomputed);
        Ok(Arc::clone(&self.outcome))
    }

    /// The most recently computed results
    ///
    /// These may predate later mutations; see [`Ledger::is_stale`].
    pub fn results(&self) -> Arc<SplitOutcome> {
        Arc::clone(&self.outcome)
    }

    /// Whether a mutation happened since the last recompute
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // ---- notifications ------------------------------------------------

    /// Register a callback run after every mutation and recompute
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&LedgerEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn invalidate(&mut self, event: LedgerEvent) {
        self.stale = true;
        self.notify(&event);
    }

    fn notify(&self, event: &LedgerEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    fn check_references(&self, draft: &ExpenseDraft) -> SplitterResult<()> {
        let description = draft.description.trim();

        if let Some(payer) = draft.payer {
            if !self.participants.contains(payer) {
                return Err(SplitterError::unknown_participant(
                    format!("expense '{}' payer", description),
                    payer.to_string(),
                ));
            }
        }

        if let Some(sharer) = draft
            .sharers
            .iter()
            .find(|id| !self.participants.contains(**id))
        {
            return Err(SplitterError::unknown_participant(
                format!("expense '{}' sharer", description),
                sharer.to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("participants", &self.participants.len())
            .field("expenses", &self.expenses.len())
            .field("policy", &self.policy)
            .field("stale", &self.stale)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
