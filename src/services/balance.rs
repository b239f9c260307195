//! Balance calculation
//!
//! Turns participants and expenses into one [`BalanceRecord`] per person.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{BalanceRecord, Expense, Money, Person, PersonId};

/// Compute every participant's paid, owed and net balance
///
/// Returns an empty list when there are no participants or no expenses.
/// Records are sorted by balance, highest first; equal balances keep the
/// participants' order.
///
/// # Errors
///
/// Fails with [`SplitterError::Referential`] if an expense names a payer
/// or sharer that is not in `participants`.
pub fn compute_balances(
    participants: &[Person],
    expenses: &[Expense],
) -> SplitterResult<Vec<BalanceRecord>> {
    if participants.is_empty() || expenses.is_empty() {
        return Ok(Vec::new());
    }

    let index: HashMap<PersonId, usize> = participants
        .iter()
        .enumerate()
        .map(|(i, person)| (person.id, i))
        .collect();
    let slot = |id: PersonId, expense: &Expense, role: &str| {
        index.get(&id).copied().ok_or_else(|| {
            SplitterError::unknown_participant(
                format!("expense '{}' {}", expense.description, role),
                id.to_string(),
            )
        })
    };

    let mut paid = vec![Money::zero(); participants.len()];
    let mut owed = vec![Money::zero(); participants.len()];

    for expense in expenses {
        paid[slot(expense.payer, expense, "payer")?] += expense.amount;

        let share = expense.per_person_share();
        for &sharer in &expense.sharers {
            owed[slot(sharer, expense, "sharer")?] += share;
        }
    }

    let mut records: Vec<BalanceRecord> = participants
        .iter()
        .zip(paid.into_iter().zip(owed))
        .map(|(person, (paid, owed))| BalanceRecord::new(person.clone(), paid, owed))
        .collect();

    // `sort_by` is stable, so ties stay in participant order
    records.sort_by(|a, b| {
        b.balance
            .partial_cmp(&a.balance)
            .unwrap_or(Ordering::Equal)
    });

    Ok(records)
}
