//! Expense model
//!
//! An expense is paid by one participant and divided evenly among a set of
//! sharers. [`ExpenseDraft`] is the unvalidated form a caller fills in;
//! [`Expense`] is what the registry stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, PersonId};
use super::money::Money;

/// Caller-supplied fields for creating or editing an expense
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    /// `None` when no payer has been selected yet
    pub payer: Option<PersonId>,
    pub sharers: Vec<PersonId>,
}

impl ExpenseDraft {
    /// Create a draft with every field filled in
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        payer: PersonId,
        sharers: impl IntoIterator<Item = PersonId>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            payer: Some(payer),
            sharers: sharers.into_iter().collect(),
        }
    }

    /// Check the fields that can be judged without the participant set
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.payer.is_none() {
            return Err(ExpenseValidationError::MissingPayer);
        }

        if self.sharers.is_empty() {
            return Err(ExpenseValidationError::NoSharers);
        }

        Ok(())
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Total amount paid, always positive
    pub amount: Money,

    /// Who paid
    pub payer: PersonId,

    /// Who shares the cost, in the order they were selected
    pub sharers: Vec<PersonId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Build an expense from a draft
    ///
    /// Validates the draft, trims the description and collapses repeated
    /// sharers (keeping the first occurrence).
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Result<Self, ExpenseValidationError> {
        draft.validate()?;
        let payer = draft.payer.ok_or(ExpenseValidationError::MissingPayer)?;

        let mut sharers: Vec<PersonId> = Vec::with_capacity(draft.sharers.len());
        for sharer in draft.sharers {
            if !sharers.contains(&sharer) {
                sharers.push(sharer);
            }
        }

        let now = Utc::now();
        Ok(Self {
            id,
            description: draft.description.trim().to_string(),
            amount: draft.amount,
            payer,
            sharers,
            created_at: now,
            updated_at: now,
        })
    }

    /// Amount each sharer owes for this expense
    pub fn per_person_share(&self) -> Money {
        self.amount.split(self.sharers.len())
    }

    /// Drop `person` from the sharers; returns true if they were present
    pub fn remove_sharer(&mut self, person: PersonId) -> bool {
        let before = self.sharers.len();
        self.sharers.retain(|id| *id != person);
        let removed = self.sharers.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    NonFiniteAmount,
    MissingPayer,
    NoSharers,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::NonFiniteAmount => write!(f, "Expense amount must be a finite number"),
            Self::MissingPayer => write!(f, "No payer selected"),
            Self::NoSharers => write!(f, "Expense must be shared by at least one participant"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
