//! Per-participant balance records

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::person::Person;

/// Where a participant stands once every expense is accounted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// Paid more than their share; should receive money
    Creditor,
    /// Paid less than their share; should send money
    Debtor,
    /// Within the settle threshold of zero
    Settled,
}

/// Derived totals for one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub person: Person,
    /// Sum of amounts this person paid
    pub total_paid: Money,
    /// Sum of this person's per-expense shares
    pub total_owed: Money,
    /// `total_paid - total_owed`
    pub balance: Money,
}

impl BalanceRecord {
    pub fn new(person: Person, total_paid: Money, total_owed: Money) -> Self {
        Self {
            person,
            total_paid,
            total_owed,
            balance: total_paid - total_owed,
        }
    }

    /// Classify the balance against `threshold`
    pub fn standing(&self, threshold: f64) -> Standing {
        if self.balance.is_settled(threshold) {
            Standing::Settled
        } else if self.balance.is_positive() {
            Standing::Creditor
        } else {
            Standing::Debtor
        }
    }

    /// Signed balance for display: `+$60.00`, `-$30.00`, or `$0.00` when settled
    pub fn format_balance(&self, symbol: &str, threshold: f64, decimal_places: usize) -> String {
        match self.standing(threshold) {
            Standing::Creditor => format!("+{}", self.balance.format_with(symbol, decimal_places)),
            Standing::Debtor => self.balance.format_with(symbol, decimal_places),
            Standing::Settled => Money::zero().format_with(symbol, decimal_places),
        }
    }
}
