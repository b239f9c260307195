//! Core data models for bill-splitter
//!
//! People, expenses, and the derived balance and settlement records.

pub mod balance;
pub mod expense;
pub mod ids;
pub mod money;
pub mod person;
pub mod settlement;

pub use balance::{BalanceRecord, Standing};
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use ids::{ExpenseId, PersonId};
pub use money::Money;
pub use person::{Person, PersonValidationError};
pub use settlement::{Settlement, SettlementPolicy};
