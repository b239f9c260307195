//! In-memory registries for participants and expenses
//!
//! These own the source collections the ledger computes from. Nothing is
//! written to disk.

pub mod expenses;
pub mod participants;

pub use expenses::{Cascade, ExpenseRegistry};
pub use participants::ParticipantRegistry;
