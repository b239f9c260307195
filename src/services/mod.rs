//! Service layer for bill-splitter
//!
//! Balance calculation and settlement reduction, the [`Ledger`] that ties
//! them to the registries, a mutex-guarded handle for shared use, and group
//! file import.

pub mod balance;
pub mod import;
pub mod ledger;
pub mod settlement;
pub mod shared;

pub use balance::compute_balances;
pub use import::{GroupExpense, GroupFile, GroupFormat};
pub use ledger::{Ledger, LedgerEvent, Listener, SplitOutcome, SubscriptionId};
pub use settlement::compute_settlements;
pub use shared::SharedLedger;
