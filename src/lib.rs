//! bill-splitter - Split shared expenses and settle up
//!
//! This library records who paid for what among a group of participants,
//! works out each person's net balance, and reduces those balances to a
//! short list of payments that settles everyone.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (people, expenses, balances, settlements)
//! - `registry`: In-memory participant and expense collections
//! - `services`: Balance calculation, settlement reduction, and the ledger
//! - `display`: Terminal tables
//! - `export`: CSV, JSON and YAML output
//! - `logging`: `tracing` subscriber setup
//! - `cli`: Command handlers for the `billsplit` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use bill_splitter::models::{ExpenseDraft, Money};
//! use bill_splitter::services::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let alice = ledger.add_participant("Alice")?;
//! let bob = ledger.add_participant("Bob")?;
//! ledger.upsert_expense(
//!     ExpenseDraft::new("Lunch", Money::new(40.0), alice.id, [alice.id, bob.id]),
//!     None,
//! )?;
//! let outcome = ledger.recompute_results()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod registry;
pub mod services;

pub use error::{SplitterError, SplitterResult};
pub use services::{Ledger, SharedLedger, SplitOutcome};
