//! Display formatting for terminal output
//!
//! Renders balances and settlement plans as tables.

pub mod balance;
pub mod settlement;

pub use balance::format_balance_table;
pub use settlement::{format_settlement_table, format_summary};
