//! CSV export
//!
//! Balances and settlements as spreadsheet-friendly rows. Amounts are
//! written with exactly the configured number of decimals.

use serde::Serialize;
use std::io::Write;

use crate::error::SplitterResult;
use crate::models::{BalanceRecord, Money, Settlement};

#[derive(Serialize)]
struct BalanceCsvRow<'a> {
    id: String,
    name: &'a str,
    total_paid: String,
    total_owed: String,
    balance: String,
}

#[derive(Serialize)]
struct SettlementCsvRow<'a> {
    step: usize,
    from: &'a str,
    to: &'a str,
    amount: String,
}

fn fixed(amount: Money, decimal_places: u32) -> String {
    // `+ 0.0` turns a rounded -0.0 into 0.0
    let value = amount.round_to(decimal_places).amount() + 0.0;
    format!("{:.*}", decimal_places as usize, value)
}

/// Export balance records to CSV
pub fn export_balances_csv<W: Write>(
    records: &[BalanceRecord],
    decimal_places: u32,
    writer: W,
) -> SplitterResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer.serialize(BalanceCsvRow {
            id: record.person.id.to_string(),
            name: &record.person.name,
            total_paid: fixed(record.total_paid, decimal_places),
            total_owed: fixed(record.total_owed, decimal_places),
            balance: fixed(record.balance, decimal_places),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export a settlement plan to CSV
pub fn export_settlements_csv<W: Write>(
    settlements: &[Settlement],
    decimal_places: u32,
    writer: W,
) -> SplitterResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (i, settlement) in settlements.iter().enumerate() {
        csv_writer.serialize(SettlementCsvRow {
            step: i + 1,
            from: &settlement.from.name,
            to: &settlement.to.name,
            amount: fixed(settlement.amount, decimal_places),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
