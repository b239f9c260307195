//! JSON export
//!
//! A [`SplitReport`] bundles the source data and the computed outcome so a
//! report can be read on its own.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{BalanceRecord, Expense, Money, Person, Settlement};
use crate::services::Ledger;

/// Schema version stamped into every report
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Everything needed to read a split without the ledger
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub app_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub currency_symbol: String,
    pub total_expenses: Money,
    pub participants: Vec<Person>,
    pub expenses: Vec<Expense>,
    pub balances: Vec<BalanceRecord>,
    pub settlements: Vec<Settlement>,
}

impl SplitReport {
    /// Snapshot a ledger's data and its latest results
    ///
    /// Settlement amounts are rounded to the ledger policy's decimal places.
    /// Fails if the ledger has been changed since its last recompute.
    pub fn from_ledger(
        ledger: &Ledger,
        group_name: Option<String>,
        currency_symbol: impl Into<String>,
    ) -> SplitterResult<Self> {
        if ledger.is_stale() {
            return Err(SplitterError::Export(
                "results are out of date; recompute before exporting".into(),
            ));
        }

        let outcome = ledger.results();
        let decimal_places = ledger.policy().decimal_places();
        let settlements = outcome
            .settlements
            .iter()
            .map(|s| Settlement {
                amount: s.amount.round_to(decimal_places),
                ..s.clone()
            })
            .collect();

        Ok(Self {
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            group_name,
            currency_symbol: currency_symbol.into(),
            total_expenses: ledger.total_expenses(),
            participants: ledger.participants().to_vec(),
            expenses: ledger.expenses().to_vec(),
            balances: outcome.balances.clone(),
            settlements,
        })
    }
}

/// Write the report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &SplitReport, writer: &mut W) -> SplitterResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| SplitterError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitterError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;

    fn dinner_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let a = ledger.add_participant("Alice").unwrap();
        let b = ledger.add_participant("Bob").unwrap();
        let c = ledger.add_participant("Carol").unwrap();
        ledger
            .upsert_expense(
                ExpenseDraft::new("Dinner", Money::new(90.0), a.id, [a.id, b.id, c.id]),
                None,
            )
            .unwrap();
        ledger.recompute_results().unwrap();
        ledger
    }

    #[test]
    fn test_export_json() {
        let ledger = dinner_ledger();
        let report = SplitReport::from_ledger(&ledger, Some("Trip".into()), "$").unwrap();

        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["group_name"], "Trip");
        assert_eq!(value["total_expenses"], 90.0);
        assert_eq!(value["balances"][0]["balance"], 60.0);
        assert_eq!(value["settlements"].as_array().unwrap().len(), 2);
        assert_eq!(value["settlements"][0]["from"]["name"], "Bob");
    }

    #[test]
    fn test_settlement_amounts_rounded() {
        let mut ledger = Ledger::new();
        let a = ledger.add_participant("A").unwrap();
        let b = ledger.add_participant("B").unwrap();
        let c = ledger.add_participant("C").unwrap();
        ledger
            .upsert_expense(
                ExpenseDraft::new("Hotel", Money::new(100.0), a.id, [a.id, b.id, c.id]),
                None,
            )
            .unwrap();
        ledger.recompute_results().unwrap();

        let report = SplitReport::from_ledger(&ledger, None, "$").unwrap();
        assert!(report
            .settlements
            .iter()
            .all(|s| s.amount == Money::new(33.33)));
    }

    #[test]
    fn test_stale_ledger_rejected() {
        let mut ledger = dinner_ledger();
        ledger.add_participant("Dave").unwrap();

        let err = SplitReport::from_ledger(&ledger, None, "$").unwrap_err();
        assert!(matches!(err, SplitterError::Export(_)));
    }
}
