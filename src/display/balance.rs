//! Balance display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{BalanceRecord, Standing};

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Owed")]
    owed: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn status_label(standing: Standing) -> &'static str {
    match standing {
        Standing::Creditor => "gets back",
        Standing::Debtor => "owes",
        Standing::Settled => "settled",
    }
}

/// Format balance records as a table
pub fn format_balance_table(records: &[BalanceRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No balances to show. Add participants and expenses first.".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let precision = settings.display_precision();

    let rows = records.iter().map(|record| BalanceRow {
        name: record.person.name.clone(),
        paid: record.total_paid.format_with(symbol, precision),
        owed: record.total_owed.format_with(symbol, precision),
        balance: record.format_balance(symbol, settings.settle_threshold, precision),
        status: status_label(record.standing(settings.settle_threshold)),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Person};

    #[test]
    fn test_empty_balances() {
        let output = format_balance_table(&[], &Settings::default());
        assert!(output.starts_with("No balances"));
    }

    #[test]
    fn test_balance_table_contents() {
        let records = vec![
            BalanceRecord::new(Person::new("Alice"), Money::new(90.0), Money::new(30.0)),
            BalanceRecord::new(Person::new("Bob"), Money::zero(), Money::new(30.0)),
            BalanceRecord::new(Person::new("Carol"), Money::new(5.0), Money::new(5.0)),
        ];

        let output = format_balance_table(&records, &Settings::default());

        assert!(output.contains("Alice"));
        assert!(output.contains("+$60.00"));
        assert!(output.contains("-$30.00"));
        assert!(output.contains("gets back"));
        assert!(output.contains("owes"));
        assert!(output.contains("settled"));
    }

    #[test]
    fn test_currency_symbol_from_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        let records = vec![BalanceRecord::new(
            Person::new("Ana"),
            Money::new(12.0),
            Money::new(2.0),
        )];

        let output = format_balance_table(&records, &settings);
        assert!(output.contains("+€10.00"));
    }
}
