//! Settlement plan display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Money, Settlement};

#[derive(Tabled)]
struct SettlementRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the settle-up plan as a table
pub fn format_settlement_table(settlements: &[Settlement], settings: &Settings) -> String {
    if settlements.is_empty() {
        return "Everyone is settled up. No payments needed.".to_string();
    }

    let rows = settlements.iter().enumerate().map(|(i, s)| SettlementRow {
        step: i + 1,
        from: s.from.name.clone(),
        to: s.to.name.clone(),
        amount: s
            .amount
            .format_with(&settings.currency_symbol, settings.display_precision()),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string()
}

/// One-line summary of the group's spending
pub fn format_summary(
    participant_count: usize,
    expense_count: usize,
    total: Money,
    settings: &Settings,
) -> String {
    format!(
        "{} participants, {} expenses, total spent {}",
        participant_count,
        expense_count,
        total.format_with(&settings.currency_symbol, settings.display_precision())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    #[test]
    fn test_empty_plan() {
        let output = format_settlement_table(&[], &Settings::default());
        assert_eq!(output, "Everyone is settled up. No payments needed.");
    }

    #[test]
    fn test_plan_rows() {
        let alice = Person::new("Alice");
        let settlements = vec![
            Settlement {
                from: Person::new("Bob"),
                to: alice.clone(),
                amount: Money::new(30.0),
            },
            Settlement {
                from: Person::new("Carol"),
                to: alice,
                amount: Money::new(12.5),
            },
        ];

        let output = format_settlement_table(&settlements, &Settings::default());
        assert!(output.contains("Bob"));
        assert!(output.contains("Carol"));
        assert!(output.contains("$30.00"));
        assert!(output.contains("$12.50"));
    }

    #[test]
    fn test_summary() {
        let line = format_summary(3, 2, Money::new(120.0), &Settings::default());
        assert_eq!(line, "3 participants, 2 expenses, total spent $120.00");
    }
}
